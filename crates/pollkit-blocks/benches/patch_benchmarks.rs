use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pollkit_blocks::{Markers, locate, plan};

fn env_file(lines: usize, with_block: bool) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!("SETTING_{}=value-{}\n", i, i));
    }
    if with_block {
        content.push('\n');
        content.push_str(Markers::PROMPTS.start);
        content.push('\n');
        content.push_str("OLD=b2xk\n");
        content.push_str(Markers::PROMPTS.end);
        content.push('\n');
    }
    content
}

fn locate_benchmark(c: &mut Criterion) {
    let content = env_file(1_000, true);
    c.bench_function("locate (1k lines)", |b| {
        b.iter(|| locate(black_box(&content), black_box(&Markers::PROMPTS)))
    });
}

fn plan_benchmark(c: &mut Criterion) {
    let body: Vec<String> = (0..20).map(|i| format!("PROMPT_{}=cHJvbXB0", i)).collect();

    let absent = env_file(1_000, false);
    c.bench_function("plan insert (1k lines)", |b| {
        b.iter(|| plan(black_box(&absent), black_box(&body), &Markers::PROMPTS).unwrap())
    });

    let present = env_file(1_000, true);
    c.bench_function("plan replace (1k lines)", |b| {
        b.iter(|| plan(black_box(&present), black_box(&body), &Markers::PROMPTS).unwrap())
    });
}

criterion_group!(benches, locate_benchmark, plan_benchmark);
criterion_main!(benches);
