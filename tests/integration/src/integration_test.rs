//! End-to-end integration tests for the developer workflow
//!
//! Exercises prompt edits over several runs against one environment file,
//! reading the generated block back the way the application would.

use pollkit_blocks::{LocateResult, Markers, PatchOutcome, locate};
use pollkit_fs::NormalizedPath;
use pollkit_polls::{Catalog, PollSpec, generate_batch};
use pollkit_prompts::{EncodedLine, Error, PromptSet, UpdateOptions, update_prompts};
use pollkit_test_utils::{TestWorkspace, fixtures};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Decode every variable inside the managed block of `content`.
fn read_block(content: &str) -> Vec<(String, String)> {
    let LocateResult::Present { start, end } = locate(content, &Markers::PROMPTS) else {
        panic!("no managed block in:\n{}", content);
    };
    content
        .split('\n')
        .skip(start + 1)
        .take(end - start - 1)
        .map(|line| {
            let parsed = EncodedLine::parse(line).expect("block line is KEY=value");
            (parsed.key().to_string(), parsed.decode_value().unwrap())
        })
        .collect()
}

fn setup(env: &str) -> (TestWorkspace, UpdateOptions) {
    let ws = TestWorkspace::new();
    ws.write_file("prompts.yaml", fixtures::PROMPTS_YAML);
    ws.write_file(".env.dev", env);
    let options = UpdateOptions::new(ws.path("prompts.yaml"), ws.path(".env.dev"));
    (ws, options)
}

#[test]
fn test_prompt_edits_over_several_runs() {
    let (ws, options) = setup(fixtures::ENV_FILE);

    // First run inserts the block.
    assert_eq!(update_prompts(&options).unwrap().outcome, PatchOutcome::Inserted);
    let vars = read_block(&ws.read_file(".env.dev"));
    assert_eq!(
        vars,
        vec![
            (
                "SYSTEM_PROMPT".to_string(),
                "You are a helpful assistant that creates polls.\nKeep options short.\n".to_string()
            ),
            ("POLL_TITLE".to_string(), "Who wins? 🏆".to_string()),
            ("EMPTY_NOTE".to_string(), String::new()),
        ]
    );

    // Someone adds a setting below the block by hand.
    let mut edited = ws.read_file(".env.dev");
    edited.push_str("FEATURE_FLAG=on\n");
    ws.write_file(".env.dev", &edited);

    // A prompt is removed and another one changes.
    ws.write_file("prompts.yaml", "system-prompt: Be brief.\nnew-prompt: Hello\n");
    assert_eq!(update_prompts(&options).unwrap().outcome, PatchOutcome::Replaced);

    let content = ws.read_file(".env.dev");
    assert_eq!(
        read_block(&content),
        vec![
            ("SYSTEM_PROMPT".to_string(), "Be brief.".to_string()),
            ("NEW_PROMPT".to_string(), "Hello".to_string()),
        ]
    );
    assert!(content.starts_with(fixtures::ENV_FILE));
    assert!(content.ends_with(&format!("{}\nFEATURE_FLAG=on\n", fixtures::END_MARKER)));
    assert!(!content.contains("POLL_TITLE"));

    // Nothing left to do.
    let report = update_prompts(&options).unwrap();
    assert_eq!(report.outcome, PatchOutcome::Unchanged);
    assert_eq!(ws.read_file(".env.dev"), content);
}

#[test]
fn test_empty_prompt_source_keeps_empty_block() {
    let (ws, options) = setup(fixtures::ENV_FILE);
    update_prompts(&options).unwrap();

    ws.write_file("prompts.yaml", "{}\n");
    update_prompts(&options).unwrap();

    let content = ws.read_file(".env.dev");
    assert!(read_block(&content).is_empty());
    assert!(content.ends_with(&format!("{}\n{}\n", fixtures::START_MARKER, fixtures::END_MARKER)));
}

#[test]
fn test_leftover_marker_blocks_every_run_until_fixed() {
    let env = format!("{}PORT=1\n{}\n", fixtures::ENV_FILE, fixtures::END_MARKER);
    let (ws, options) = setup(&env);

    for _ in 0..2 {
        assert!(matches!(update_prompts(&options), Err(Error::MalformedBlock { .. })));
        assert_eq!(ws.read_file(".env.dev"), env);
    }

    // Removing the stray marker lets the next run append a fresh block.
    ws.write_file(".env.dev", fixtures::ENV_FILE);
    assert_eq!(update_prompts(&options).unwrap().outcome, PatchOutcome::Inserted);
}

#[test]
fn test_prompt_set_loaded_matches_block() {
    let (ws, options) = setup(fixtures::ENV_FILE);
    update_prompts(&options).unwrap();

    let prompts = PromptSet::load(&NormalizedPath::new(ws.path("prompts.yaml"))).unwrap();
    let block = read_block(&ws.read_file(".env.dev"));

    assert_eq!(block.len(), prompts.len());
    for ((key, value), (env_key, decoded)) in prompts.iter().zip(&block) {
        assert_eq!(env_key, &key.to_uppercase().replace('-', "_"));
        assert_eq!(decoded, value);
    }
}

#[test]
fn test_generated_polls_reference_catalog_accounts() {
    let ws = TestWorkspace::new();
    let path = ws.write_file("data/notable-github-users.json", fixtures::CATALOG_JSON);
    let catalog = Catalog::load(&NormalizedPath::new(path)).unwrap();

    let all_handles: Vec<String> = catalog
        .categories
        .values()
        .flatten()
        .map(|a| a.handle())
        .collect();

    let polls = generate_batch(&catalog, &PollSpec::default(), 25, &mut StdRng::seed_from_u64(2024)).unwrap();

    for poll in polls {
        let mentioned = all_handles.iter().filter(|h| poll.contains(h.as_str())).count();
        assert!(mentioned >= 2, "poll mentions fewer than two accounts: {}", poll);
    }
}
