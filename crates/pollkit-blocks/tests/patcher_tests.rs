//! Integration tests for managed block patching.

use pollkit_blocks::{Error, LocateResult, Markers, PatchOutcome, locate, patch, plan};
use pretty_assertions::assert_eq;

const M: Markers = Markers::PROMPTS;

fn apply(content: &str, body: &[&str]) -> String {
    let located = locate(content, &M);
    patch(content, &located, body, &M).unwrap()
}

#[test]
fn test_absent_block_appended_after_blank_line() {
    let patched = apply("A=1\n", &["FOO=YmFy"]);
    assert_eq!(
        patched,
        "A=1\n\n# --- AUTO-GENERATED PROMPTS START (DO NOT EDIT MANUALLY) ---\nFOO=YmFy\n# --- AUTO-GENERATED PROMPTS END ---\n"
    );
}

#[test]
fn test_appended_block_snapshot() {
    let patched = apply("# dev settings\nPORT=8080\n", &["SYSTEM_PROMPT=WW91IGFyZSBoZWxwZnVs", "EMPTY="]);
    insta::assert_snapshot!(format!("{:?}", patched), @r##""# dev settings\nPORT=8080\n\n# --- AUTO-GENERATED PROMPTS START (DO NOT EDIT MANUALLY) ---\nSYSTEM_PROMPT=WW91IGFyZSBoZWxwZnVs\nEMPTY=\n# --- AUTO-GENERATED PROMPTS END ---\n""##);
}

#[test]
fn test_replacement_discards_stale_lines_and_keeps_surroundings() {
    let before = "# header\nA=1\n\n";
    let after = "\n# footer\nB=2\n";
    let content = format!("{}{}\nOLD_ONE=b2xk\nOLD_TWO=b2xk\n{}{}", before, M.start, M.end, after);

    let patched = apply(&content, &["NEW=bmV3"]);

    assert_eq!(patched, format!("{}{}\nNEW=bmV3\n{}{}", before, M.start, M.end, after));
    assert!(!patched.contains("OLD_ONE"));
    assert!(!patched.contains("OLD_TWO"));
}

#[test]
fn test_replacement_with_empty_body() {
    let content = format!("{}\nOLD=b2xk\n{}\n", M.start, M.end);
    assert_eq!(apply(&content, &[]), format!("{}\n{}\n", M.start, M.end));
}

#[test]
fn test_replacement_keeps_missing_trailing_newline() {
    let content = format!("A=1\n{}\nOLD=b2xk\n{}", M.start, M.end);
    assert_eq!(apply(&content, &["N=bg=="]), format!("A=1\n{}\nN=bg==\n{}", M.start, M.end));
}

#[test]
fn test_replacement_keeps_crlf_outside_block() {
    let content = format!("A=1\r\n{}\r\nOLD=b2xk\r\n{}\r\nB=2\r\n", M.start, M.end);
    let patched = apply(&content, &["N=bg=="]);
    assert!(patched.starts_with("A=1\r\n"));
    assert!(patched.ends_with("\nB=2\r\n"));

    let interior = format!("{}\nN=bg==\n{}\n", M.start, M.end);
    assert!(patched.contains(&interior));
    assert_eq!(patched.matches('\r').count(), 2);
}

#[test]
fn test_applying_twice_is_idempotent() {
    let body = ["SYSTEM_PROMPT=WW91IGFyZSBoZWxwZnVs", "GREETING=aGk="];
    for content in ["", "A=1", "A=1\n", "A=1\n\n\n", "# only comments\n"] {
        let once = apply(content, &body);
        let twice = apply(&once, &body);
        assert_eq!(once, twice, "not idempotent for {:?}", content);
    }
}

#[test]
fn test_malformed_is_refused() {
    let content = format!("A=1\n{}\nOLD=b2xk\n", M.start);
    let located = locate(&content, &M);
    assert!(matches!(located, LocateResult::Malformed(_)));

    let result = patch(&content, &located, &["NEW=bmV3"], &M);
    match result {
        Err(Error::Malformed(block)) => assert_eq!(block.start_lines, vec![2]),
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn test_plan_outcomes() {
    let body = ["K=dg=="];

    let first = plan("A=1\n", &body, &M).unwrap();
    assert_eq!(first.outcome, PatchOutcome::Inserted);
    assert!(first.is_changed());

    let second = plan(&first.content, &body, &M).unwrap();
    assert_eq!(second.outcome, PatchOutcome::Unchanged);
    assert_eq!(second.content, first.content);
    assert!(!second.is_changed());

    let third = plan(&first.content, &["K=dzI="], &M).unwrap();
    assert_eq!(third.outcome, PatchOutcome::Replaced);
}

#[test]
fn test_plan_rejects_malformed() {
    let content = format!("{}\nA=1\n", M.end);
    assert!(matches!(plan(&content, &["K=dg=="], &M), Err(Error::Malformed(_))));
}
