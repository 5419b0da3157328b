//! Sample inputs shared by the test suites.

/// Prompt source with a multi-line value, a unicode value and an empty one.
pub const PROMPTS_YAML: &str = r#"system-prompt: |
  You are a helpful assistant that creates polls.
  Keep options short.
poll-title: "Who wins? 🏆"
empty-note: ""
"#;

/// Lines [`PROMPTS_YAML`] encodes to, in order.
pub const PROMPTS_ENCODED: [&str; 3] = [
    "SYSTEM_PROMPT=WW91IGFyZSBhIGhlbHBmdWwgYXNzaXN0YW50IHRoYXQgY3JlYXRlcyBwb2xscy4KS2VlcCBvcHRpb25zIHNob3J0Lgo=",
    "POLL_TITLE=V2hvIHdpbnM/IPCfj4Y=",
    "EMPTY_NOTE=",
];

/// A development environment file without a managed block.
pub const ENV_FILE: &str = "# Local development settings\nDATABASE_URL=postgres://localhost/polls\nPORT=8080\n";

/// Marker lines of the prompt block.
pub const START_MARKER: &str = "# --- AUTO-GENERATED PROMPTS START (DO NOT EDIT MANUALLY) ---";
pub const END_MARKER: &str = "# --- AUTO-GENERATED PROMPTS END ---";

/// A small account catalog with every known category.
pub const CATALOG_JSON: &str = r#"{
  "language_creators": [
    {"username": "gvanrossum", "name": "Guido van Rossum", "known_for": "Python"},
    {"username": "matz", "name": "Yukihiro Matsumoto", "known_for": "Ruby"},
    {"username": "graydon", "name": "Graydon Hoare", "known_for": "Rust"}
  ],
  "framework_authors": [
    {"username": "dhh", "name": "David Heinemeier Hansson", "known_for": "Rails"},
    {"username": "yyx990803", "name": "Evan You", "known_for": "Vue"}
  ],
  "tool_creators": [
    {"username": "torvalds", "name": "Linus Torvalds", "known_for": "Git"},
    {"username": "mitchellh", "name": "Mitchell Hashimoto", "known_for": "Vagrant"}
  ],
  "oss_legends": [
    {"username": "antirez", "name": "Salvatore Sanfilippo", "known_for": "Redis"},
    {"username": "sindresorhus"}
  ],
  "poll_templates": [
    "Who is the better {category}: {user1} or {user2}?",
    "{user1} vs {user2}: which of these {category} had more impact?",
    "Rank these {category}: {user1}, {user2}, {user3}"
  ]
}
"#;

/// Environment file holding a block with `lines` between the markers.
pub fn env_with_block(before: &str, lines: &[&str], after: &str) -> String {
    let mut content = String::from(before);
    content.push_str(START_MARKER);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str(END_MARKER);
    content.push('\n');
    content.push_str(after);
    content
}
