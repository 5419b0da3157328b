//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use pollkit_fs::DefaultPath;

/// Update an environment file with base64-encoded prompts
///
/// Reads prompt definitions and rewrites the auto-generated block of the
/// target file. Running it again with the same prompts changes nothing.
#[derive(Parser, Debug)]
#[command(name = "update-prompts")]
#[command(author, version, about, long_about = None)]
pub struct UpdatePromptsCli {
    /// Environment file to update (must already exist)
    #[arg(default_value = DefaultPath::EnvFile.as_str())]
    pub target: PathBuf,

    /// Prompt definitions (YAML, JSON or TOML)
    #[arg(long, env = "POLLKIT_PROMPTS", default_value = DefaultPath::PromptsFile.as_str())]
    pub prompts: PathBuf,

    /// Show the changes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Generate test poll requests from notable accounts
#[derive(Parser, Debug)]
#[command(name = "generate-test-polls")]
#[command(author, version, about, long_about = None)]
pub struct GeneratePollsCli {
    /// Number of polls to generate
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Specific category to use
    #[arg(long)]
    pub category: Option<String>,

    /// Number of options per poll (2-3)
    #[arg(long, default_value_t = 2)]
    pub options: usize,

    /// Account catalog
    #[arg(long, default_value = DefaultPath::PollCatalog.as_str())]
    pub data: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
