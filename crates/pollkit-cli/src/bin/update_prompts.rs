//! Update an environment file with base64-encoded prompts.

use clap::Parser;
use colored::Colorize;

use pollkit_cli::cli::UpdatePromptsCli;
use pollkit_cli::{commands, logging};

fn main() {
    let cli = UpdatePromptsCli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run_update(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}
