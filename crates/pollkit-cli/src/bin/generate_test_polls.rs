//! Print random poll requests built from notable accounts.

use clap::Parser;
use colored::Colorize;

use pollkit_cli::cli::GeneratePollsCli;
use pollkit_cli::{commands, logging};

fn main() {
    let cli = GeneratePollsCli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run_generate(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}
