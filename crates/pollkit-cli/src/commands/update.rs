//! update-prompts command implementation

use colored::Colorize;

use pollkit_blocks::PatchOutcome;
use pollkit_prompts::{UpdateOptions, UpdateReport, update_prompts};

use crate::cli::UpdatePromptsCli;
use crate::error::Result;

/// Run the prompt update described by the parsed arguments.
pub fn run_update(cli: &UpdatePromptsCli) -> Result<UpdateReport> {
    let options = UpdateOptions::new(cli.prompts.as_path(), cli.target.as_path()).dry_run(cli.dry_run);
    let report = update_prompts(&options)?;
    print_report(&report, cli.dry_run);
    Ok(report)
}

fn print_report(report: &UpdateReport, dry_run: bool) {
    if dry_run {
        if report.outcome == PatchOutcome::Unchanged {
            println!("{} Prompts already up to date in {}", "OK".green().bold(), report.target);
        } else {
            print!("{}", report.unified_diff());
            println!(
                "{} Would update {} prompts in {}",
                "dry-run".yellow().bold(),
                report.prompt_count,
                report.target
            );
        }
        return;
    }

    match report.outcome {
        PatchOutcome::Unchanged => {
            println!("{} Prompts already up to date in {}", "OK".green().bold(), report.target)
        }
        PatchOutcome::Inserted | PatchOutcome::Replaced => {
            println!("{} Prompts updated in {}", "OK".green().bold(), report.target)
        }
    }
}
