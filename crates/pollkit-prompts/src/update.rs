//! The prompt update pipeline: load, encode, locate, patch, write.
//!
//! Every check runs before the single write, so a failure at any step leaves
//! the target file exactly as it was.

use pollkit_blocks::{Markers, PatchOutcome, plan};
use pollkit_fs::{DefaultPath, NormalizedPath, io};
use similar::TextDiff;

use crate::encoder::encode;
use crate::error::{Error, Result};
use crate::prompt_set::PromptSet;

/// Inputs for one update run.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Structured prompt source
    pub prompts: NormalizedPath,
    /// Existing environment file to patch
    pub target: NormalizedPath,
    /// Compute the result without writing it
    pub dry_run: bool,
    pub markers: Markers,
}

impl UpdateOptions {
    pub fn new(prompts: impl Into<NormalizedPath>, target: impl Into<NormalizedPath>) -> Self {
        Self {
            prompts: prompts.into(),
            target: target.into(),
            dry_run: false,
            markers: Markers::PROMPTS,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self::new(DefaultPath::PromptsFile.as_str(), DefaultPath::EnvFile.as_str())
    }
}

/// What an update run did.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub target: NormalizedPath,
    pub outcome: PatchOutcome,
    pub prompt_count: usize,
    /// Whether the target file was rewritten
    pub written: bool,
    pub previous: String,
    pub content: String,
}

impl UpdateReport {
    /// Unified diff between the old and new target content.
    ///
    /// Empty when nothing changes.
    pub fn unified_diff(&self) -> String {
        if self.previous == self.content {
            return String::new();
        }
        let name = self.target.as_str();
        TextDiff::from_lines(&self.previous, &self.content)
            .unified_diff()
            .context_radius(3)
            .header(name, name)
            .to_string()
    }
}

/// Bring the managed prompt block of `options.target` in line with
/// `options.prompts`.
pub fn update_prompts(options: &UpdateOptions) -> Result<UpdateReport> {
    if !options.prompts.is_file() {
        return Err(Error::MissingSourceConfig {
            path: options.prompts.to_native(),
        });
    }
    if !options.target.is_file() {
        return Err(Error::MissingTargetFile {
            path: options.target.to_native(),
        });
    }

    let prompts = PromptSet::load(&options.prompts)?;
    let lines = encode(&prompts)?;

    let previous = io::read_text(&options.target).map_err(|e| target_error(&options.target, e))?;
    let patched = plan(&previous, &lines, &options.markers).map_err(|e| match e {
        pollkit_blocks::Error::Malformed(block) => Error::MalformedBlock {
            path: options.target.to_native(),
            block,
        },
        other => other.into(),
    })?;

    let written = patched.is_changed() && !options.dry_run;
    if written {
        io::write_existing(&options.target, &patched.content)
            .map_err(|e| target_error(&options.target, e))?;
        tracing::info!(path = %options.target, outcome = ?patched.outcome, "updated prompts");
    } else {
        tracing::debug!(
            path = %options.target,
            outcome = ?patched.outcome,
            dry_run = options.dry_run,
            "skipped write"
        );
    }

    Ok(UpdateReport {
        target: options.target.clone(),
        outcome: patched.outcome,
        prompt_count: lines.len(),
        written,
        previous,
        content: patched.content,
    })
}

fn target_error(target: &NormalizedPath, error: pollkit_fs::Error) -> Error {
    if error.is_not_found() {
        Error::MissingTargetFile {
            path: target.to_native(),
        }
    } else {
        error.into()
    }
}
