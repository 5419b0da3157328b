//! Error types for pollkit-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pollkit-prompts
    #[error(transparent)]
    Prompts(#[from] pollkit_prompts::Error),

    /// Error from pollkit-polls
    #[error(transparent)]
    Polls(#[from] pollkit_polls::Error),
}
