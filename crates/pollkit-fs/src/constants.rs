//! Conventional file locations used by the developer scripts.

/// Default file locations, relative to the directory the tools run from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPath {
    /// The development environment file patched by `update-prompts`
    EnvFile,
    /// The prompt definitions read by `update-prompts`
    PromptsFile,
    /// The account catalog read by `generate-test-polls`
    PollCatalog,
}

impl DefaultPath {
    /// Get the string representation of the path.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnvFile => ".env.dev",
            Self::PromptsFile => "prompts.yaml",
            Self::PollCatalog => "data/notable-github-users.json",
        }
    }
}
