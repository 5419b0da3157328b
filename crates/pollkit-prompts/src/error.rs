//! Error types for pollkit-prompts

use std::path::PathBuf;

use pollkit_blocks::MalformedBlock;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Prompt source {path} not found")]
    MissingSourceConfig { path: PathBuf },

    #[error("Target file {path} not found")]
    MissingTargetFile { path: PathBuf },

    #[error("Malformed prompt block in {path}: {block}. Fix or remove the marker lines by hand")]
    MalformedBlock { path: PathBuf, block: MalformedBlock },

    #[error("Cannot encode {subject}: {reason}")]
    Encoding { subject: String, reason: String },

    #[error("Cannot decode {key}: {reason}")]
    Decode { key: String, reason: String },

    #[error(transparent)]
    Fs(#[from] pollkit_fs::Error),

    #[error(transparent)]
    Blocks(#[from] pollkit_blocks::Error),
}

impl Error {
    pub(crate) fn encoding(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Encoding {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}
