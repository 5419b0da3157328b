//! Error types for pollkit-blocks

use crate::locator::MalformedBlock;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed managed block: {0}")]
    Malformed(MalformedBlock),

    #[error("Block location {start}..={end} does not fit content of {line_count} lines")]
    StaleLocation {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("Block line {index} is not a single plain line: {reason}")]
    InvalidBodyLine { index: usize, reason: &'static str },
}
