//! Command-line entry points for pollkit developer tooling
//!
//! Two binaries share this library:
//!
//! - `update-prompts` writes base64 prompt variables into an environment file
//! - `generate-test-polls` prints random poll requests for manual testing

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use error::{CliError, Result};
