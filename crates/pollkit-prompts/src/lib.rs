//! Prompt variables for development environment files.
//!
//! Prompts are read from a structured source (YAML by default), encoded as
//! `ENV_KEY=base64(value)` lines and written into the managed block of an
//! existing environment file. Running the update again with the same prompts
//! leaves the file untouched.

pub mod encoder;
pub mod error;
pub mod prompt_set;
pub mod update;

pub use encoder::{EncodedLine, encode, env_key};
pub use error::{Error, Result};
pub use prompt_set::PromptSet;
pub use update::{UpdateOptions, UpdateReport, update_prompts};
