//! Filesystem access for pollkit developer tooling
//!
//! Provides normalized paths, format-detecting config loading and
//! whole-file I/O for editing existing files in place.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::DefaultPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
