//! Command implementations for pollkit-cli

pub mod generate;
pub mod update;

pub use generate::run_generate;
pub use update::run_update;
