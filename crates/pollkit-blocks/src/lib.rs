//! Sentinel-delimited managed blocks in plain text files.
//!
//! A managed block is a run of lines owned by a tool, bounded by an exact
//! start marker line and an exact end marker line:
//!
//! ```text
//! # --- AUTO-GENERATED PROMPTS START (DO NOT EDIT MANUALLY) ---
//! SYSTEM_PROMPT=WW91IGFyZSBoZWxwZnVs
//! # --- AUTO-GENERATED PROMPTS END ---
//! ```
//!
//! Work is split in two steps:
//!
//! - [`locate`] scans the content and reports [`LocateResult::Absent`],
//!   [`LocateResult::Present`] or [`LocateResult::Malformed`].
//! - [`patch`] consumes that result and returns new content without touching
//!   its inputs. A malformed file is refused rather than repaired.
//!
//! [`plan`] chains both and reports whether anything would change.

pub mod error;
pub mod locator;
pub mod markers;
pub mod patcher;

pub use error::{Error, Result};
pub use locator::{LocateResult, MalformedBlock, MalformedReason, locate};
pub use markers::Markers;
pub use patcher::{PatchOutcome, PatchPlan, patch, plan, render_block};
