//! Test poll requests for exercising poll creation.
//!
//! A [`Catalog`] groups notable accounts by category and carries a list of
//! templates. [`generate`] picks a category, samples distinct accounts from
//! it and fills a template with their `@usernames`.

pub mod catalog;
pub mod error;
pub mod generator;

pub use catalog::{Account, Catalog, KNOWN_CATEGORIES};
pub use error::{Error, Result};
pub use generator::{PollSpec, generate, generate_batch};
