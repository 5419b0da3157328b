//! Shared test utilities for the pollkit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: sample prompt sources, environment files and catalogs
//! - [`workspace`]: [`TestWorkspace`] temporary directory builder

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
