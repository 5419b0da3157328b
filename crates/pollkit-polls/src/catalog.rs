//! Account catalog loading.

use indexmap::IndexMap;
use serde::Deserialize;

use pollkit_fs::{ConfigStore, NormalizedPath};

use crate::error::Result;

/// Categories picked from when no valid category is requested.
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "language_creators",
    "framework_authors",
    "tool_creators",
    "oss_legends",
];

/// A notable account that can appear as a poll option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub known_for: Option<String>,
}

impl Account {
    /// The `@username` form used in poll text.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

/// Accounts grouped by category, plus the poll templates.
///
/// Templates use `{category}`, `{user1}`, `{user2}` and optionally `{user3}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub poll_templates: Vec<String>,
    #[serde(flatten)]
    pub categories: IndexMap<String, Vec<Account>>,
}

impl Catalog {
    /// Load a catalog from a JSON (or YAML/TOML) file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let catalog: Catalog = ConfigStore::new().load(path)?;
        tracing::debug!(
            path = %path,
            categories = catalog.categories.len(),
            templates = catalog.poll_templates.len(),
            "loaded poll catalog"
        );
        Ok(catalog)
    }

    pub fn accounts(&self, category: &str) -> Option<&[Account]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Known categories this catalog actually has, in canonical order.
    pub fn known_categories(&self) -> Vec<&'static str> {
        KNOWN_CATEGORIES
            .iter()
            .copied()
            .filter(|c| self.categories.contains_key(*c))
            .collect()
    }
}
