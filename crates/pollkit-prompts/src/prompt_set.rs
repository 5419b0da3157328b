//! Prompt definitions keyed by lowercase, hyphenated names.

use indexmap::IndexMap;
use serde::Deserialize;

use pollkit_fs::{ConfigStore, NormalizedPath};

use crate::error::{Error, Result};

/// Ordered mapping from prompt key to prompt text.
///
/// Order follows the source document so the generated block is stable
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PromptSet {
    prompts: IndexMap<String, String>,
}

impl PromptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load prompts from a YAML, JSON or TOML file.
    ///
    /// A missing file is [`Error::MissingSourceConfig`]; a file that is not
    /// UTF-8 is an [`Error::Encoding`].
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        ConfigStore::new().load(path).map_err(|e| match e {
            pollkit_fs::Error::NotFound { path } => Error::MissingSourceConfig { path },
            pollkit_fs::Error::NotUtf8 { path } => {
                Error::encoding(path.display().to_string(), "source is not valid UTF-8")
            }
            other => other.into(),
        })
    }

    /// Add or replace a prompt, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.prompts.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prompts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PromptSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}
