//! Prompt encoding into environment assignment lines.
//!
//! Each prompt becomes `ENV_KEY=<base64>`: the key is upper-cased with `-`
//! turned into `_`, and the value is the standard base64 (padded, unwrapped)
//! of its UTF-8 bytes. The payload never contains a newline, and any `=`
//! padding sits after the first `=`, so the first `=` always splits key from
//! value.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::error::{Error, Result};
use crate::prompt_set::PromptSet;

/// Valid environment variable name after the key transform.
static ENV_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").expect("Invalid env key regex"));

/// A single `ENV_KEY=payload` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLine {
    text: String,
    separator: usize,
}

impl EncodedLine {
    fn new(key: &str, payload: &str) -> Self {
        Self {
            text: format!("{}={}", key, payload),
            separator: key.len(),
        }
    }

    /// Parse a line read back from an environment file.
    ///
    /// Returns `None` for lines without a valid `KEY=` prefix.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        let separator = line.find('=')?;
        if !ENV_KEY_REGEX.is_match(&line[..separator]) {
            return None;
        }
        Some(Self {
            text: line.to_string(),
            separator,
        })
    }

    pub fn key(&self) -> &str {
        &self.text[..self.separator]
    }

    pub fn payload(&self) -> &str {
        &self.text[self.separator + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decode the payload back into the original prompt text.
    pub fn decode_value(&self) -> Result<String> {
        let bytes = STANDARD.decode(self.payload()).map_err(|e| Error::Decode {
            key: self.key().to_string(),
            reason: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| Error::Decode {
            key: self.key().to_string(),
            reason: e.to_string(),
        })
    }
}

impl AsRef<str> for EncodedLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for EncodedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Transform a prompt key into an environment variable name.
///
/// `system-prompt` becomes `SYSTEM_PROMPT`. Only ASCII letters are
/// uppercased, so non-ASCII keys fail validation instead of being folded
/// into an ASCII name.
pub fn env_key(key: &str) -> Result<String> {
    let transformed = key.to_ascii_uppercase().replace('-', "_");
    if !ENV_KEY_REGEX.is_match(&transformed) {
        return Err(Error::encoding(
            format!("key {:?}", key),
            "not a valid environment variable name",
        ));
    }
    Ok(transformed)
}

/// Encode every prompt, in the order of the set.
///
/// Fails without producing any lines if a key is invalid or two keys map to
/// the same variable name.
pub fn encode(prompts: &PromptSet) -> Result<Vec<EncodedLine>> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(prompts.len());
    let mut lines = Vec::with_capacity(prompts.len());

    for (key, value) in prompts.iter() {
        let name = env_key(key)?;
        if let Some(previous) = seen.insert(name.clone(), key) {
            return Err(Error::encoding(
                format!("key {:?}", key),
                format!("{} is already produced by key {:?}", name, previous),
            ));
        }
        lines.push(EncodedLine::new(&name, &STANDARD.encode(value.as_bytes())));
    }

    tracing::debug!(count = lines.len(), "encoded prompts");
    Ok(lines)
}
