//! Marker line constants.

/// The pair of lines delimiting a managed block.
///
/// Markers are compared against whole trimmed lines, never as substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: &'static str,
    pub end: &'static str,
}

impl Markers {
    /// Markers around the generated prompt variables in environment files.
    pub const PROMPTS: Markers = Markers::new(
        "# --- AUTO-GENERATED PROMPTS START (DO NOT EDIT MANUALLY) ---",
        "# --- AUTO-GENERATED PROMPTS END ---",
    );

    pub const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    pub fn is_start(&self, line: &str) -> bool {
        line.trim() == self.start
    }

    pub fn is_end(&self, line: &str) -> bool {
        line.trim() == self.end
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::PROMPTS
    }
}
