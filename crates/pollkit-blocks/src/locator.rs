//! Managed block detection.
//!
//! Content is treated as lines separated by `\n`. Indices reported in
//! [`LocateResult::Present`] are 0-based; the line numbers carried by
//! [`MalformedBlock`] are 1-based so they can be read off an editor.

use std::fmt;

use crate::markers::Markers;

/// Where the managed block sits in a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateResult {
    /// Neither marker line is present.
    Absent,
    /// Exactly one start marker followed by exactly one end marker.
    ///
    /// `start` and `end` are the indices of the marker lines themselves.
    Present { start: usize, end: usize },
    /// The markers cannot be trusted to bound a block.
    Malformed(MalformedBlock),
}

impl LocateResult {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// Why the markers in a file cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingEnd,
    MissingStart,
    EndBeforeStart,
    DuplicateStart,
    DuplicateEnd,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingEnd => "start marker has no matching end marker",
            Self::MissingStart => "end marker has no matching start marker",
            Self::EndBeforeStart => "end marker appears before start marker",
            Self::DuplicateStart => "start marker appears more than once",
            Self::DuplicateEnd => "end marker appears more than once",
        };
        f.write_str(text)
    }
}

/// A file whose markers are inconsistent, with every marker position found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlock {
    pub reason: MalformedReason,
    /// 1-based line numbers of start marker lines
    pub start_lines: Vec<usize>,
    /// 1-based line numbers of end marker lines
    pub end_lines: Vec<usize>,
}

impl fmt::Display for MalformedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (start marker at {}, end marker at {})",
            self.reason,
            describe_lines(&self.start_lines),
            describe_lines(&self.end_lines)
        )
    }
}

fn describe_lines(lines: &[usize]) -> String {
    match lines {
        [] => "no line".to_string(),
        [line] => format!("line {}", line),
        _ => {
            let joined: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            format!("lines {}", joined.join(", "))
        }
    }
}

/// Find the managed block delimited by `markers` in `content`.
///
/// # Example
/// ```
/// use pollkit_blocks::{LocateResult, Markers, locate};
///
/// let content = format!("A=1\n{}\nOLD=x\n{}\n", Markers::PROMPTS.start, Markers::PROMPTS.end);
/// assert_eq!(locate(&content, &Markers::PROMPTS), LocateResult::Present { start: 1, end: 3 });
/// assert_eq!(locate("A=1\n", &Markers::PROMPTS), LocateResult::Absent);
/// ```
pub fn locate(content: &str, markers: &Markers) -> LocateResult {
    let mut starts = Vec::new();
    let mut ends = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        if markers.is_start(line) {
            starts.push(index);
        } else if markers.is_end(line) {
            ends.push(index);
        }
    }

    let reason = match (starts.as_slice(), ends.as_slice()) {
        ([], []) => return LocateResult::Absent,
        ([start], [end]) if start < end => {
            tracing::debug!(start, end, "located managed block");
            return LocateResult::Present {
                start: *start,
                end: *end,
            };
        }
        ([_], [_]) => MalformedReason::EndBeforeStart,
        (s, _) if s.len() > 1 => MalformedReason::DuplicateStart,
        (_, e) if e.len() > 1 => MalformedReason::DuplicateEnd,
        (_, []) => MalformedReason::MissingEnd,
        _ => MalformedReason::MissingStart,
    };

    let malformed = MalformedBlock {
        reason,
        start_lines: starts.iter().map(|i| i + 1).collect(),
        end_lines: ends.iter().map(|i| i + 1).collect(),
    };
    tracing::warn!(%malformed, "managed block markers are inconsistent");
    LocateResult::Malformed(malformed)
}
