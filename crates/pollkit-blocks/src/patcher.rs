//! Managed block rewriting.
//!
//! Every function here is pure: content goes in, new content comes out.

use crate::error::{Error, Result};
use crate::locator::{LocateResult, locate};
use crate::markers::Markers;

/// What applying a patch did to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No block existed; one was appended.
    Inserted,
    /// An existing block was rewritten with different lines.
    Replaced,
    /// The existing block already held exactly these lines.
    Unchanged,
}

/// New content together with the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchPlan {
    pub outcome: PatchOutcome,
    pub content: String,
}

impl PatchPlan {
    pub fn is_changed(&self) -> bool {
        self.outcome != PatchOutcome::Unchanged
    }
}

/// Render a complete block: start marker, body lines, end marker, each
/// terminated by a newline.
pub fn render_block<S: AsRef<str>>(body: &[S], markers: &Markers) -> String {
    let mut block = String::new();
    block.push_str(markers.start);
    block.push('\n');
    for line in body {
        block.push_str(line.as_ref());
        block.push('\n');
    }
    block.push_str(markers.end);
    block.push('\n');
    block
}

/// Produce new content with the managed block holding exactly `body`.
///
/// - `Present`: the old block body is discarded and replaced; everything
///   outside the marker lines is kept byte-for-byte.
/// - `Absent`: the block is appended after a blank line and the result ends
///   with a single newline.
/// - `Malformed`: refused with [`Error::Malformed`].
///
/// # Example
/// ```
/// use pollkit_blocks::{Markers, locate, patch};
///
/// let markers = Markers::PROMPTS;
/// let content = "A=1\n";
/// let located = locate(content, &markers);
/// let patched = patch(content, &located, &["FOO=YmFy"], &markers).unwrap();
/// assert_eq!(
///     patched,
///     format!("A=1\n\n{}\nFOO=YmFy\n{}\n", markers.start, markers.end)
/// );
/// ```
pub fn patch<S: AsRef<str>>(
    content: &str,
    located: &LocateResult,
    body: &[S],
    markers: &Markers,
) -> Result<String> {
    validate_body(body, markers)?;

    match located {
        LocateResult::Malformed(block) => Err(Error::Malformed(block.clone())),
        LocateResult::Absent => Ok(append_block(content, body, markers)),
        LocateResult::Present { start, end } => replace_block(content, *start, *end, body, markers),
    }
}

/// Locate and patch in one step, reporting whether anything changes.
pub fn plan<S: AsRef<str>>(content: &str, body: &[S], markers: &Markers) -> Result<PatchPlan> {
    let located = locate(content, markers);
    let patched = patch(content, &located, body, markers)?;

    let outcome = match located {
        LocateResult::Absent => PatchOutcome::Inserted,
        _ if patched == content => PatchOutcome::Unchanged,
        _ => PatchOutcome::Replaced,
    };

    Ok(PatchPlan {
        outcome,
        content: patched,
    })
}

/// Body lines must stay single lines and must not look like markers,
/// otherwise the next run would locate a different block.
fn validate_body<S: AsRef<str>>(body: &[S], markers: &Markers) -> Result<()> {
    for (index, line) in body.iter().enumerate() {
        let line = line.as_ref();
        if line.contains('\n') || line.contains('\r') {
            return Err(Error::InvalidBodyLine {
                index,
                reason: "contains a line break",
            });
        }
        if markers.is_start(line) || markers.is_end(line) {
            return Err(Error::InvalidBodyLine {
                index,
                reason: "is a marker line",
            });
        }
    }
    Ok(())
}

fn append_block<S: AsRef<str>>(content: &str, body: &[S], markers: &Markers) -> String {
    let block = render_block(body, markers);
    if content.is_empty() {
        return block;
    }

    let mut result = String::with_capacity(content.len() + block.len() + 2);
    result.push_str(content);
    if !result.ends_with('\n') {
        result.push('\n');
    }
    if !result.ends_with("\n\n") {
        result.push('\n');
    }
    result.push_str(&block);
    result
}

fn replace_block<S: AsRef<str>>(
    content: &str,
    start: usize,
    end: usize,
    body: &[S],
    markers: &Markers,
) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    if start >= end || end >= lines.len() {
        return Err(Error::StaleLocation {
            start,
            end,
            line_count: lines.len(),
        });
    }

    let mut result: Vec<&str> = Vec::with_capacity(lines.len() + body.len());
    result.extend_from_slice(&lines[..start]);
    result.push(markers.start);
    result.extend(body.iter().map(|line| line.as_ref()));
    result.push(markers.end);
    result.extend_from_slice(&lines[end + 1..]);

    Ok(result.join("\n"))
}
