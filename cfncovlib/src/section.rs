//! Replace the body of a heading-delimited region of a document.
//!
//! A region starts at a line matching a start pattern and runs up to the
//! first place where an end pattern matches. The start line (and any blank
//! lines directly after it) is kept; only the body is swapped out. Everything
//! outside the body stays byte-identical.
//!
//! Patterns are [`regex`] syntax, compiled in multi-line mode with `.`
//! matching newlines. The start pattern is anchored at a line start. An end
//! pattern can carry its own end-of-document fallback, e.g. `^\s*##\s|\z`
//! matches the next level-2 heading or, failing that, the end of input.

use std::ops::Range;

use regex::Regex;

use crate::error::CfnCovError;

/// Byte ranges of a located region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Start line plus trailing whitespace, ending in a newline
    pub heading: Range<usize>,
    /// The replaceable body
    pub body: Range<usize>,
}

/// A named region of a document, bounded by two patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl Region {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Replace this region's body in `document` with `block`.
    pub fn replace(&self, document: &str, block: &str) -> crate::Result<String> {
        replace_section(document, &self.start, &self.end, block)
    }
}

fn compile(source: &str, pattern: &str) -> crate::Result<Regex> {
    Regex::new(source).map_err(|source| CfnCovError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Locate the first region opened by `start_pattern` and closed by
/// `end_pattern`.
///
/// The heading is the start match followed by optional whitespace and a
/// newline. The longest such heading is tried first, shorter ones (ending at
/// an earlier newline in the same whitespace run) only if no end boundary
/// follows the longer one. If a start occurrence has no end boundary at all,
/// the next occurrence is tried.
pub fn find_section(
    document: &str,
    start_pattern: &str,
    end_pattern: &str,
) -> crate::Result<SectionSpan> {
    let start_re = compile(&format!("(?ms)^(?:{})", start_pattern), start_pattern)?;
    let end_re = compile(&format!("(?ms){}", end_pattern), end_pattern)?;

    for start in start_re.find_iter(document) {
        let rest = &document[start.end()..];
        let ws_len = rest.len() - rest.trim_start().len();

        let heading_ends = rest[..ws_len]
            .match_indices('\n')
            .map(|(i, _)| start.end() + i + 1)
            .rev();

        for heading_end in heading_ends {
            if let Some(end) = end_re.find_at(document, heading_end) {
                tracing::debug!(
                    pattern = start_pattern,
                    heading = ?(start.start()..heading_end),
                    body = ?(heading_end..end.start()),
                    "located section"
                );
                return Ok(SectionSpan {
                    heading: start.start()..heading_end,
                    body: heading_end..end.start(),
                });
            }
        }
    }

    Err(CfnCovError::SectionNotFound {
        pattern: start_pattern.to_string(),
    })
}

/// Replace the body of the first region between `start_pattern` and
/// `end_pattern` with `block`.
///
/// An empty `block` leaves just the heading. Later regions with the same
/// heading are untouched. Applying the same block twice gives the same
/// document as applying it once.
pub fn replace_section(
    document: &str,
    start_pattern: &str,
    end_pattern: &str,
    block: &str,
) -> crate::Result<String> {
    let span = find_section(document, start_pattern, end_pattern)?;

    let mut out = String::with_capacity(document.len() - span.body.len() + block.len());
    out.push_str(&document[..span.body.start]);
    out.push_str(block);
    out.push_str(&document[span.body.end..]);
    Ok(out)
}
