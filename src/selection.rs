//! Selections: the part of a document that is converted and substituted back.
//!
//! A selection is either the whole document or a 1-based, inclusive line
//! range. Replacing a selection leaves everything outside it byte-for-byte
//! unchanged.

use std::str::FromStr;

use thiserror::Error;

/// Errors from building a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Range text is not `N` or `START:END`
    #[error("invalid line range {0:?}, expected START:END")]
    Malformed(String),

    /// Lines are numbered from 1
    #[error("line numbers start at 1")]
    ZeroLine,

    /// End before start
    #[error("line range {start}:{end} ends before it starts")]
    Reversed {
        start: usize,
        end: usize,
    },

    /// Range extends past the last line
    #[error("line {end} is beyond the end of the document ({lines} lines)")]
    OutOfBounds {
        end: usize,
        lines: usize,
    },
}

// =============================================================================
// LineRange
// =============================================================================

/// 1-based inclusive line range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Create a validated range.
    pub fn new(start: usize, end: usize) -> Result<Self, SelectionError> {
        if start == 0 || end == 0 {
            return Err(SelectionError::ZeroLine);
        }
        if end < start {
            return Err(SelectionError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }
}

impl FromStr for LineRange {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| SelectionError::Malformed(s.to_string()))
        };
        match s.split_once(':') {
            Some((start, end)) => Self::new(number(start)?, number(end)?),
            None => {
                let line = number(s)?;
                Self::new(line, line)
            }
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Byte span of a document selected for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Select the whole document.
    pub fn whole(document: &str) -> Self {
        Self {
            start: 0,
            end: document.len(),
        }
    }

    /// Select whole lines, including the final line break.
    pub fn lines(document: &str, range: LineRange) -> Result<Self, SelectionError> {
        let range = LineRange::new(range.start, range.end)?;
        let mut spans = Vec::new();
        let mut offset = 0;
        for line in document.split_inclusive('\n') {
            spans.push((offset, offset + line.len()));
            offset += line.len();
        }

        if range.end > spans.len() {
            return Err(SelectionError::OutOfBounds {
                end: range.end,
                lines: spans.len(),
            });
        }

        Ok(Self {
            start: spans[range.start - 1].0,
            end: spans[range.end - 1].1,
        })
    }

    /// The selected text.
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }

    /// Substitute `replacement` for the selection.
    ///
    /// A selection that ended in a line break keeps one after the replacement.
    pub fn replace(&self, document: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(document.len() + replacement.len());
        out.push_str(&document[..self.start]);
        out.push_str(replacement);
        if self.text(document).ends_with('\n') && !replacement.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&document[self.end..]);
        out
    }
}
