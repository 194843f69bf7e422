//! Conversion errors.

use std::fmt;

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Location {
    /// Resolve a byte offset into line and column.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What made the brace structure unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BraceFault {
    #[error("unexpected '}}' with no open block")]
    UnexpectedClose,
    #[error("{depth} block(s) still open at end of input")]
    UnclosedBlock { depth: usize },
    #[error("unterminated comment")]
    UnterminatedComment,
}

/// Errors from CSS conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nesting depth cannot be determined; no output is produced.
    #[error("unbalanced braces at {location}: {fault}")]
    UnbalancedBraces { location: Location, fault: BraceFault },
}

impl ParseError {
    pub(crate) fn unbalanced(source: &str, offset: usize, fault: BraceFault) -> Self {
        ParseError::UnbalancedBraces {
            location: Location::from_offset(source, offset),
            fault,
        }
    }
}
