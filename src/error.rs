//! Error types for richdoc.

use crate::document::Position;
use std::fmt;

/// Result type alias for richdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richdoc operations.
///
/// All user-facing errors are raised by validation performed before any
/// mutation, so a failed operation never leaves a document partially edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Paragraph index or grapheme offset outside the document's bounds.
    PositionOutOfRange {
        position: Position,
        /// Number of paragraphs in the document.
        paragraphs: usize,
        /// Grapheme count of the addressed paragraph (0 when the paragraph
        /// index itself was out of range).
        graphemes: usize,
    },
    /// Range start is after its end, in (paragraph, offset) order.
    ///
    /// Grapheme-slice ranges are paragraph-local; those report paragraph 0.
    InvalidRange { start: Position, end: Position },
    /// Run-length sum diverged from the paragraph's grapheme count.
    ///
    /// Indicates an implementation bug, never expected in correct operation.
    InvariantViolation {
        paragraph: usize,
        run_total: usize,
        graphemes: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange {
                position,
                paragraphs,
                graphemes,
            } => {
                write!(
                    f,
                    "position ({}, {}) out of range for document with {paragraphs} paragraph(s) \
                     and {graphemes} grapheme(s) in the addressed paragraph",
                    position.paragraph, position.offset
                )
            }
            Self::InvalidRange { start, end } => {
                write!(
                    f,
                    "invalid range: start ({}, {}) is after end ({}, {})",
                    start.paragraph, start.offset, end.paragraph, end.offset
                )
            }
            Self::InvariantViolation {
                paragraph,
                run_total,
                graphemes,
            } => {
                write!(
                    f,
                    "invariant violation in paragraph {paragraph}: run lengths sum to \
                     {run_total} but text has {graphemes} grapheme(s)"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PositionOutOfRange {
            position: Position::new(3, 7),
            paragraphs: 2,
            graphemes: 0,
        };
        assert!(err.to_string().contains("(3, 7)"));
        assert!(err.to_string().contains("2 paragraph"));

        let err = Error::InvalidRange {
            start: Position::new(1, 4),
            end: Position::new(0, 2),
        };
        assert!(err.to_string().contains("start (1, 4)"));
        assert!(err.to_string().contains("end (0, 2)"));

        let err = Error::InvariantViolation {
            paragraph: 0,
            run_total: 5,
            graphemes: 6,
        };
        assert!(err.to_string().contains("sum to 5"));
        assert!(err.to_string().contains("6 grapheme"));
    }
}
