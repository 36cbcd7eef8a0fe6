//! The rich-text document model.
//!
//! A [`Document`] is an ordered sequence of [`Paragraph`]s; each paragraph
//! pairs its text with a run-length-encoded style index (see [`Run`]). All
//! mutation goes through [`DocumentEditor`], which addresses the document by
//! [`Position`], a (paragraph index, grapheme offset) pair.
//!
//! Key types:
//!
//! - [`DocumentEditor`]: insert/delete/apply-style/copy/paste operations
//! - [`Paragraph`]: text plus styled runs, invariant-checked
//! - [`Clipboard`]: styled text extracted by copy, consumed by paste
//!
//! # Examples
//!
//! ```
//! use richdoc::{DocumentEditor, Position, TextStyle, UnicodeSegmenter};
//!
//! let mut editor =
//!     DocumentEditor::from_text("one\ntwo", TextStyle::NONE, UnicodeSegmenter);
//! assert_eq!(editor.document().len(), 2);
//!
//! // Deleting across the paragraph break merges the paragraphs.
//! editor
//!     .delete_text(Position::new(0, 3), Position::new(1, 0))
//!     .unwrap();
//! assert_eq!(editor.document().text(), "onetwo");
//! ```

mod clipboard;
mod editor;
mod paragraph;
mod run;

pub use clipboard::{Clipboard, ClipboardParagraph};
pub use editor::DocumentEditor;
pub use paragraph::Paragraph;
pub use run::Run;

use crate::error::Result;
use crate::style::RunStyle;
use crate::unicode::GraphemeSegmenter;

/// A (paragraph index, grapheme offset) address into a document.
///
/// `offset == grapheme_count` denotes end-of-paragraph, a valid insertion
/// and boundary point. Positions are transient: any position computed before
/// a mutation is invalid after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Index into the document's paragraph sequence.
    pub paragraph: usize,
    /// Grapheme-cluster offset within the paragraph, `0..=grapheme_count`.
    pub offset: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(paragraph: usize, offset: usize) -> Self {
        Self { paragraph, offset }
    }
}

/// An ordered sequence of paragraphs, owned exclusively.
///
/// Mutated only through [`DocumentEditor`]; collaborators read it via
/// [`DocumentEditor::document`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document<S> {
    pub(crate) paragraphs: Vec<Paragraph<S>>,
}

impl<S: RunStyle> Document<S> {
    /// Create an empty document (no paragraphs).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Create a document from pre-built paragraphs.
    #[must_use]
    pub fn from_paragraphs(paragraphs: Vec<Paragraph<S>>) -> Self {
        Self { paragraphs }
    }

    /// The paragraphs in order.
    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph<S>] {
        &self.paragraphs
    }

    /// Get a paragraph by index.
    #[must_use]
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph<S>> {
        self.paragraphs.get(index)
    }

    /// Number of paragraphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text content, paragraphs joined with `'\n'`.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&paragraph.text);
        }
        out
    }

    /// Check every paragraph's run-ledger invariants.
    ///
    /// A violation indicates an implementation bug in a mutation path and is
    /// surfaced loudly as [`Error::InvariantViolation`](crate::Error).
    pub fn validate<G: GraphemeSegmenter>(&self, segmenter: &G) -> Result<()> {
        for (index, paragraph) in self.paragraphs.iter().enumerate() {
            paragraph.validate(index, segmenter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;
    use crate::unicode::UnicodeSegmenter;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
        assert_eq!(Position::new(2, 3), Position::new(2, 3));
    }

    #[test]
    fn test_document_text_joins_paragraphs() {
        let doc = Document::from_paragraphs(vec![
            Paragraph::styled("one".to_string(), TextStyle::NONE, &UnicodeSegmenter),
            Paragraph::styled("two".to_string(), TextStyle::NONE, &UnicodeSegmenter),
        ]);
        assert_eq!(doc.text(), "one\ntwo");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_validate_catches_bad_run_total() {
        let mut doc = Document::from_paragraphs(vec![Paragraph::styled(
            "abc".to_string(),
            TextStyle::NONE,
            &UnicodeSegmenter,
        )]);
        doc.paragraphs[0].runs[0].len = 5;
        assert!(doc.validate(&UnicodeSegmenter).is_err());
    }
}
