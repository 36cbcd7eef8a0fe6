//! `richdoc` - Grapheme-accurate rich-text document model
//!
//! An in-memory representation of styled paragraph text. Every edit is
//! addressed by Unicode grapheme-cluster offsets, never raw code units, so
//! emoji, ZWJ sequences, and combining marks behave as single characters
//! under insertion, deletion, styling, and clipboard transfer.
//!
//! Each paragraph carries a run-length-encoded style index: an ordered list
//! of `(length, style)` runs whose lengths always sum to the paragraph's
//! grapheme count. [`DocumentEditor`] keeps that invariant through arbitrary
//! edits, including paragraph splits and merges.
//!
//! # Examples
//!
//! ```
//! use richdoc::{DocumentEditor, Position, TextStyle, UnicodeSegmenter};
//!
//! let mut editor = DocumentEditor::from_text(
//!     "First paragraph",
//!     TextStyle::sized(16),
//!     UnicodeSegmenter,
//! );
//! editor
//!     .insert_text(Position::new(0, 0), "Hello ", TextStyle::sized(16))
//!     .unwrap();
//!
//! let paragraph = &editor.document().paragraphs()[0];
//! assert_eq!(paragraph.text, "Hello First paragraph");
//! // Same style on both sides, so the insert was absorbed into one run.
//! assert_eq!(paragraph.runs.len(), 1);
//! assert_eq!(paragraph.runs[0].len, 21);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow Run::RunLookup etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the enum
#![allow(clippy::missing_panics_doc)] // Public API does not panic outside debug assertions
#![allow(clippy::must_use_candidate)] // Accessors are obvious enough
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod document;
pub mod error;
pub mod style;
pub mod unicode;

// Re-export core types at crate root
pub use document::{
    Clipboard, ClipboardParagraph, Document, DocumentEditor, Paragraph, Position, Run,
};
pub use error::{Error, Result};
pub use style::{Color, RunStyle, TextAttributes, TextStyle, TextStylePatch};
pub use unicode::{GraphemeSegmenter, UnicodeSegmenter, grapheme_count, slice_graphemes};
