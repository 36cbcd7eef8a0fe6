//! Document editing operations.
//!
//! [`DocumentEditor`] owns a [`Document`] and an injected grapheme segmenter,
//! and exposes the model's entire mutation surface: insert, delete, apply
//! style, copy, and paste. Every operation validates its positions before
//! touching any paragraph, rebuilds affected run sequences into fresh values,
//! and commits them only once all computation has succeeded, so a failed
//! call leaves the document exactly as it was.

use crate::document::clipboard::{Clipboard, ClipboardParagraph};
use crate::document::paragraph::Paragraph;
use crate::document::run::{self, Run};
use crate::document::{Document, Position};
use crate::error::{Error, Result};
use crate::style::RunStyle;
use crate::unicode::{GraphemeSegmenter, UnicodeSegmenter, grapheme_count, normalize_nfc,
    slice_graphemes};

/// Editor for a styled document, addressed by grapheme positions.
///
/// Single-writer and synchronous: each operation runs to completion, and
/// callers sharing a document across threads must serialize access
/// externally. The segmenter is a stateless collaborator passed at
/// construction, never a global.
#[derive(Clone, Debug)]
pub struct DocumentEditor<S, G = UnicodeSegmenter> {
    document: Document<S>,
    segmenter: G,
}

impl<S: RunStyle, G: GraphemeSegmenter> DocumentEditor<S, G> {
    /// Wrap an existing document.
    ///
    /// Adjacent equal-style runs in the seed are merged; the document must
    /// otherwise already satisfy the length invariant, or this fails with
    /// [`Error::InvariantViolation`].
    pub fn new(mut document: Document<S>, segmenter: G) -> Result<Self> {
        for paragraph in &mut document.paragraphs {
            run::merge_adjacent(&mut paragraph.runs);
        }
        document.validate(&segmenter)?;
        Ok(Self {
            document,
            segmenter,
        })
    }

    /// Build a uniformly styled document from plain text.
    ///
    /// The text is NFC-normalized and split on `'\n'` into paragraphs, each
    /// covered by a single run of `style`.
    pub fn from_text(text: &str, style: S, segmenter: G) -> Self {
        let text = normalize_nfc(text);
        let paragraphs = text
            .split('\n')
            .map(|segment| Paragraph::styled(segment.to_string(), style.clone(), &segmenter))
            .collect();
        Self {
            document: Document::from_paragraphs(paragraphs),
            segmenter,
        }
    }

    /// Read access to the document, for layout and input collaborators.
    #[must_use]
    pub fn document(&self) -> &Document<S> {
        &self.document
    }

    /// Consume the editor, releasing the document.
    #[must_use]
    pub fn into_document(self) -> Document<S> {
        self.document
    }

    /// The injected segmenter.
    #[must_use]
    pub fn segmenter(&self) -> &G {
        &self.segmenter
    }

    /// Insert `text` at `position`, styled with `style`.
    ///
    /// The text is NFC-normalized before any length computation. `'\n'` is a
    /// paragraph break: the first segment extends the edited paragraph,
    /// every following segment becomes a new paragraph spliced in after it,
    /// and the text that followed `position` moves to the trailing new
    /// paragraph with its original style boundaries intact.
    pub fn insert_text(&mut self, position: Position, text: &str, style: S) -> Result<()> {
        let count = self.checked_position(position)?;
        let text = normalize_nfc(text);
        let offset = position.offset;
        let head = self.document.paragraphs[position.paragraph].clone();
        let before = self.slice(&head.text, 0, Some(offset))?;
        let after = self.slice(&head.text, offset, None)?;

        let mut pieces = text.split('\n');
        // `split` always yields at least one piece
        let first_segment = pieces.next().unwrap_or("");
        let rest: Vec<&str> = pieces.collect();
        let first_len = grapheme_count(&self.segmenter, first_segment);

        if rest.is_empty() {
            let mut updated = head;
            updated.text = format!("{before}{first_segment}{after}");
            run::insert_run(&mut updated.runs, offset, style, first_len);
            updated.normalize(&self.segmenter);
            self.document.paragraphs[position.paragraph] = updated;
            self.debug_check();
            return Ok(());
        }

        // Paragraph split: head + first segment keeps the edited paragraph's
        // identity (and layout hint); the after-text moves to the last new
        // paragraph.
        let after_runs = run::clip(&head.runs, offset, count);
        let mut first_paragraph = head.clone();
        first_paragraph.text = format!("{before}{first_segment}");
        first_paragraph.runs = run::clip(&head.runs, 0, offset);
        run::insert_run(&mut first_paragraph.runs, offset, style.clone(), first_len);
        first_paragraph.normalize(&self.segmenter);

        let mut new_paragraphs = Vec::with_capacity(rest.len());
        if let Some((last_segment, middles)) = rest.split_last() {
            for segment in middles {
                new_paragraphs.push(Paragraph::styled(
                    (*segment).to_string(),
                    style.clone(),
                    &self.segmenter,
                ));
            }

            let last_len = grapheme_count(&self.segmenter, last_segment);
            let mut last_runs = Vec::new();
            if last_len > 0 {
                last_runs.push(Run::new(last_len, style));
            }
            last_runs.extend(after_runs);
            run::merge_adjacent(&mut last_runs);
            let mut last_paragraph =
                Paragraph::new(format!("{last_segment}{after}"), last_runs);
            last_paragraph.normalize(&self.segmenter);
            new_paragraphs.push(last_paragraph);
        }

        self.document.paragraphs[position.paragraph] = first_paragraph;
        let at = position.paragraph + 1;
        self.document.paragraphs.splice(at..at, new_paragraphs);
        self.debug_check();
        Ok(())
    }

    /// Delete the grapheme range `[start, end)`.
    ///
    /// A range spanning paragraphs merges the endpoints into the surviving
    /// start paragraph and removes everything between (end paragraph
    /// included).
    pub fn delete_text(&mut self, start: Position, end: Position) -> Result<()> {
        self.checked_range(start, end)?;
        if start == end {
            return Ok(());
        }

        if start.paragraph == end.paragraph {
            let mut updated = self.document.paragraphs[start.paragraph].clone();
            let head = self.slice(&updated.text, 0, Some(start.offset))?;
            let tail = self.slice(&updated.text, end.offset, None)?;
            updated.text = format!("{head}{tail}");
            run::delete_range(&mut updated.runs, start.offset, end.offset - start.offset);
            updated.normalize(&self.segmenter);
            self.document.paragraphs[start.paragraph] = updated;
        } else {
            let start_paragraph = self.document.paragraphs[start.paragraph].clone();
            let end_paragraph = &self.document.paragraphs[end.paragraph];
            let end_count = end_paragraph.grapheme_count(&self.segmenter);
            let head = self.slice(&start_paragraph.text, 0, Some(start.offset))?;
            let tail = self.slice(&end_paragraph.text, end.offset, None)?;

            let mut runs = run::clip(&start_paragraph.runs, 0, start.offset);
            runs.extend(run::clip(&end_paragraph.runs, end.offset, end_count));
            // An all-one-style result folds to a single run here, so merged
            // paragraphs are indistinguishable from ones typed in one style.
            run::merge_adjacent(&mut runs);

            let mut merged = start_paragraph;
            merged.text = format!("{head}{tail}");
            merged.runs = runs;
            merged.normalize(&self.segmenter);
            self.document.paragraphs[start.paragraph] = merged;
            self.document
                .paragraphs
                .drain(start.paragraph + 1..=end.paragraph);
        }
        self.debug_check();
        Ok(())
    }

    /// Shallow-merge `patch` onto every run overlapping `[start, end)`.
    ///
    /// A cross-paragraph range is three independent per-paragraph
    /// applications; runs never merge across paragraph boundaries.
    pub fn apply_style(&mut self, start: Position, end: Position, patch: &S::Patch) -> Result<()> {
        self.checked_range(start, end)?;

        if start.paragraph == end.paragraph {
            self.apply_style_in(start.paragraph, start.offset, end.offset, patch);
        } else {
            let first_count =
                self.document.paragraphs[start.paragraph].grapheme_count(&self.segmenter);
            self.apply_style_in(start.paragraph, start.offset, first_count, patch);
            for index in start.paragraph + 1..end.paragraph {
                let count = self.document.paragraphs[index].grapheme_count(&self.segmenter);
                self.apply_style_in(index, 0, count, patch);
            }
            self.apply_style_in(end.paragraph, 0, end.offset, patch);
        }
        self.debug_check();
        Ok(())
    }

    /// Extract the styled text in `[start, end)` without mutating anything.
    ///
    /// Runs are clipped to the range but otherwise kept verbatim: adjacent
    /// equal-style entries stay separate, and no whitespace is trimmed.
    pub fn copy_text(&self, start: Position, end: Position) -> Result<Clipboard<S>> {
        self.checked_range(start, end)?;

        let mut paragraphs = Vec::new();
        if start.paragraph == end.paragraph {
            let paragraph = &self.document.paragraphs[start.paragraph];
            paragraphs.push(ClipboardParagraph::new(
                self.slice(&paragraph.text, start.offset, Some(end.offset))?,
                run::clip(&paragraph.runs, start.offset, end.offset),
            ));
        } else {
            let first = &self.document.paragraphs[start.paragraph];
            let first_count = first.grapheme_count(&self.segmenter);
            paragraphs.push(ClipboardParagraph::new(
                self.slice(&first.text, start.offset, None)?,
                run::clip(&first.runs, start.offset, first_count),
            ));
            for index in start.paragraph + 1..end.paragraph {
                let paragraph = &self.document.paragraphs[index];
                paragraphs.push(ClipboardParagraph::new(
                    paragraph.text.clone(),
                    paragraph.runs.clone(),
                ));
            }
            let last = &self.document.paragraphs[end.paragraph];
            paragraphs.push(ClipboardParagraph::new(
                self.slice(&last.text, 0, Some(end.offset))?,
                run::clip(&last.runs, 0, end.offset),
            ));
        }
        Ok(Clipboard::new(paragraphs))
    }

    /// Splice clipboard content in at `position`.
    ///
    /// Mirrors [`insert_text`](Self::insert_text)'s paragraph splice, with
    /// the clipboard's own runs in place of a uniform style: the first entry
    /// continues the current paragraph, middle entries become whole
    /// paragraphs, and the last entry prefixes the text that followed
    /// `position`.
    pub fn paste_text(&mut self, position: Position, clipboard: &Clipboard<S>) -> Result<()> {
        let count = self.checked_position(position)?;
        if clipboard.paragraphs.is_empty() {
            return Ok(());
        }
        let offset = position.offset;
        let head = self.document.paragraphs[position.paragraph].clone();
        let before = self.slice(&head.text, 0, Some(offset))?;
        let after = self.slice(&head.text, offset, None)?;

        if let [entry] = clipboard.paragraphs.as_slice() {
            let mut updated = head;
            updated.text = format!("{before}{}{after}", entry.text);
            run::splice(&mut updated.runs, offset, entry.runs.clone());
            updated.normalize(&self.segmenter);
            self.document.paragraphs[position.paragraph] = updated;
            self.debug_check();
            return Ok(());
        }

        let after_runs = run::clip(&head.runs, offset, count);
        let first_entry = &clipboard.paragraphs[0];
        let middles = &clipboard.paragraphs[1..clipboard.paragraphs.len() - 1];

        let mut first_paragraph = head.clone();
        first_paragraph.text = format!("{before}{}", first_entry.text);
        first_paragraph.runs = run::clip(&head.runs, 0, offset);
        first_paragraph.runs.extend(first_entry.runs.iter().cloned());
        run::merge_adjacent(&mut first_paragraph.runs);
        first_paragraph.normalize(&self.segmenter);

        let mut new_paragraphs = Vec::with_capacity(clipboard.paragraphs.len() - 1);
        for entry in middles {
            let mut paragraph = Paragraph::new(entry.text.clone(), entry.runs.clone());
            paragraph.normalize(&self.segmenter);
            new_paragraphs.push(paragraph);
        }

        if let Some(last_entry) = clipboard.paragraphs.last() {
            let mut last_runs = last_entry.runs.clone();
            last_runs.extend(after_runs);
            run::merge_adjacent(&mut last_runs);
            let mut last_paragraph =
                Paragraph::new(format!("{}{after}", last_entry.text), last_runs);
            last_paragraph.normalize(&self.segmenter);
            new_paragraphs.push(last_paragraph);
        }

        self.document.paragraphs[position.paragraph] = first_paragraph;
        let at = position.paragraph + 1;
        self.document.paragraphs.splice(at..at, new_paragraphs);
        self.debug_check();
        Ok(())
    }

    /// Patch the runs overlapping `[start, end)` within one paragraph.
    fn apply_style_in(&mut self, index: usize, start: usize, end: usize, patch: &S::Patch) {
        if start >= end {
            return;
        }
        let mut runs = self.document.paragraphs[index].runs.clone();
        run::split_run_at(&mut runs, start);
        run::split_run_at(&mut runs, end);
        let mut cursor = 0;
        for run in &mut runs {
            let run_start = cursor;
            cursor += run.len;
            if run_start >= start && cursor <= end {
                run.style = run.style.merge(patch);
            }
        }
        run::merge_adjacent(&mut runs);
        self.document.paragraphs[index].runs = runs;
    }

    /// Validate a position, returning the addressed paragraph's grapheme
    /// count. `offset == count` is valid (end of paragraph).
    fn checked_position(&self, position: Position) -> Result<usize> {
        let paragraphs = self.document.paragraphs.len();
        let Some(paragraph) = self.document.paragraphs.get(position.paragraph) else {
            return Err(Error::PositionOutOfRange {
                position,
                paragraphs,
                graphemes: 0,
            });
        };
        let graphemes = paragraph.grapheme_count(&self.segmenter);
        if position.offset > graphemes {
            return Err(Error::PositionOutOfRange {
                position,
                paragraphs,
                graphemes,
            });
        }
        Ok(graphemes)
    }

    /// Validate both endpoints and their (paragraph, offset) ordering.
    fn checked_range(&self, start: Position, end: Position) -> Result<()> {
        self.checked_position(start)?;
        self.checked_position(end)?;
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(())
    }

    fn slice(&self, text: &str, start: usize, end: Option<usize>) -> Result<String> {
        slice_graphemes(&self.segmenter, text, start, end)
    }

    /// Invariant divergence here is an implementation bug; fail fast.
    fn debug_check(&self) {
        debug_assert!(
            self.document.validate(&self.segmenter).is_ok(),
            "document invariant violated after mutation"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{TextStyle, TextStylePatch};
    use crate::unicode::UnicodeSegmenter;

    fn editor(text: &str) -> DocumentEditor<TextStyle> {
        DocumentEditor::from_text(text, TextStyle::sized(16), UnicodeSegmenter)
    }

    #[test]
    fn test_from_text_splits_paragraphs() {
        let ed = editor("one\ntwo\nthree");
        assert_eq!(ed.document().len(), 3);
        assert_eq!(ed.document().text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_new_rejects_inconsistent_seed() {
        let doc = Document::from_paragraphs(vec![Paragraph::new(
            "abc".to_string(),
            vec![Run::new(7, TextStyle::NONE)],
        )]);
        let err = DocumentEditor::new(doc, UnicodeSegmenter).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation { .. }));
    }

    #[test]
    fn test_new_merges_seed_runs() {
        let doc = Document::from_paragraphs(vec![Paragraph::new(
            "abcd".to_string(),
            vec![
                Run::new(2, TextStyle::sized(16)),
                Run::new(2, TextStyle::sized(16)),
            ],
        )]);
        let ed = DocumentEditor::new(doc, UnicodeSegmenter).unwrap();
        assert_eq!(ed.document().paragraphs()[0].runs.len(), 1);
    }

    #[test]
    fn test_insert_validates_before_mutating() {
        let mut ed = editor("abc");
        let err = ed
            .insert_text(Position::new(0, 4), "x", TextStyle::NONE)
            .unwrap_err();
        assert!(matches!(err, Error::PositionOutOfRange { .. }));
        assert_eq!(ed.document().text(), "abc");

        let err = ed
            .insert_text(Position::new(1, 0), "x", TextStyle::NONE)
            .unwrap_err();
        assert!(matches!(err, Error::PositionOutOfRange { .. }));
    }

    #[test]
    fn test_range_order_validated() {
        let mut ed = editor("abc\ndef");
        let err = ed
            .delete_text(Position::new(1, 0), Position::new(0, 2))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
        assert_eq!(ed.document().text(), "abc\ndef");

        let err = ed
            .apply_style(
                Position::new(0, 2),
                Position::new(0, 1),
                &TextStylePatch::sized(12),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn test_empty_delete_is_noop() {
        let mut ed = editor("abc");
        ed.delete_text(Position::new(0, 1), Position::new(0, 1))
            .unwrap();
        assert_eq!(ed.document().text(), "abc");
    }

    #[test]
    fn test_paste_empty_clipboard_is_noop() {
        let mut ed = editor("abc");
        ed.paste_text(Position::new(0, 1), &Clipboard::default())
            .unwrap();
        assert_eq!(ed.document().text(), "abc");
    }

    #[test]
    fn test_insert_nfc_normalizes() {
        let mut ed = editor("");
        // e + combining acute normalizes to the single precomposed cluster.
        ed.insert_text(Position::new(0, 0), "e\u{0301}", TextStyle::NONE)
            .unwrap();
        let paragraph = &ed.document().paragraphs()[0];
        assert_eq!(paragraph.text, "é");
        assert_eq!(paragraph.runs[0].len, 1);
    }
}
