//! Clipboard data produced by copy and consumed by paste.

use crate::document::run::Run;

/// One styled paragraph of clipboard content: a paragraph minus its layout
/// hint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipboardParagraph<S> {
    /// Extracted text (no paragraph breaks).
    pub text: String,
    /// Runs clipped to the extracted range, boundaries preserved verbatim.
    pub runs: Vec<Run<S>>,
}

impl<S> ClipboardParagraph<S> {
    /// Create a clipboard paragraph.
    #[must_use]
    pub fn new(text: String, runs: Vec<Run<S>>) -> Self {
        Self { text, runs }
    }
}

/// Styled text extracted by `copy_text`, independent of any document.
///
/// Owned by the caller; paste reads it without consuming it, and there is no
/// ownership link back to the source document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clipboard<S> {
    /// The extracted paragraphs, in order.
    pub paragraphs: Vec<ClipboardParagraph<S>>,
}

impl<S> Clipboard<S> {
    /// Create clipboard data from paragraphs.
    #[must_use]
    pub fn new(paragraphs: Vec<ClipboardParagraph<S>>) -> Self {
        Self { paragraphs }
    }

    /// Check if the clipboard holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text.is_empty())
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;

    #[test]
    fn test_clipboard_text() {
        let clip = Clipboard::new(vec![
            ClipboardParagraph::new("one".to_string(), vec![Run::new(3, TextStyle::NONE)]),
            ClipboardParagraph::new("two".to_string(), vec![Run::new(3, TextStyle::NONE)]),
        ]);
        assert_eq!(clip.text(), "one\ntwo");
        assert!(!clip.is_empty());
    }

    #[test]
    fn test_clipboard_empty() {
        let clip: Clipboard<TextStyle> = Clipboard::default();
        assert!(clip.is_empty());
        assert_eq!(clip.text(), "");

        let clip = Clipboard::<TextStyle>::new(vec![ClipboardParagraph::new(
            String::new(),
            Vec::new(),
        )]);
        assert!(clip.is_empty());
    }
}
