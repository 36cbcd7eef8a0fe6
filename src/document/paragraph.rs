//! Paragraphs: text paired with its styled run sequence.

use crate::document::run::{self, Run};
use crate::error::{Error, Result};
use crate::style::RunStyle;
use crate::unicode::{GraphemeSegmenter, grapheme_count};

/// A paragraph of styled text.
///
/// Invariants held after every completed mutation:
///
/// - run lengths sum to the grapheme count of `text`
/// - no run is empty, no two adjacent runs share a style
/// - empty text has an empty run sequence
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph<S> {
    /// The paragraph text (never contains a paragraph break).
    pub text: String,
    /// Style runs covering `text`, in order.
    pub runs: Vec<Run<S>>,
    /// Opaque tag for layout caches; the core carries it but never reads it.
    /// Paragraphs created by splits and merges get the default value.
    pub layout_hint: u64,
}

impl<S: RunStyle> Paragraph<S> {
    /// Create a paragraph from pre-built runs.
    #[must_use]
    pub fn new(text: String, runs: Vec<Run<S>>) -> Self {
        Self {
            text,
            runs,
            layout_hint: 0,
        }
    }

    /// Create a paragraph covered by a single run of `style`.
    ///
    /// Empty text gets an empty run sequence.
    #[must_use]
    pub fn styled<G: GraphemeSegmenter + ?Sized>(text: String, style: S, segmenter: &G) -> Self {
        let count = grapheme_count(segmenter, &text);
        let runs = if count == 0 {
            Vec::new()
        } else {
            vec![Run::new(count, style)]
        };
        Self::new(text, runs)
    }

    /// Grapheme-cluster count of the paragraph text.
    #[must_use]
    pub fn grapheme_count<G: GraphemeSegmenter + ?Sized>(&self, segmenter: &G) -> usize {
        grapheme_count(segmenter, &self.text)
    }

    /// Re-synchronize run lengths with the text's grapheme count.
    ///
    /// Truncates or drops runs past the count, extends the last run when the
    /// total falls short (seeding a default-styled run when none remain),
    /// clears runs for empty text, then re-merges. Called at the end of
    /// every public mutation as a defensive guarantee of the length
    /// invariant even if an intermediate step miscounted.
    pub fn normalize<G: GraphemeSegmenter + ?Sized>(&mut self, segmenter: &G) {
        let count = self.grapheme_count(segmenter);
        if count == 0 {
            self.runs.clear();
            return;
        }
        let mut total = 0;
        self.runs.retain_mut(|run| {
            if total >= count {
                return false;
            }
            if total + run.len > count {
                run.len = count - total;
            }
            total += run.len;
            run.len > 0
        });
        if self.runs.is_empty() {
            self.runs.push(Run::new(count, S::default()));
            return;
        }
        if total < count {
            if let Some(last) = self.runs.last_mut() {
                last.len += count - total;
            }
        }
        run::merge_adjacent(&mut self.runs);
    }

    /// Check the paragraph's invariants, reporting against paragraph `index`.
    pub fn validate<G: GraphemeSegmenter + ?Sized>(
        &self,
        index: usize,
        segmenter: &G,
    ) -> Result<()> {
        let graphemes = self.grapheme_count(segmenter);
        let run_total = run::total_len(&self.runs);
        let has_empty_run = self.runs.iter().any(|run| run.len == 0);
        if run_total != graphemes || has_empty_run {
            return Err(Error::InvariantViolation {
                paragraph: index,
                run_total,
                graphemes,
            });
        }
        Ok(())
    }
}
