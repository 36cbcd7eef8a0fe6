//! Grapheme segmentation and the grapheme index.
//!
//! Every length and slice computation in the document model goes through
//! this module, so no edit can ever land inside a multi-code-unit cluster.
//! The segmenter is an injected collaborator rather than a global: pass it
//! to [`DocumentEditor`](crate::DocumentEditor) at construction.

use crate::document::Position;
use crate::error::{Error, Result};
use unicode_segmentation::UnicodeSegmentation;

/// A grapheme-cluster segmenter implementing UAX #29 default boundaries.
///
/// `segment` must return the clusters of `text` in order, contiguous and
/// lossless: concatenating the returned slices reproduces `text` exactly.
/// Implementations are stateless and locale-independent; the core performs
/// no caching across calls.
pub trait GraphemeSegmenter {
    /// Split `text` into its grapheme clusters.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default segmenter backed by the `unicode-segmentation` crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeSegmenter;

impl GraphemeSegmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }
}

impl<T: GraphemeSegmenter + ?Sized> GraphemeSegmenter for &T {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).segment(text)
    }
}

/// Count the grapheme clusters in `text`.
#[must_use]
pub fn grapheme_count<G: GraphemeSegmenter + ?Sized>(segmenter: &G, text: &str) -> usize {
    segmenter.segment(text).len()
}

/// Concatenate the grapheme clusters `[start, end)` of `text`.
///
/// When `end` is `None` the slice runs to the end of the text. Fails with
/// [`Error::InvalidRange`] if `start > end`; both bounds are clamped to the
/// cluster count otherwise (ranges may be computed from stale positions).
/// Slice ranges are paragraph-local, so the error reports paragraph 0.
pub fn slice_graphemes<G: GraphemeSegmenter + ?Sized>(
    segmenter: &G,
    text: &str,
    start: usize,
    end: Option<usize>,
) -> Result<String> {
    let clusters = segmenter.segment(text);
    let count = clusters.len();
    let end = end.unwrap_or(count);
    if start > end {
        return Err(Error::InvalidRange {
            start: Position::new(0, start),
            end: Position::new(0, end),
        });
    }
    let start = start.min(count);
    let end = end.min(count);
    Ok(clusters[start..end].concat())
}
