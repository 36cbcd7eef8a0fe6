//! Unicode utilities: grapheme segmentation and normalization.

mod normalize;
mod segment;

pub use normalize::{is_normalized_nfc, normalize_nfc};
pub use segment::{GraphemeSegmenter, UnicodeSegmenter, grapheme_count, slice_graphemes};
