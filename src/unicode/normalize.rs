//! Unicode normalization helpers.

use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Normalize `text` to NFC (canonical composition).
///
/// Inserted text is canonicalized so that a base letter plus combining
/// accent typed separately is indistinguishable from its precomposed form.
/// Already-normalized input (the common case) is passed through borrowed,
/// without reallocating.
#[must_use]
pub fn normalize_nfc(text: &str) -> Cow<'_, str> {
    if is_normalized_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Check whether `text` is already NFC normalized.
#[must_use]
pub fn is_normalized_nfc(text: &str) -> bool {
    unicode_normalization::is_nfc(text)
}
