//! Style values carried by text runs.
//!
//! The document model treats styles as opaque values: the run ledger only
//! needs structural equality (to merge adjacent runs) and a shallow-merge
//! patch operation (to apply styling over a range). Both capabilities are
//! expressed by the [`RunStyle`] trait, so the style schema is pluggable.
//!
//! [`TextStyle`] is the concrete schema shipped with the crate:
//!
//! - [`TextAttributes`]: bitflags for bold, italic, underline, strikethrough
//! - [`Color`]: plain RGBA quad for foreground/background
//! - [`TextStylePatch`]: one `Option` per field, merged field-by-field
//!
//! # Examples
//!
//! ```
//! use richdoc::{RunStyle, TextStyle, TextStylePatch};
//!
//! let base = TextStyle::sized(16);
//! let patch = TextStylePatch::default().bold();
//! let patched = base.merge(&patch);
//!
//! assert_eq!(patched.font_size, Some(16)); // retained
//! assert!(patched.attributes.contains(richdoc::TextAttributes::BOLD));
//! ```

use bitflags::bitflags;
use std::fmt;

/// Capabilities a style value must provide to participate in the run ledger.
///
/// Equality (`PartialEq`) decides when adjacent runs merge; [`merge`]
/// produces a new style with a patch's fields shallow-merged over this one.
/// Fields absent from the patch must be retained unchanged. `Default` is the
/// schema's unstyled value, used to seed a run when content arrives with no
/// styling at all (a hand-built clipboard entry, for example).
///
/// [`merge`]: RunStyle::merge
pub trait RunStyle: Clone + Default + PartialEq + fmt::Debug {
    /// Partial style applied over a range by `apply_style`.
    type Patch: Clone + fmt::Debug;

    /// Return a new style with the patch's fields replacing this style's.
    #[must_use]
    fn merge(&self, patch: &Self::Patch) -> Self;
}

bitflags! {
    /// Text rendering attributes (bold, italic, underline, strikethrough).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased weight.
        const BOLD          = 0x01;
        /// Italic.
        const ITALIC        = 0x02;
        /// Underlined text.
        const UNDERLINE     = 0x04;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x08;
    }
}

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Concrete style schema: font size, colors, and attributes.
///
/// `None` for a field means "inherit the surrounding default" rather than a
/// specific value; equality is structural over every field, so two runs
/// merge only when all fields match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size in points (None = default size).
    pub font_size: Option<u16>,
    /// Foreground color (None = default).
    pub fg: Option<Color>,
    /// Background color (None = default).
    pub bg: Option<Color>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl TextStyle {
    /// Empty style with no explicit properties.
    pub const NONE: Self = Self {
        font_size: None,
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only a font size.
    #[must_use]
    pub const fn sized(font_size: u16) -> Self {
        Self {
            font_size: Some(font_size),
            fg: None,
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Return a new style with the italic attribute added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::ITALIC),
            ..self
        }
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::UNDERLINE),
            ..self
        }
    }
}

impl RunStyle for TextStyle {
    type Patch = TextStylePatch;

    fn merge(&self, patch: &TextStylePatch) -> Self {
        Self {
            font_size: patch.font_size.or(self.font_size),
            fg: patch.fg.or(self.fg),
            bg: patch.bg.or(self.bg),
            attributes: patch.attributes.unwrap_or(self.attributes),
        }
    }
}

/// Partial [`TextStyle`]: fields set here replace the run's fields, fields
/// left `None` are retained from the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStylePatch {
    pub font_size: Option<u16>,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    /// Replaces the full attribute set when present (shallow merge treats
    /// the attribute field as one unit).
    pub attributes: Option<TextAttributes>,
}

impl TextStylePatch {
    /// Patch setting only the font size.
    #[must_use]
    pub const fn sized(font_size: u16) -> Self {
        Self {
            font_size: Some(font_size),
            fg: None,
            bg: None,
            attributes: None,
        }
    }

    /// Patch setting only the foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            font_size: None,
            fg: Some(color),
            bg: None,
            attributes: None,
        }
    }

    /// Set the attribute field to exactly BOLD.
    #[must_use]
    pub const fn bold(self) -> Self {
        Self {
            attributes: Some(TextAttributes::BOLD),
            ..self
        }
    }

    /// Set the full attribute field.
    #[must_use]
    pub const fn with_attributes(self, attributes: TextAttributes) -> Self {
        Self {
            attributes: Some(attributes),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_retains_unpatched_fields() {
        let base = TextStyle::sized(16).with_fg(Color::RED).with_bold();
        let patched = base.merge(&TextStylePatch::sized(14));

        assert_eq!(patched.font_size, Some(14));
        assert_eq!(patched.fg, Some(Color::RED));
        assert!(patched.attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_merge_replaces_attribute_set_wholesale() {
        let base = TextStyle::NONE.with_bold().with_italic();
        let patched = base.merge(&TextStylePatch::default().with_attributes(
            TextAttributes::UNDERLINE,
        ));

        assert_eq!(patched.attributes, TextAttributes::UNDERLINE);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = TextStyle::sized(12).with_bg(Color::BLACK);
        assert_eq!(base.merge(&TextStylePatch::default()), base);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(TextStyle::sized(16), TextStyle::sized(16));
        assert_ne!(TextStyle::sized(16), TextStyle::sized(14));
        assert_ne!(TextStyle::sized(16), TextStyle::sized(16).with_bold());
    }
}
