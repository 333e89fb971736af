//! Logical property identifiers.
//!
//! Every property the cascade understands has a [`PropertyId`]. Shorthands
//! have ids too so the parser can keep them in declarations, but the cascade
//! expands them into longhands before they reach a match table.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// A CSS property known to the engine.
///
/// Parsing and display use the CSS property name:
///
/// ```
/// use std::str::FromStr;
/// use folio_css::PropertyId;
///
/// assert_eq!(PropertyId::from_str("margin-top"), Ok(PropertyId::MarginTop));
/// assert_eq!(PropertyId::TextFillColor.to_string(), "-webkit-text-fill-color");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumCount, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum PropertyId {
    // Shorthands
    Background,
    Border,
    BorderBottom,
    BorderColor,
    BorderLeft,
    BorderRight,
    BorderStyle,
    BorderTop,
    BorderWidth,
    Font,
    Inset,
    ListStyle,
    Margin,
    Padding,

    // Longhands
    BackgroundColor,
    BorderBottomColor,
    BorderBottomStyle,
    BorderBottomWidth,
    BorderCollapse,
    BorderLeftColor,
    BorderLeftStyle,
    BorderLeftWidth,
    BorderRightColor,
    BorderRightStyle,
    BorderRightWidth,
    BorderSpacing,
    BorderTopColor,
    BorderTopStyle,
    BorderTopWidth,
    Bottom,
    Color,
    Direction,
    Display,
    FontFamily,
    FontSize,
    FontStyle,
    FontVariant,
    FontWeight,
    Height,
    Hyphens,
    Leading,
    Left,
    LetterSpacing,
    LineHeight,
    ListStyleImage,
    ListStylePosition,
    ListStyleType,
    MarginBottom,
    MarginLeft,
    MarginRight,
    MarginTop,
    Orphans,
    #[strum(to_string = "overflow-wrap", serialize = "word-wrap")]
    OverflowWrap,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PageBreakAfter,
    PageBreakBefore,
    Position,
    Quotes,
    Right,
    /// `src` descriptor of `@font-face`.
    Src,
    TextAlign,
    TextDecoration,
    #[strum(to_string = "-webkit-text-fill-color", serialize = "text-fill-color")]
    TextFillColor,
    TextIndent,
    #[strum(to_string = "-webkit-text-stroke-color", serialize = "text-stroke-color")]
    TextStrokeColor,
    #[strum(to_string = "-webkit-text-stroke-width", serialize = "text-stroke-width")]
    TextStrokeWidth,
    TextTransform,
    Top,
    VerticalAlign,
    Visibility,
    WhiteSpace,
    Widows,
    Width,
    WordSpacing,
}

impl PropertyId {
    /// Index of this property in a match table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for shorthands, which never occupy a match-table slot.
    #[must_use]
    pub const fn is_shorthand(self) -> bool {
        matches!(
            self,
            Self::Background
                | Self::Border
                | Self::BorderBottom
                | Self::BorderColor
                | Self::BorderLeft
                | Self::BorderRight
                | Self::BorderStyle
                | Self::BorderTop
                | Self::BorderWidth
                | Self::Font
                | Self::Inset
                | Self::ListStyle
                | Self::Margin
                | Self::Padding
        )
    }

    /// [§ 7.2 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
    ///
    /// "Some properties are inherited properties, as defined in their
    /// property definition table."
    ///
    /// `text-decoration` is treated as inherited so that descendants of an
    /// underlined element are underlined without a decorating-box model.
    /// `font-size` is not: it resolves numerically against the parent's size.
    #[must_use]
    pub const fn is_inheritable(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::Direction
                | Self::FontFamily
                | Self::FontStyle
                | Self::FontVariant
                | Self::FontWeight
                | Self::Hyphens
                | Self::Leading
                | Self::LetterSpacing
                | Self::LineHeight
                | Self::ListStyleImage
                | Self::ListStylePosition
                | Self::ListStyleType
                | Self::Orphans
                | Self::OverflowWrap
                | Self::Quotes
                | Self::TextAlign
                | Self::TextDecoration
                | Self::TextIndent
                | Self::TextTransform
                | Self::Visibility
                | Self::WhiteSpace
                | Self::Widows
                | Self::WordSpacing
        )
    }

    /// Look up a property by its CSS name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.to_ascii_lowercase().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for id in PropertyId::iter() {
            assert_eq!(PropertyId::from_name(&id.to_string()), Some(id), "{id}");
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(PropertyId::from_name("word-wrap"), Some(PropertyId::OverflowWrap));
        assert_eq!(PropertyId::from_name("Text-Fill-Color"), Some(PropertyId::TextFillColor));
        assert_eq!(PropertyId::from_name("margin-block-start"), None);
    }

    #[test]
    fn test_font_size_is_not_inheritable() {
        assert!(!PropertyId::FontSize.is_inheritable());
        assert!(PropertyId::TextDecoration.is_inheritable());
    }
}
