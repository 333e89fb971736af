//! Computed style records.
//!
//! [CSS Cascading and Inheritance Level 4 § 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! A [`StyleRecord`] is the flat, fixed-size result of resolving every
//! property layout needs for one element. It holds no references into the
//! stylesheet or match table, so it outlives both and can be interned in a
//! [`StyleSet`](crate::StyleSet).

pub mod apply;
pub mod display;

pub use apply::apply_style;
pub use display::{Display, display_of};

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, EnumString};

use crate::font::FontId;
use crate::value::{Color, Number};

/// Index of the top edge in per-side arrays.
pub const TOP: usize = 0;
/// Index of the right edge in per-side arrays.
pub const RIGHT: usize = 1;
/// Index of the bottom edge in per-side arrays.
pub const BOTTOM: usize = 2;
/// Index of the left edge in per-side arrays.
pub const LEFT: usize = 3;

/// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Visibility {
    /// "The generated box is visible."
    #[default]
    Visible,
    /// "The generated box is invisible (fully transparent, nothing is drawn),
    /// but still affects layout."
    Hidden,
    /// "Used in table rows, row groups, columns, and column groups to hide
    /// the whole row or column."
    Collapse,
}

/// [§ 3 White Space Processing](https://www.w3.org/TR/css-text-3/#white-space-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum WhiteSpace {
    /// Collapse white space, wrap lines.
    #[default]
    Normal,
    /// Preserve white space, break only at newlines.
    Pre,
    /// Collapse white space, never wrap.
    Nowrap,
    /// Preserve white space, wrap lines.
    PreWrap,
    /// Collapse spaces but keep newlines, wrap lines.
    PreLine,
}

/// [§ 7.1 Text Alignment](https://www.w3.org/TR/css-text-3/#text-align-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum TextAlign {
    /// "Inline-level content is aligned to the line left edge."
    #[default]
    Left,
    /// "Inline-level content is aligned to the line right edge."
    Right,
    /// "Inline-level content is centered within the line box."
    Center,
    /// "Text is justified according to the method specified by text-justify."
    Justify,
}

/// [§ 10.8.1 vertical-align](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum VerticalAlign {
    /// "Align the baseline of the box with the baseline of the parent box."
    #[default]
    Baseline,
    /// "Lower the baseline of the box to the proper position for subscripts."
    Sub,
    /// "Raise the baseline of the box to the proper position for superscripts."
    Super,
    /// "Align the top of the aligned subtree with the top of the line box."
    Top,
    /// "Align the bottom of the aligned subtree with the bottom of the line box."
    Bottom,
    /// "Align the vertical midpoint of the box with the baseline of the
    /// parent box plus half the x-height of the parent."
    Middle,
    /// "Align the top of the box with the top of the parent's content area."
    TextTop,
    /// "Align the bottom of the box with the bottom of the parent's content area."
    TextBottom,
}

/// [CSS 2.1 § 12.5.1 Lists](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ListStyleType {
    None,
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerGreek,
    UpperGreek,
    LowerLatin,
    UpperLatin,
    LowerAlpha,
    UpperAlpha,
    Armenian,
    Georgian,
}

/// [CSS 2.1 § 13.3.1 Page break properties](https://www.w3.org/TR/CSS21/page.html#page-break-props)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum PageBreak {
    /// "Neither force nor forbid a page break."
    #[default]
    Auto,
    /// "Always force a page break."
    Always,
    /// "Avoid a page break."
    Avoid,
    /// "Force one or two page breaks so that the next page is a left page."
    Left,
    /// "Force one or two page breaks so that the next page is a right page."
    Right,
}

/// [§ 4.2 Line Patterns](https://www.w3.org/TR/css-backgrounds-3/#border-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum BorderStyle {
    /// "No border. Color and width are ignored."
    #[default]
    None,
    /// "Same as none, but has different behavior in the border conflict
    /// resolution rules for border-collapsed tables."
    Hidden,
    /// "A series of round dots."
    Dotted,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A single line segment."
    Solid,
    /// "Two parallel solid lines with some space between them."
    Double,
    /// "Looks as if it were carved in the canvas."
    Groove,
    /// "Looks as if it were coming out of the canvas."
    Ridge,
    /// "Looks as if the content on the inside of the border is sunken into the canvas."
    Inset,
    /// "Looks as if the content on the inside of the border is coming out of the canvas."
    Outset,
}

impl BorderStyle {
    /// `none` and `hidden` draw nothing and force the border width to 0.
    #[must_use]
    pub const fn is_invisible(self) -> bool {
        matches!(self, Self::None | Self::Hidden)
    }
}

/// [§ 2 Text Decoration Lines](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum TextDecoration {
    /// "Neither produces nor inhibits text decoration."
    #[default]
    None,
    /// "Each line of text is underlined."
    Underline,
    /// "Each line of text has a line over it."
    Overline,
    /// "Each line of text has a line through the middle."
    LineThrough,
}

/// [§ 5.5 Overflow Wrapping](https://www.w3.org/TR/css-text-3/#overflow-wrap-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum OverflowWrap {
    /// "Lines may break only at allowed break points."
    #[default]
    Normal,
    /// "An otherwise unbreakable sequence of characters may be broken at an
    /// arbitrary point if there are no otherwise-acceptable break points."
    BreakWord,
    /// Like `break-word`, but soft wrap opportunities count toward
    /// min-content sizes.
    Anywhere,
}

/// [§ 2 Choosing A Positioning Scheme](https://www.w3.org/TR/css-position-3/#position-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Position {
    /// "The box is not a positioned box."
    #[default]
    Static,
    /// "The box is laid out as for static, then offset from the resulting position."
    Relative,
    /// "The box is taken out of flow."
    Absolute,
    /// "Same as absolute, except the box is positioned and sized relative to
    /// a fixed positioning containing block."
    Fixed,
}

/// [§ 2.1 Specifying Directionality](https://www.w3.org/TR/css-writing-modes-4/#direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    /// "Left-to-right directionality."
    #[default]
    Ltr,
    /// "Right-to-left directionality."
    Rtl,
}

/// [§ 6.1 Hyphenation Control](https://www.w3.org/TR/css-text-3/#hyphens-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Hyphens {
    /// "Words are not hyphenated."
    None,
    /// "Words are only hyphenated where there are characters inside the word
    /// that explicitly suggest hyphenation opportunities."
    #[default]
    Manual,
    /// "Words may be broken at hyphenation opportunities determined
    /// automatically by an appropriate language-specific hyphenation resource."
    Auto,
}

/// [CSS 2.1 § 17.6 Borders](https://www.w3.org/TR/CSS21/tables.html#borders)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum BorderCollapse {
    /// "Selects the separated borders border model."
    #[default]
    Separate,
    /// "Selects the collapsing borders model."
    Collapse,
}

/// The computed style of one element.
///
/// Per-side arrays are indexed by [`TOP`], [`RIGHT`], [`BOTTOM`] and [`LEFT`].
/// Lengths stay in their [`Number`] units; layout resolves `em` scales and
/// percentages against the font size and containing block.
///
/// Two records are the same style exactly when their
/// [`to_key_bytes`](Self::to_key_bytes) are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleRecord {
    /// `visibility`
    pub visibility: Visibility,
    /// `white-space`
    pub white_space: WhiteSpace,
    /// `text-align`
    pub text_align: TextAlign,
    /// `vertical-align`
    pub vertical_align: VerticalAlign,
    /// `list-style-type`
    pub list_style_type: ListStyleType,
    /// `page-break-before`
    pub page_break_before: PageBreak,
    /// `page-break-after`
    pub page_break_after: PageBreak,
    /// `border-*-style`
    pub border_style: [BorderStyle; 4],
    /// `font-variant: small-caps`
    pub small_caps: bool,
    /// `text-decoration`
    pub text_decoration: TextDecoration,
    /// `overflow-wrap`
    pub overflow_wrap: OverflowWrap,
    /// `position`
    pub position: Position,
    /// `direction`
    pub direction: Direction,
    /// `hyphens`
    pub hyphens: Hyphens,
    /// `border-collapse`
    pub border_collapse: BorderCollapse,

    /// `font-size` as a scale of the parent's size, or an absolute length.
    pub font_size: Number,
    /// `line-height`
    pub line_height: Number,
    /// `leading`: extra space between lines.
    pub leading: Number,
    /// `text-indent`
    pub text_indent: Number,
    /// `width`
    pub width: Number,
    /// `height`
    pub height: Number,
    /// `margin-*`
    pub margin: [Number; 4],
    /// `padding-*`
    pub padding: [Number; 4],
    /// `border-*-width`, already 0 where the side's style draws nothing.
    pub border_width: [Number; 4],
    /// `border-spacing`
    pub border_spacing: Number,
    /// `top`, `right`, `bottom`, `left`
    pub inset: [Number; 4],
    /// `-webkit-text-stroke-width`
    pub text_stroke_width: Number,

    /// `color`
    pub color: Color,
    /// `background-color`
    pub background_color: Color,
    /// `border-*-color`
    pub border_color: [Color; 4],
    /// `-webkit-text-fill-color`
    pub text_fill_color: Color,
    /// `-webkit-text-stroke-color`
    pub text_stroke_color: Color,

    /// Resolved font, or `None` if not even the fallback family loaded.
    pub font: Option<FontId>,
}

impl Default for StyleRecord {
    /// Initial values of every property, as computed for an element that no
    /// rule matches and whose fonts all fail to load.
    fn default() -> Self {
        Self {
            visibility: Visibility::default(),
            white_space: WhiteSpace::default(),
            text_align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            list_style_type: ListStyleType::default(),
            page_break_before: PageBreak::default(),
            page_break_after: PageBreak::default(),
            border_style: [BorderStyle::None; 4],
            small_caps: false,
            text_decoration: TextDecoration::default(),
            overflow_wrap: OverflowWrap::default(),
            position: Position::default(),
            direction: Direction::default(),
            hyphens: Hyphens::default(),
            border_collapse: BorderCollapse::default(),

            font_size: Number::scale(1.0),
            line_height: Number::scale(1.2),
            leading: Number::ZERO,
            text_indent: Number::ZERO,
            width: Number::AUTO,
            height: Number::AUTO,
            margin: [Number::ZERO; 4],
            padding: [Number::ZERO; 4],
            border_width: [Number::ZERO; 4],
            border_spacing: Number::ZERO,
            inset: [Number::AUTO; 4],
            text_stroke_width: Number::ZERO,

            color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            border_color: [Color::BLACK; 4],
            text_fill_color: Color::BLACK,
            text_stroke_color: Color::TRANSPARENT,

            font: None,
        }
    }
}

impl StyleRecord {
    /// Serialize the record into the byte string that orders and identifies it.
    ///
    /// Every field is written at a fixed width, so the encoding has no slack
    /// and records that hold the same values always produce the same bytes.
    /// `-0.0` is written as `0.0`.
    #[must_use]
    pub fn to_key_bytes(&self) -> Vec<u8> {
        let mut key = KeyBytes::default();

        key.byte(self.visibility as u8);
        key.byte(self.white_space as u8);
        key.byte(self.text_align as u8);
        key.byte(self.vertical_align as u8);
        key.byte(self.list_style_type as u8);
        key.byte(self.page_break_before as u8);
        key.byte(self.page_break_after as u8);
        for style in self.border_style {
            key.byte(style as u8);
        }
        key.byte(u8::from(self.small_caps));
        key.byte(self.text_decoration as u8);
        key.byte(self.overflow_wrap as u8);
        key.byte(self.position as u8);
        key.byte(self.direction as u8);
        key.byte(self.hyphens as u8);
        key.byte(self.border_collapse as u8);

        for number in [
            self.font_size,
            self.line_height,
            self.leading,
            self.text_indent,
            self.width,
            self.height,
        ] {
            key.number(number);
        }
        for number in self
            .margin
            .iter()
            .chain(&self.padding)
            .chain(&self.border_width)
            .chain(&self.inset)
        {
            key.number(*number);
        }
        key.number(self.border_spacing);
        key.number(self.text_stroke_width);

        key.color(self.color);
        key.color(self.background_color);
        for color in self.border_color {
            key.color(color);
        }
        key.color(self.text_fill_color);
        key.color(self.text_stroke_color);

        match self.font {
            Some(FontId(id)) => {
                key.byte(1);
                key.0.extend_from_slice(&id.to_be_bytes());
            }
            None => key.0.extend_from_slice(&[0; 5]),
        }

        key.0
    }
}

#[derive(Default)]
struct KeyBytes(Vec<u8>);

impl KeyBytes {
    fn byte(&mut self, byte: u8) {
        self.0.push(byte);
    }

    fn number(&mut self, number: Number) {
        // -0.0 + 0.0 is 0.0
        let value = number.value + 0.0;
        self.0.extend_from_slice(&value.to_bits().to_be_bytes());
        self.byte(number.unit as u8);
    }

    fn color(&mut self, color: Color) {
        self.0.extend_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_keywords_parse_case_insensitively() {
        assert_eq!(WhiteSpace::from_str("PRE-wrap"), Ok(WhiteSpace::PreWrap));
        assert_eq!(TextAlign::from_str("center"), Ok(TextAlign::Center));
        assert_eq!(
            ListStyleType::from_str("decimal-leading-zero"),
            Ok(ListStyleType::DecimalLeadingZero)
        );
        assert!(VerticalAlign::from_str("sideways").is_err());
    }

    #[test]
    fn test_key_bytes_have_fixed_length() {
        let mut margin = [Number::ZERO; 4];
        margin[LEFT] = Number::points(-3.5);
        let other = StyleRecord {
            font: Some(FontId(7)),
            margin,
            ..StyleRecord::default()
        };
        assert_eq!(
            StyleRecord::default().to_key_bytes().len(),
            other.to_key_bytes().len()
        );
    }

    #[test]
    fn test_key_bytes_identify_records() {
        let a = StyleRecord::default();
        assert_eq!(a.to_key_bytes(), StyleRecord::default().to_key_bytes());

        let b = StyleRecord {
            text_align: TextAlign::Justify,
            ..a
        };
        assert_ne!(a.to_key_bytes(), b.to_key_bytes());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let a = StyleRecord {
            text_indent: Number::points(-0.0),
            ..StyleRecord::default()
        };
        assert_eq!(a.to_key_bytes(), StyleRecord::default().to_key_bytes());
    }

    #[test]
    fn test_unit_is_part_of_the_key() {
        let a = StyleRecord {
            width: Number::points(10.0),
            ..StyleRecord::default()
        };
        let b = StyleRecord {
            width: Number::new(10.0, crate::value::Unit::Percent),
            ..StyleRecord::default()
        };
        assert_ne!(a.to_key_bytes(), b.to_key_bytes());
    }
}
