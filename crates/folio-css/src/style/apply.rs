//! Style materialization.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! "The computed value is the result of resolving the specified value as
//! defined in the 'Computed Value' line of the property definition table,
//! generally absolutizing it in preparation for inheritance."
//!
//! [`apply_style`] reads each property through the inheritance resolver and
//! converts it into the typed field of a [`StyleRecord`].

use std::str::FromStr;

use folio_common::warning::warn_once;

use super::{BorderStyle, StyleRecord};
use crate::cascade::{MatchTable, value_for};
use crate::font::{FontFlags, FontId, FontSet};
use crate::options::StyleOptions;
use crate::property::PropertyId;
use crate::value::keywords::{FONT_SIZE, FONT_STYLE, FONT_VARIANT, FONT_WEIGHT, keyword_in};
use crate::value::{
    Color, Number, Unit, Value, ValueKind, color_from_value, number_from_value, parse_number_prefix,
};

const MARGIN: [PropertyId; 4] = [
    PropertyId::MarginTop,
    PropertyId::MarginRight,
    PropertyId::MarginBottom,
    PropertyId::MarginLeft,
];

const PADDING: [PropertyId; 4] = [
    PropertyId::PaddingTop,
    PropertyId::PaddingRight,
    PropertyId::PaddingBottom,
    PropertyId::PaddingLeft,
];

const BORDER_WIDTH: [PropertyId; 4] = [
    PropertyId::BorderTopWidth,
    PropertyId::BorderRightWidth,
    PropertyId::BorderBottomWidth,
    PropertyId::BorderLeftWidth,
];

const BORDER_STYLE: [PropertyId; 4] = [
    PropertyId::BorderTopStyle,
    PropertyId::BorderRightStyle,
    PropertyId::BorderBottomStyle,
    PropertyId::BorderLeftStyle,
];

const BORDER_COLOR: [PropertyId; 4] = [
    PropertyId::BorderTopColor,
    PropertyId::BorderRightColor,
    PropertyId::BorderBottomColor,
    PropertyId::BorderLeftColor,
];

const INSET: [PropertyId; 4] = [
    PropertyId::Top,
    PropertyId::Right,
    PropertyId::Bottom,
    PropertyId::Left,
];

/// Compute the style record for the element `table` was built for.
///
/// Every field is read through [`value_for`], so inherited properties come
/// from the nearest ancestor that sets them. Values that are missing or
/// cannot be converted take the property's initial value.
///
/// The font is the first `font-family` entry `fonts` can load with the
/// element's bold, italic and small-caps flags. If none loads,
/// `options.fallback_font_family` is tried; if that fails too the record
/// has no font and a warning is printed.
///
/// # Example
/// ```
/// use folio_css::{MatchTable, MemoryFontSet, Number, PropertyId, StyleOptions, Value, apply_style};
///
/// let margin = [Value::length("12pt")];
/// let mut table = MatchTable::new(None);
/// table.add_property(PropertyId::MarginTop, &margin, 1);
///
/// let style = apply_style(&mut MemoryFontSet::new(), &StyleOptions::default(), &table);
/// assert_eq!(style.margin[0], Number::points(12.0));
/// assert!(style.font.is_some());
/// ```
pub fn apply_style<F: FontSet + ?Sized>(
    fonts: &mut F,
    options: &StyleOptions,
    table: &MatchTable<'_>,
) -> StyleRecord {
    let first = |property| value_for(table, property).and_then(<[Value]>::first);
    let length = |property, initial| number_from_value(first(property), initial, Unit::Length);

    let border_style = BORDER_STYLE.map(|property| keyword::<BorderStyle>(first(property)));
    // [§ 4.3 Line Width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    //
    // "If border-style is none or hidden, the computed value is 0."
    let widths = std::array::from_fn(|side| {
        if border_style[side].is_invisible() {
            Number::ZERO
        } else {
            border_width(first(BORDER_WIDTH[side]))
        }
    });

    let color = color_from_value(first(PropertyId::Color), Color::BLACK);
    let flags = font_flags(
        first(PropertyId::FontWeight),
        first(PropertyId::FontStyle),
        first(PropertyId::FontVariant),
    );

    StyleRecord {
        visibility: keyword(first(PropertyId::Visibility)),
        white_space: keyword(first(PropertyId::WhiteSpace)),
        text_align: keyword(first(PropertyId::TextAlign)),
        vertical_align: keyword(first(PropertyId::VerticalAlign)),
        list_style_type: keyword(first(PropertyId::ListStyleType)),
        page_break_before: keyword(first(PropertyId::PageBreakBefore)),
        page_break_after: keyword(first(PropertyId::PageBreakAfter)),
        border_style,
        small_caps: flags.small_caps,
        text_decoration: keyword(first(PropertyId::TextDecoration)),
        overflow_wrap: keyword(first(PropertyId::OverflowWrap)),
        position: keyword(first(PropertyId::Position)),
        direction: keyword(first(PropertyId::Direction)),
        hyphens: keyword(first(PropertyId::Hyphens)),
        border_collapse: keyword(first(PropertyId::BorderCollapse)),

        font_size: font_size(first(PropertyId::FontSize)),
        line_height: line_height(first(PropertyId::LineHeight)),
        leading: length(PropertyId::Leading, 0.0),
        text_indent: length(PropertyId::TextIndent, 0.0),
        width: number_from_value(first(PropertyId::Width), 0.0, Unit::Auto),
        height: number_from_value(first(PropertyId::Height), 0.0, Unit::Auto),
        margin: MARGIN.map(|property| length(property, 0.0)),
        padding: PADDING.map(|property| length(property, 0.0)),
        border_width: widths,
        border_spacing: length(PropertyId::BorderSpacing, 0.0),
        inset: INSET.map(|property| number_from_value(first(property), 0.0, Unit::Auto)),
        text_stroke_width: length(PropertyId::TextStrokeWidth, 0.0),

        color,
        background_color: color_from_value(first(PropertyId::BackgroundColor), Color::TRANSPARENT),
        border_color: BORDER_COLOR.map(|property| color_from_value(first(property), color)),
        text_fill_color: color_from_value(first(PropertyId::TextFillColor), color),
        text_stroke_color: color_from_value(
            first(PropertyId::TextStrokeColor),
            Color::TRANSPARENT,
        ),

        font: resolve_font(fonts, options, value_for(table, PropertyId::FontFamily), flags),
    }
}

/// Map a keyword onto an enumerated field; anything else is the initial value.
fn keyword<T: FromStr + Default>(value: Option<&Value>) -> T {
    value
        .filter(|value| value.kind == ValueKind::Keyword)
        .and_then(|value| value.data.parse().ok())
        .unwrap_or_default()
}

/// [§ 2.5 Font size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// Absolute-size keywords map to scales of the parent's font size.
/// "larger" and "smaller" step by a factor of 1.2.
fn font_size(value: Option<&Value>) -> Number {
    match value {
        Some(value) if value.kind == ValueKind::Keyword => Number::scale(match value.data.as_str() {
            "xx-small" => 0.5,
            "x-small" => 0.69,
            "small" => 0.83,
            "large" | "larger" => 1.2,
            "x-large" => 1.44,
            "xx-large" => 1.73,
            "smaller" => 1.0 / 1.2,
            // "medium", and "inherit": the parent's size
            _ => 1.0,
        }),
        _ => number_from_value(value, 1.0, Unit::Scale),
    }
}

/// [§ 10.8.1 line-height](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
///
/// "normal: Tells user agents to set the used value to a 'reasonable' value
/// based on the font of the element." This engine uses 1.2.
fn line_height(value: Option<&Value>) -> Number {
    match value {
        Some(value) if value.is_keyword("normal") => Number::scale(1.2),
        _ => number_from_value(value, 1.2, Unit::Scale),
    }
}

/// [§ 4.3 Line Width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "thin, medium and thick: the thickness of each of these keywords is
/// UA-defined." Here they are 1, 2 and 4 points.
fn border_width(value: Option<&Value>) -> Number {
    match value {
        Some(value) if value.is_keyword("thin") => Number::points(1.0),
        Some(value) if value.is_keyword("medium") => Number::points(2.0),
        Some(value) if value.is_keyword("thick") => Number::points(4.0),
        _ => number_from_value(value, 2.0, Unit::Length),
    }
}

/// Style flags a font is requested with.
///
/// Weights of 600 and above, and `bold`/`bolder`, are bold.
pub(crate) fn font_flags(weight: Option<&Value>, style: Option<&Value>, variant: Option<&Value>) -> FontFlags {
    let bold = weight.is_some_and(|weight| match weight.kind {
        ValueKind::Keyword => matches!(weight.data.as_str(), "bold" | "bolder"),
        ValueKind::Number => parse_number_prefix(&weight.data).0 >= 600.0,
        _ => false,
    });
    let italic =
        style.is_some_and(|style| style.is_keyword("italic") || style.is_keyword("oblique"));
    let small_caps = variant.is_some_and(|variant| variant.is_keyword("small-caps"));

    FontFlags {
        bold,
        italic,
        small_caps,
    }
}

/// [§ 3.1 Font family](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
///
/// Split a `font-family` value into family names.
///
/// "Font family names other than generic families must either be given
/// quoted as strings, or unquoted as a sequence of one or more
/// identifiers." Consecutive identifiers join with single spaces. Style,
/// variant, weight and size keywords are skipped, as are numbers and
/// slashes, so the tail of a `font` shorthand yields only family names.
///
/// ```
/// use folio_css::style::apply::family_names;
/// use folio_css::parse_declarations;
///
/// let decls = parse_declarations("font-family: bold Gill  Sans, 'Times New Roman', serif");
/// assert_eq!(family_names(&decls[0].value), ["Gill Sans", "Times New Roman", "serif"]);
/// ```
#[must_use]
pub fn family_names(values: &[Value]) -> Vec<String> {
    fn flush(names: &mut Vec<String>, words: &mut Vec<&str>) {
        if !words.is_empty() {
            names.push(words.join(" "));
            words.clear();
        }
    }

    let mut names = Vec::new();
    let mut words = Vec::new();
    for value in values {
        match value.kind {
            ValueKind::Comma => flush(&mut names, &mut words),
            ValueKind::String => {
                flush(&mut names, &mut words);
                names.push(value.data.clone());
            }
            ValueKind::Keyword if !is_font_noise(&value.data) => words.push(value.data.as_str()),
            _ => {}
        }
    }
    flush(&mut names, &mut words);
    names
}

fn is_font_noise(word: &str) -> bool {
    matches!(word, "inherit" | "initial" | "normal")
        || keyword_in(FONT_STYLE, word)
        || keyword_in(FONT_VARIANT, word)
        || keyword_in(FONT_WEIGHT, word)
        || keyword_in(FONT_SIZE, word)
}

/// [§ 5.2 Matching font styles](https://www.w3.org/TR/css-fonts-4/#font-style-matching)
///
/// "If no matching face exists or the matched face does not contain a glyph
/// for the character to be rendered, the next family name is selected and
/// the previous three steps repeated."
fn resolve_font<F: FontSet + ?Sized>(
    fonts: &mut F,
    options: &StyleOptions,
    family: Option<&[Value]>,
    flags: FontFlags,
) -> Option<FontId> {
    let names = family.map(family_names).unwrap_or_default();
    if let Some(id) = names
        .iter()
        .find_map(|name| fonts.load_font(name, flags).ok())
    {
        return Some(id);
    }

    let fallback = &options.fallback_font_family;
    if !names.is_empty() {
        warn_once(
            "CSS",
            &format!("no font available for '{}'; using '{fallback}'", names.join(", ")),
        );
    }
    match fonts.load_font(fallback, flags) {
        Ok(id) => Some(id),
        Err(err) => {
            warn_once("CSS", &format!("fallback font unavailable: {err}"));
            None
        }
    }
}
