//! Shorthand expansion.
//!
//! [§ 1.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow
//! authors to specify the values of several properties with a single
//! property."
//!
//! Every longhand receives a slice of the shorthand's value list. Most get
//! a single component; `font-family` gets the tail of the list so that
//! every fallback family stays visible.

use std::sync::LazyLock;

use super::MatchTable;
use crate::property::PropertyId;
use crate::value::keywords::{
    BORDER_STYLE, BORDER_WIDTH, FONT_SIZE, FONT_STYLE, FONT_VARIANT, FONT_WEIGHT,
    LIST_STYLE_POSITION, LIST_STYLE_TYPE, keyword_in,
};
use crate::value::{Color, Value, ValueKind};

/// `normal`, assigned to the font style, variant and weight a `font`
/// shorthand leaves out.
static NORMAL: LazyLock<[Value; 1]> = LazyLock::new(|| [Value::keyword("normal")]);

/// Width, style and color longhands of each side, in top, right, bottom,
/// left order.
const BORDER_SIDES: [[PropertyId; 3]; 4] = [
    [
        PropertyId::BorderTopWidth,
        PropertyId::BorderTopStyle,
        PropertyId::BorderTopColor,
    ],
    [
        PropertyId::BorderRightWidth,
        PropertyId::BorderRightStyle,
        PropertyId::BorderRightColor,
    ],
    [
        PropertyId::BorderBottomWidth,
        PropertyId::BorderBottomStyle,
        PropertyId::BorderBottomColor,
    ],
    [
        PropertyId::BorderLeftWidth,
        PropertyId::BorderLeftStyle,
        PropertyId::BorderLeftColor,
    ],
];

/// The four longhands of a box-side shorthand, top, right, bottom, left.
fn box_sides(shorthand: PropertyId) -> Option<[PropertyId; 4]> {
    use PropertyId as P;
    Some(match shorthand {
        P::Margin => [P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft],
        P::Padding => [P::PaddingTop, P::PaddingRight, P::PaddingBottom, P::PaddingLeft],
        P::Inset => [P::Top, P::Right, P::Bottom, P::Left],
        P::BorderWidth => BORDER_SIDES.map(|side| side[0]),
        P::BorderStyle => BORDER_SIDES.map(|side| side[1]),
        P::BorderColor => BORDER_SIDES.map(|side| side[2]),
        _ => return None,
    })
}

/// Border sides covered by a `border` or `border-<side>` shorthand.
fn border_sides(shorthand: PropertyId) -> Option<&'static [[PropertyId; 3]]> {
    Some(match shorthand {
        PropertyId::Border => &BORDER_SIDES,
        PropertyId::BorderTop => &BORDER_SIDES[0..1],
        PropertyId::BorderRight => &BORDER_SIDES[1..2],
        PropertyId::BorderBottom => &BORDER_SIDES[2..3],
        PropertyId::BorderLeft => &BORDER_SIDES[3..4],
        _ => return None,
    })
}

/// Every longhand a shorthand sets.
#[must_use]
pub fn longhands(shorthand: PropertyId) -> Vec<PropertyId> {
    if let Some(sides) = box_sides(shorthand) {
        return sides.to_vec();
    }
    if let Some(sides) = border_sides(shorthand) {
        return sides.iter().flatten().copied().collect();
    }
    match shorthand {
        PropertyId::Font => vec![
            PropertyId::FontStyle,
            PropertyId::FontVariant,
            PropertyId::FontWeight,
            PropertyId::FontSize,
            PropertyId::LineHeight,
            PropertyId::FontFamily,
        ],
        PropertyId::ListStyle => vec![
            PropertyId::ListStyleType,
            PropertyId::ListStylePosition,
            PropertyId::ListStyleImage,
        ],
        PropertyId::Background => vec![PropertyId::BackgroundColor],
        longhand => vec![longhand],
    }
}

/// Store `property: value` in `table`, expanding shorthands into longhands.
pub fn expand<'a>(table: &mut MatchTable<'a>, property: PropertyId, value: &'a [Value], spec: i32) {
    if !property.is_shorthand() {
        table.add_property(property, value, spec);
        return;
    }

    // [§ 7.3 Explicit Defaulting](https://www.w3.org/TR/css-cascade-4/#defaulting-keywords)
    // A shorthand set to `inherit` makes every one of its longhands inherit.
    if let [only] = value
        && only.is_keyword("inherit")
    {
        for longhand in longhands(property) {
            table.add_property(longhand, value, spec);
        }
        return;
    }

    if let Some(sides) = box_sides(property) {
        expand_box_sides(table, sides, value, spec);
    } else if let Some(sides) = border_sides(property) {
        expand_border(table, sides, value, spec);
    } else {
        match property {
            PropertyId::Font => expand_font(table, value, spec),
            PropertyId::ListStyle => expand_list_style(table, value, spec),
            PropertyId::Background => expand_background(table, value, spec),
            _ => {}
        }
    }
}

/// [CSS 2.1 § 8.3](https://www.w3.org/TR/CSS21/box.html#propdef-margin)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
fn expand_box_sides<'a>(
    table: &mut MatchTable<'a>,
    [top, right, bottom, left]: [PropertyId; 4],
    value: &'a [Value],
    spec: i32,
) {
    let parts: Vec<&'a [Value]> = components(value).collect();
    let (t, r, b, l) = match *parts.as_slice() {
        [] => return,
        [a] => (a, a, a, a),
        [a, b] => (a, b, a, b),
        [a, b, c] => (a, b, c, b),
        [a, b, c, d, ..] => (a, b, c, d),
    };
    table.add_property(top, t, spec);
    table.add_property(right, r, spec);
    table.add_property(bottom, b, spec);
    table.add_property(left, l, spec);
}

/// [§ 4.4 Border shorthands](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// Components may come in any order; each is classified by its form.
fn expand_border<'a>(
    table: &mut MatchTable<'a>,
    sides: &[[PropertyId; 3]],
    value: &'a [Value],
    spec: i32,
) {
    for part in components(value) {
        let slot = match border_component(&part[0]) {
            BorderPart::Width => 0,
            BorderPart::Style => 1,
            BorderPart::Color => 2,
        };
        for side in sides {
            table.add_property(side[slot], part, spec);
        }
    }
}

enum BorderPart {
    Width,
    Style,
    Color,
}

fn border_component(value: &Value) -> BorderPart {
    match value.kind {
        ValueKind::Hash => BorderPart::Color,
        ValueKind::Function if matches!(value.data.as_str(), "rgb" | "rgba") => BorderPart::Color,
        ValueKind::Keyword if keyword_in(BORDER_WIDTH, &value.data) => BorderPart::Width,
        ValueKind::Keyword if keyword_in(BORDER_STYLE, &value.data) => BorderPart::Style,
        ValueKind::Keyword
            if value.data == "transparent" || Color::from_named(&value.data).is_some() =>
        {
            BorderPart::Color
        }
        _ => BorderPart::Width,
    }
}

/// [CSS Fonts § 3.7](https://www.w3.org/TR/css-fonts-4/#font-prop)
///
/// "[ <'font-style'> || <font-variant-css2> || <'font-weight'> ]?
/// <'font-size'> [ / <'line-height'> ]? <'font-family'>"
///
/// Style, variant and weight may appear in any order before the size. The
/// first component that is none of those starts the family list, even when
/// no size came first; documents in the wild rely on that leniency.
fn expand_font<'a>(table: &mut MatchTable<'a>, value: &'a [Value], spec: i32) {
    let mut style = None;
    let mut variant = None;
    let mut weight = None;

    let mut i = 0;
    while let Some(component) = value.get(i) {
        let one = &value[i..=i];
        let data = component.data.as_str();
        match component.kind {
            ValueKind::Keyword if data == "normal" => {}
            ValueKind::Keyword if keyword_in(FONT_STYLE, data) => style = Some(one),
            ValueKind::Keyword if keyword_in(FONT_VARIANT, data) => variant = Some(one),
            ValueKind::Keyword | ValueKind::Number if keyword_in(FONT_WEIGHT, data) => {
                weight = Some(one);
            }
            ValueKind::Keyword if keyword_in(FONT_SIZE, data) => {
                i = expand_font_size(table, value, i, spec);
                break;
            }
            ValueKind::Length | ValueKind::Percent | ValueKind::Number => {
                i = expand_font_size(table, value, i, spec);
                break;
            }
            _ => break,
        }
        i += 1;
    }

    if i < value.len() {
        table.add_property(PropertyId::FontFamily, &value[i..], spec);
    }

    let normal = LazyLock::force(&NORMAL).as_slice();
    table.add_property(PropertyId::FontStyle, style.unwrap_or(normal), spec);
    table.add_property(PropertyId::FontVariant, variant.unwrap_or(normal), spec);
    table.add_property(PropertyId::FontWeight, weight.unwrap_or(normal), spec);
}

/// Store the size at `i` and an optional `/ line-height`; returns the index
/// of the first family component.
fn expand_font_size<'a>(table: &mut MatchTable<'a>, value: &'a [Value], i: usize, spec: i32) -> usize {
    table.add_property(PropertyId::FontSize, &value[i..=i], spec);
    let mut next = i + 1;
    if value.get(next).is_some_and(|v| v.kind == ValueKind::Slash) {
        if value.get(next + 1).is_some() {
            table.add_property(PropertyId::LineHeight, &value[next + 1..=next + 1], spec);
        }
        next += 2;
    }
    next
}

/// [CSS 2.1 § 12.5.1](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style)
fn expand_list_style<'a>(table: &mut MatchTable<'a>, value: &'a [Value], spec: i32) {
    for part in components(value) {
        let component = &part[0];
        if component.kind == ValueKind::Uri {
            table.add_property(PropertyId::ListStyleImage, part, spec);
        } else if component.kind == ValueKind::Keyword {
            if keyword_in(LIST_STYLE_TYPE, &component.data) {
                table.add_property(PropertyId::ListStyleType, part, spec);
            } else if keyword_in(LIST_STYLE_POSITION, &component.data) {
                table.add_property(PropertyId::ListStylePosition, part, spec);
            }
        }
    }
}

/// [§ 3.10 Backgrounds Shorthand](https://www.w3.org/TR/css-backgrounds-3/#background)
///
/// Only the color is used; images, positions and repeats are ignored.
fn expand_background<'a>(table: &mut MatchTable<'a>, value: &'a [Value], spec: i32) {
    let color = components(value).find(|part| {
        let component = &part[0];
        match component.kind {
            ValueKind::Hash => true,
            ValueKind::Function => matches!(component.data.as_str(), "rgb" | "rgba"),
            ValueKind::Keyword => {
                component.data == "transparent" || Color::from_named(&component.data).is_some()
            }
            _ => false,
        }
    });
    if let Some(color) = color {
        table.add_property(PropertyId::BackgroundColor, color, spec);
    }
}

/// Each non-separator component as a one-element slice.
fn components(value: &[Value]) -> impl Iterator<Item = &[Value]> {
    value.chunks(1).filter(|part| !part[0].is_separator())
}
