//! Sorted keyword tables.
//!
//! Each table is sorted in byte order so membership is a binary search.
//! Lookups are case-sensitive: stylesheets in the wild write these in
//! lower case, and the parser does not fold identifier case.

/// [§ 4.3 Line Width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
pub const BORDER_WIDTH: &[&str] = &["medium", "thick", "thin"];

/// [§ 4.2 Line Patterns](https://www.w3.org/TR/css-backgrounds-3/#border-style)
pub const BORDER_STYLE: &[&str] = &[
    "dashed", "dotted", "double", "groove", "hidden", "inset", "none", "outset", "ridge", "solid",
];

/// [§ 3.3 Font style](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
pub const FONT_STYLE: &[&str] = &["italic", "oblique"];

/// [§ 6.11 Font variant](https://www.w3.org/TR/css-fonts-4/#font-variant-prop)
pub const FONT_VARIANT: &[&str] = &["small-caps"];

/// [§ 3.2 Font weight](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
pub const FONT_WEIGHT: &[&str] = &[
    "100", "200", "300", "400", "500", "600", "700", "800", "900", "bold", "bolder", "lighter",
];

/// [§ 3.5 Font size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const FONT_SIZE: &[&str] = &[
    "large", "larger", "medium", "small", "smaller", "x-large", "x-small", "xx-large", "xx-small",
];

/// [CSS 2.1 § 12.5.1](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style-type)
pub const LIST_STYLE_TYPE: &[&str] = &[
    "armenian",
    "circle",
    "decimal",
    "decimal-leading-zero",
    "disc",
    "georgian",
    "lower-alpha",
    "lower-greek",
    "lower-latin",
    "lower-roman",
    "none",
    "square",
    "upper-alpha",
    "upper-greek",
    "upper-latin",
    "upper-roman",
];

/// [CSS 2.1 § 12.5.1](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style-position)
pub const LIST_STYLE_POSITION: &[&str] = &["inside", "outside"];

/// Returns true if `word` is in the sorted `table`.
#[must_use]
pub fn keyword_in(table: &[&str], word: &str) -> bool {
    table.binary_search(&word).is_ok()
}
