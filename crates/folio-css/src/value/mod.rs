//! Declared CSS values.
//!
//! [CSS Values Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! A declaration's value is kept close to its source form: an ordered list of
//! [`Value`] nodes, one per component (keyword, number, hash, ...), with
//! commas and slashes kept as separator nodes. Shorthand expansion and
//! the `font-family` walk rely on seeing those separators.
//! Conversion to typed quantities happens late, in [`number`] and [`color`].

use core::fmt;

/// Color values and parsing per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Sorted keyword tables.
pub mod keywords;
/// Numeric conversion per [CSS Values Level 4 § 5](https://www.w3.org/TR/css-values-4/#numeric-types).
pub mod number;

pub use color::{Color, color_from_value};
pub use number::{Number, Unit, number_from_value, parse_number_prefix};

/// The kind of a single value component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An identifier such as `bold` or `inherit`.
    Keyword,
    /// A `#` token; `data` holds the text after the `#`.
    Hash,
    /// A quoted string; `data` holds the unquoted contents.
    String,
    /// A unitless number.
    Number,
    /// A dimension; `data` holds number and unit, e.g. `12pt`.
    Length,
    /// A percentage; `data` holds number and `%`, e.g. `50%`.
    Percent,
    /// A `url(...)`; `data` holds the address.
    Uri,
    /// A function call; `data` holds the name, `args` the arguments.
    Function,
    /// A `,` separator.
    Comma,
    /// A `/` separator.
    Slash,
}

/// One component of a declared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// What this component is.
    pub kind: ValueKind,
    /// Source text of the component (see [`ValueKind`] for the exact form).
    pub data: String,
    /// Arguments of a function value, including separator nodes.
    pub args: Vec<Value>,
}

impl Value {
    fn leaf(kind: ValueKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            args: Vec::new(),
        }
    }

    /// An identifier.
    #[must_use]
    pub fn keyword(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Keyword, data)
    }

    /// A hash token, given without the `#`.
    #[must_use]
    pub fn hash(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Hash, data)
    }

    /// A quoted string, given unquoted.
    #[must_use]
    pub fn string(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::String, data)
    }

    /// A unitless number, given as source text.
    #[must_use]
    pub fn number(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Number, data)
    }

    /// A dimension, given as number followed by unit (`"1.5em"`).
    #[must_use]
    pub fn length(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Length, data)
    }

    /// A percentage, given with its `%` sign (`"50%"`).
    #[must_use]
    pub fn percent(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Percent, data)
    }

    /// A `url(...)` address.
    #[must_use]
    pub fn uri(data: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Uri, data)
    }

    /// A function call with its arguments.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self {
            kind: ValueKind::Function,
            data: name.into(),
            args,
        }
    }

    /// A `,` separator node.
    #[must_use]
    pub fn comma() -> Self {
        Self::leaf(ValueKind::Comma, ",")
    }

    /// A `/` separator node.
    #[must_use]
    pub fn slash() -> Self {
        Self::leaf(ValueKind::Slash, "/")
    }

    /// Returns true if this is the keyword `keyword` (case-sensitive).
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == ValueKind::Keyword && self.data == keyword
    }

    /// [§ 7.2 Explicit Defaulting](https://www.w3.org/TR/css-cascade-4/#inherit)
    ///
    /// Returns true if the text of this value is `inherit`.
    #[must_use]
    pub fn is_inherit(&self) -> bool {
        self.data == "inherit"
    }

    /// Returns true for `,` and `/` separator nodes.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self.kind, ValueKind::Comma | ValueKind::Slash)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValueKind::Hash => write!(f, "#{}", self.data),
            ValueKind::String => write!(f, "\"{}\"", self.data.replace('"', "\\\"")),
            ValueKind::Uri => write!(f, "url({})", self.data),
            ValueKind::Function => write!(f, "{}({})", self.data, ValueList(&self.args)),
            ValueKind::Keyword
            | ValueKind::Number
            | ValueKind::Length
            | ValueKind::Percent
            | ValueKind::Comma
            | ValueKind::Slash => f.write_str(&self.data),
        }
    }
}

/// Formats a value list the way it would be written in a stylesheet.
///
/// ```
/// use folio_css::value::{Value, ValueList};
///
/// let list = [Value::string("Gentium"), Value::comma(), Value::keyword("serif")];
/// assert_eq!(ValueList(&list).to_string(), "\"Gentium\", serif");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueList<'a>(pub &'a [Value]);

impl fmt::Display for ValueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 && value.kind != ValueKind::Comma {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
