//! CSS token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Numeric tokens keep the source spelling of their number (`"1.50"`, `"-2"`)
//! rather than a parsed float: the value model stores CSS values as text and
//! converts them lazily, so `12pt` must survive the parser as `"12pt"`.

use core::fmt;

/// A CSS token as consumed by the stylesheet parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssToken {
    /// `<ident-token>`
    Ident(String),
    /// `<function-token>`: the name, without the opening parenthesis.
    Function(String),
    /// `<at-keyword-token>`: the name, without the `@`.
    AtKeyword(String),
    /// `<hash-token>`: the value, without the `#`.
    Hash(String),
    /// `<string-token>`: the unquoted, unescaped contents.
    String(String),
    /// `<url-token>`: the contents of an unquoted `url(...)`.
    Url(String),
    /// `<number-token>` spelled as in the source.
    Number(String),
    /// `<percentage-token>`: the number as spelled, without `%`.
    Percentage(String),
    /// `<dimension-token>`
    Dimension {
        /// The number as spelled in the source.
        number: String,
        /// The unit identifier.
        unit: String,
    },
    /// `<delim-token>`
    Delim(char),
    /// `<whitespace-token>`
    Whitespace,
    /// `<colon-token>`
    Colon,
    /// `<semicolon-token>`
    Semicolon,
    /// `<comma-token>`
    Comma,
    /// `<[-token>`
    LeftBracket,
    /// `<]-token>`
    RightBracket,
    /// `<(-token>`
    LeftParen,
    /// `<)-token>`
    RightParen,
    /// `<{-token>`
    LeftBrace,
    /// `<}-token>`
    RightBrace,
    /// `<CDO-token>` (`<!--`)
    Cdo,
    /// `<CDC-token>` (`-->`)
    Cdc,
    /// End of input.
    Eof,
}

impl CssToken {
    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }
}

impl fmt::Display for CssToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            Self::Hash(v) => write!(f, "<hash:#{v}>"),
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::Url(v) => write!(f, "<url:{v}>"),
            Self::Number(v) => write!(f, "<number:{v}>"),
            Self::Percentage(v) => write!(f, "<percentage:{v}%>"),
            Self::Dimension { number, unit } => write!(f, "<dimension:{number}{unit}>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Whitespace => f.write_str("<whitespace>"),
            Self::Colon => f.write_str("<colon>"),
            Self::Semicolon => f.write_str("<semicolon>"),
            Self::Comma => f.write_str("<comma>"),
            Self::LeftBracket => f.write_str("<[>"),
            Self::RightBracket => f.write_str("<]>"),
            Self::LeftParen => f.write_str("<(>"),
            Self::RightParen => f.write_str("<)>"),
            Self::LeftBrace => f.write_str("<{>"),
            Self::RightBrace => f.write_str("<}>"),
            Self::Cdo => f.write_str("<CDO>"),
            Self::Cdc => f.write_str("<CDC>"),
            Self::Eof => f.write_str("<EOF>"),
        }
    }
}
