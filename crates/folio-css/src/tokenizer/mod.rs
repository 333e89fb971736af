//! CSS tokenizer module.

/// Streaming tokenizer per [CSS Syntax Level 3 § 4.3](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms).
pub mod lexer;
/// CSS token types per [CSS Syntax Level 3 § 4](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod token;

pub use lexer::CssTokenizer;
pub use token::CssToken;
