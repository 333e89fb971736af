//! CSS Parser
//!
//! [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing)
//!
//! Turns tokens into the [`Stylesheet`] data model. The parser is forgiving
//! in the way CSS requires: a malformed declaration is skipped up to the
//! next `;`, a rule whose selector cannot be understood is dropped whole,
//! and unknown at-rules are skipped. Nothing here returns an error.

use folio_common::warning::warn_once;

use crate::selector::Selector;
use crate::stylesheet::{Declaration, Rule, Stylesheet};
use crate::tokenizer::{CssToken, CssTokenizer};

/// Declaration lists and component values.
mod declarations;
/// Selector lists.
mod selectors;

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// ```
/// use folio_css::parse_stylesheet;
///
/// let sheet = parse_stylesheet("p { color: red } @media print { h1 { margin: 0 } }");
/// assert_eq!(sheet.rules.len(), 2);
/// ```
#[must_use]
pub fn parse_stylesheet(text: &str) -> Stylesheet {
    let mut stream = TokenStream::new(text);
    Stylesheet {
        rules: stream.parse_rule_list(),
        loaded: false,
    }
}

/// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
///
/// Parses the contents of a `style=""` attribute or of a declaration block.
/// Unknown properties and malformed declarations are left out.
#[must_use]
pub fn parse_declarations(text: &str) -> Vec<Declaration> {
    declarations::parse_declaration_list(&mut TokenStream::new(text))
}

/// Parse a single selector such as `div.note > p`.
///
/// Returns `None` for selector groups (`a, b`) and for syntax the matcher
/// does not support.
#[must_use]
pub fn parse_selector(text: &str) -> Option<Selector> {
    let tokens = CssTokenizer::tokenize(text);
    selectors::parse_complex_selector(&tokens)
}

static EOF: CssToken = CssToken::Eof;

/// A cursor over a token list that always ends in [`CssToken::Eof`].
struct TokenStream {
    tokens: Vec<CssToken>,
    position: usize,
}

impl TokenStream {
    fn new(text: &str) -> Self {
        Self::from_tokens(CssTokenizer::tokenize(text))
    }

    fn from_tokens(mut tokens: Vec<CssToken>) -> Self {
        if !tokens.last().is_some_and(CssToken::is_eof) {
            tokens.push(CssToken::Eof);
        }
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> &CssToken {
        self.tokens.get(self.position).unwrap_or(&EOF)
    }

    fn next_token(&mut self) -> CssToken {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_whitespace() {
            self.position += 1;
        }
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    fn parse_rule_list(&mut self) -> Vec<Rule> {
        let mut rules = Vec::new();
        loop {
            match self.peek() {
                CssToken::Eof => return rules,
                // "<whitespace-token>: Do nothing."
                // "<CDO-token> <CDC-token>: If the top-level flag is set, do nothing."
                CssToken::Whitespace | CssToken::Cdo | CssToken::Cdc | CssToken::RightBrace => {
                    self.position += 1;
                }
                CssToken::AtKeyword(name) => {
                    let name = name.to_ascii_lowercase();
                    self.position += 1;
                    self.parse_at_rule(&name, &mut rules);
                }
                _ => {
                    if let Some(rule) = self.parse_qualified_rule() {
                        rules.push(rule);
                    }
                }
            }
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn parse_qualified_rule(&mut self) -> Option<Rule> {
        let mut prelude = Vec::new();
        loop {
            match self.next_token() {
                // "<EOF-token>: This is a parse error. Return nothing."
                CssToken::Eof => return None,
                CssToken::LeftBrace => break,
                token => prelude.push(token),
            }
        }
        let block = self.consume_block();

        let Some(selectors) = selectors::parse_selector_group(&prelude) else {
            warn_once(
                "CSS",
                &format!("dropped rule with unsupported selector '{}'", css_text(&prelude).trim()),
            );
            return None;
        };

        Some(Rule {
            selectors,
            declarations: declarations::parse_declaration_list(&mut Self::from_tokens(block)),
        })
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    ///
    /// `@page` and `@font-face` become rules with a pseudo selector named
    /// after the at-rule. `@media` blocks for screen or print contribute
    /// their rules in place. Everything else is skipped.
    fn parse_at_rule(&mut self, name: &str, rules: &mut Vec<Rule>) {
        let mut prelude = Vec::new();
        loop {
            match self.next_token() {
                CssToken::Eof | CssToken::Semicolon => return,
                CssToken::LeftBrace => break,
                token => prelude.push(token),
            }
        }
        let block = self.consume_block();

        match name {
            "page" | "font-face" => rules.push(Rule {
                selectors: vec![Selector::Compound {
                    name: Some(format!("@{name}")),
                    conditions: Vec::new(),
                }],
                declarations: declarations::parse_declaration_list(&mut Self::from_tokens(block)),
            }),
            "media" if media_applies(&prelude) => {
                rules.extend(Self::from_tokens(block).parse_rule_list());
            }
            _ => {}
        }
    }

    /// [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    ///
    /// Called after the opening `{`; returns the tokens up to the matching
    /// `}` (which is consumed) or the end of input.
    fn consume_block(&mut self) -> Vec<CssToken> {
        let mut depth = 0usize;
        let mut block = Vec::new();
        loop {
            let token = self.next_token();
            match token {
                CssToken::Eof => break,
                CssToken::RightBrace if depth == 0 => break,
                CssToken::RightBrace => depth -= 1,
                CssToken::LeftBrace => depth += 1,
                _ => {}
            }
            block.push(token);
        }
        block
    }
}

/// [Media Queries § 2](https://www.w3.org/TR/mediaqueries-4/#media)
///
/// A paginated renderer applies `all`, `screen` and `print` rules. Media
/// features are not evaluated.
fn media_applies(prelude: &[CssToken]) -> bool {
    let mut types = prelude.iter().filter_map(|token| match token {
        CssToken::Ident(ident) => Some(ident.to_ascii_lowercase()),
        _ => None,
    });
    let mut seen_any = false;
    let applies = types.any(|media| {
        seen_any = true;
        matches!(media.as_str(), "all" | "screen" | "print")
    });
    applies || !seen_any
}

/// Serialize tokens back to CSS text.
fn css_text(tokens: &[CssToken]) -> String {
    let mut text = String::new();
    for token in tokens {
        match token {
            CssToken::Ident(v) => text.push_str(v),
            CssToken::Function(v) => {
                text.push_str(v);
                text.push('(');
            }
            CssToken::AtKeyword(v) => {
                text.push('@');
                text.push_str(v);
            }
            CssToken::Hash(v) => {
                text.push('#');
                text.push_str(v);
            }
            CssToken::String(v) => {
                text.push('"');
                text.push_str(v);
                text.push('"');
            }
            CssToken::Url(v) => {
                text.push_str("url(");
                text.push_str(v);
                text.push(')');
            }
            CssToken::Number(v) => text.push_str(v),
            CssToken::Percentage(v) => {
                text.push_str(v);
                text.push('%');
            }
            CssToken::Dimension { number, unit } => {
                text.push_str(number);
                text.push_str(unit);
            }
            CssToken::Delim(c) => text.push(*c),
            CssToken::Whitespace => text.push(' '),
            CssToken::Colon => text.push(':'),
            CssToken::Semicolon => text.push(';'),
            CssToken::Comma => text.push(','),
            CssToken::LeftBracket => text.push('['),
            CssToken::RightBracket => text.push(']'),
            CssToken::LeftParen => text.push('('),
            CssToken::RightParen => text.push(')'),
            CssToken::LeftBrace => text.push('{'),
            CssToken::RightBrace => text.push('}'),
            CssToken::Cdo => text.push_str("<!--"),
            CssToken::Cdc => text.push_str("-->"),
            CssToken::Eof => {}
        }
    }
    text
}
