//! [§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax)
//!
//! Selector lists are parsed from a rule's prelude tokens. Any construct the
//! matcher does not implement makes the whole selector, and with it the
//! whole rule, invalid: "If just one of these selectors were invalid, the
//! entire group of selectors would be invalid."

use super::css_text;
use crate::selector::{Combinator, Condition, Selector};
use crate::tokenizer::CssToken;

/// [§ 5 Groups of selectors](https://www.w3.org/TR/selectors-3/#grouping)
pub(super) fn parse_selector_group(tokens: &[CssToken]) -> Option<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            CssToken::Function(_) | CssToken::LeftParen | CssToken::LeftBracket => depth += 1,
            CssToken::RightParen | CssToken::RightBracket => depth = depth.saturating_sub(1),
            CssToken::Comma if depth == 0 => {
                selectors.push(parse_complex_selector(&tokens[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }
    selectors.push(parse_complex_selector(&tokens[start..])?);
    Some(selectors)
}

/// [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)
///
/// Builds a left-associated chain: `a b > c` is `((a b) > c)`.
pub(super) fn parse_complex_selector(tokens: &[CssToken]) -> Option<Selector> {
    let mut cursor = Cursor { tokens, position: 0 };
    let _ = cursor.skip_whitespace();
    let mut selector = cursor.parse_compound()?;

    loop {
        let had_whitespace = cursor.skip_whitespace();
        let combinator = match cursor.peek() {
            None | Some(CssToken::Eof) => return Some(selector),
            Some(CssToken::Delim('>')) => Combinator::Child,
            Some(CssToken::Delim('+')) => Combinator::Adjacent,
            // "~" and anything else unexpected
            Some(CssToken::Delim('~')) => return None,
            Some(_) if had_whitespace => {
                let right = cursor.parse_compound()?;
                selector = selector.combine(Combinator::Descendant, right);
                continue;
            }
            Some(_) => return None,
        };
        cursor.position += 1;
        let _ = cursor.skip_whitespace();
        let right = cursor.parse_compound()?;
        selector = selector.combine(combinator, right);
    }
}

struct Cursor<'t> {
    tokens: &'t [CssToken],
    position: usize,
}

impl<'t> Cursor<'t> {
    fn peek(&self) -> Option<&'t CssToken> {
        self.tokens.get(self.position)
    }

    fn next_token(&mut self) -> Option<&'t CssToken> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Returns true if any whitespace was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        while self.peek().is_some_and(CssToken::is_whitespace) {
            self.position += 1;
        }
        self.position > start
    }

    /// [§ 4](https://www.w3.org/TR/selectors-3/#selector-syntax)
    /// "A sequence of simple selectors is a chain of simple selectors that
    /// are not separated by a combinator. It always begins with a type
    /// selector or a universal selector."
    fn parse_compound(&mut self) -> Option<Selector> {
        let mut name = None;
        let mut seen = false;

        match self.peek() {
            Some(CssToken::Ident(tag)) => {
                name = Some(tag.to_ascii_lowercase());
                seen = true;
                self.position += 1;
            }
            Some(CssToken::Delim('*')) => {
                seen = true;
                self.position += 1;
            }
            _ => {}
        }

        let mut conditions = Vec::new();
        loop {
            let condition = match self.peek() {
                // [§ 6.5 ID selectors](https://www.w3.org/TR/selectors-3/#id-selectors)
                Some(CssToken::Hash(id)) => {
                    self.position += 1;
                    Condition::Id(id.clone())
                }
                // [§ 6.4 Class selectors](https://www.w3.org/TR/selectors-3/#class-html)
                Some(CssToken::Delim('.')) => {
                    self.position += 1;
                    let Some(CssToken::Ident(class)) = self.next_token() else {
                        return None;
                    };
                    Condition::Class(class.clone())
                }
                Some(CssToken::LeftBracket) => {
                    self.position += 1;
                    self.parse_attribute()?
                }
                Some(CssToken::Colon) => {
                    self.position += 1;
                    self.parse_pseudo()?
                }
                _ => break,
            };
            conditions.push(condition);
            seen = true;
        }

        seen.then_some(Selector::Compound { name, conditions })
    }

    /// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors-3/#attribute-selectors)
    fn parse_attribute(&mut self) -> Option<Condition> {
        let _ = self.skip_whitespace();
        let Some(CssToken::Ident(name)) = self.next_token() else {
            return None;
        };
        let name = name.to_ascii_lowercase();
        let _ = self.skip_whitespace();

        let operator = match self.next_token()? {
            CssToken::RightBracket => return Some(Condition::AttributeExists(name)),
            CssToken::Delim('=') => '=',
            CssToken::Delim(op @ ('~' | '|')) => {
                let Some(CssToken::Delim('=')) = self.next_token() else {
                    return None;
                };
                *op
            }
            // Substring matchers (^=, $=, *=) are not supported.
            _ => return None,
        };

        let _ = self.skip_whitespace();
        let value = match self.next_token()? {
            CssToken::Ident(v) | CssToken::String(v) => v.clone(),
            _ => return None,
        };
        let _ = self.skip_whitespace();
        let Some(CssToken::RightBracket) = self.next_token() else {
            return None;
        };

        Some(match operator {
            '~' => Condition::AttributeIncludes { name, value },
            '|' => Condition::AttributeDashMatch { name, value },
            _ => Condition::AttributeEquals { name, value },
        })
    }

    /// [§ 6.6 Pseudo-classes](https://www.w3.org/TR/selectors-3/#pseudo-classes)
    /// and [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors-3/#pseudo-elements),
    /// after the first `:`.
    fn parse_pseudo(&mut self) -> Option<Condition> {
        // "::" introduces a pseudo-element; it is kept as a condition that
        // never matches an element.
        if let Some(CssToken::Colon) = self.peek() {
            self.position += 1;
        }

        match self.next_token()? {
            CssToken::Ident(name) => Some(Condition::Pseudo {
                name: name.to_ascii_lowercase(),
                arg: None,
            }),
            CssToken::Function(name) => {
                let start = self.position;
                let mut depth = 0usize;
                loop {
                    match self.next_token()? {
                        CssToken::RightParen if depth == 0 => break,
                        CssToken::RightParen => depth -= 1,
                        CssToken::Function(_) | CssToken::LeftParen => depth += 1,
                        _ => {}
                    }
                }
                let arg = css_text(&self.tokens[start..self.position - 1]);
                Some(Condition::Pseudo {
                    name: name.to_ascii_lowercase(),
                    arg: Some(arg.trim().to_string()),
                })
            }
            _ => None,
        }
    }
}
