//! [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)

use super::TokenStream;
use crate::property::PropertyId;
use crate::stylesheet::Declaration;
use crate::tokenizer::CssToken;
use crate::value::Value;

/// [§ 5.4.5](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
pub(super) fn parse_declaration_list(stream: &mut TokenStream) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    loop {
        stream.skip_whitespace();
        match stream.next_token() {
            CssToken::Eof => return declarations,
            // "<semicolon-token>: Do nothing."
            CssToken::Semicolon => {}
            // "<ident-token>: Initialize a temporary list initially filled with
            // the current input token. As long as the next input token is
            // anything other than a <semicolon-token> or <EOF-token>, consume
            // a component value and append it to the temporary list."
            CssToken::Ident(name) => {
                let tokens = consume_until_semicolon(stream);
                if let Some(declaration) = parse_declaration(&name, &tokens) {
                    declarations.push(declaration);
                }
            }
            // "anything else: This is a parse error. Reconsume the current
            // input token. As long as the next input token is anything other
            // than a <semicolon-token> or <EOF-token>, consume a component
            // value and throw away the returned value."
            _ => {
                let _ = consume_until_semicolon(stream);
            }
        }
    }
}

/// Tokens up to the next top-level `;` (consumed) or the end of input.
fn consume_until_semicolon(stream: &mut TokenStream) -> Vec<CssToken> {
    let mut depth = 0usize;
    let mut tokens = Vec::new();
    loop {
        match stream.peek() {
            CssToken::Eof => return tokens,
            CssToken::Semicolon if depth == 0 => {
                stream.position += 1;
                return tokens;
            }
            CssToken::Function(_)
            | CssToken::LeftParen
            | CssToken::LeftBracket
            | CssToken::LeftBrace => depth += 1,
            CssToken::RightParen | CssToken::RightBracket | CssToken::RightBrace => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
        tokens.push(stream.next_token());
    }
}

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
fn parse_declaration(name: &str, tokens: &[CssToken]) -> Option<Declaration> {
    // STEP 1: "While the next input token is a <whitespace-token>, consume
    // the next input token."
    let mut rest = trim_whitespace(tokens);

    // STEP 2: "If the next input token is anything other than a
    // <colon-token>, this is a parse error. Return nothing."
    let (CssToken::Colon, after_colon) = rest.split_first()? else {
        return None;
    };
    rest = trim_whitespace(after_colon);

    // STEP 3: "If the last two non-<whitespace-token>s in the declaration's
    // value are a <delim-token> with the value "!" followed by an
    // <ident-token> with a value that is an ASCII case-insensitive match for
    // "important", remove them from the declaration's value and set the
    // declaration's important flag to true."
    let mut important = false;
    if let Some((CssToken::Ident(last), before)) = rest.split_last()
        && last.eq_ignore_ascii_case("important")
    {
        let before = trim_whitespace(before);
        if let Some((CssToken::Delim('!'), value)) = before.split_last() {
            important = true;
            rest = trim_whitespace(value);
        }
    }

    // Unknown properties are dropped here rather than at cascade time.
    let property = PropertyId::from_name(name)?;
    let value = parse_component_values(rest);
    if value.is_empty() {
        return None;
    }

    Some(Declaration {
        property,
        value,
        important,
    })
}

/// Convert component tokens into a value list.
///
/// Functions keep their arguments; commas and slashes become separator
/// values; whitespace and other punctuation are dropped.
fn parse_component_values(tokens: &[CssToken]) -> Vec<Value> {
    let mut values = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        i += 1;
        let value = match token {
            CssToken::Ident(v) => Value::keyword(v.as_str()),
            CssToken::Hash(v) => Value::hash(v.as_str()),
            CssToken::String(v) => Value::string(v.as_str()),
            CssToken::Url(v) => Value::uri(v.as_str()),
            CssToken::Number(v) => Value::number(v.as_str()),
            CssToken::Percentage(v) => Value::percent(format!("{v}%")),
            CssToken::Dimension { number, unit } => Value::length(format!("{number}{unit}")),
            CssToken::Comma => Value::comma(),
            CssToken::Delim('/') => Value::slash(),
            CssToken::Function(name) => {
                let end = matching_paren(tokens, i);
                let args = parse_component_values(&tokens[i..end]);
                i = (end + 1).min(tokens.len());
                let name = name.to_ascii_lowercase();
                if name == "url" {
                    // url("...") with a quoted address
                    let address = args.into_iter().next().map(|arg| arg.data).unwrap_or_default();
                    Value::uri(address)
                } else {
                    Value::function(name, args)
                }
            }
            CssToken::LeftParen | CssToken::LeftBracket => {
                // Simple blocks carry nothing the engine uses.
                i = (matching_paren(tokens, i) + 1).min(tokens.len());
                continue;
            }
            _ => continue,
        };
        values.push(value);
    }
    values
}

/// Index of the token closing the block that starts at `start`, or the end
/// of the slice if it is never closed.
fn matching_paren(tokens: &[CssToken], start: usize) -> usize {
    let mut depth = 0usize;
    for (offset, token) in tokens[start..].iter().enumerate() {
        match token {
            CssToken::Function(_) | CssToken::LeftParen | CssToken::LeftBracket => depth += 1,
            CssToken::RightParen | CssToken::RightBracket if depth == 0 => return start + offset,
            CssToken::RightParen | CssToken::RightBracket => depth -= 1,
            _ => {}
        }
    }
    tokens.len()
}

fn trim_whitespace(tokens: &[CssToken]) -> &[CssToken] {
    let start = tokens.iter().position(|t| !t.is_whitespace()).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(|t| !t.is_whitespace()).map_or(start, |i| i + 1);
    &tokens[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_declarations;
    use crate::value::ValueKind;

    #[test]
    fn test_important_flag() {
        let decls = parse_declarations("color: red ! important; margin: 0");
        assert_eq!(decls.len(), 2);
        assert!(decls[0].important);
        assert_eq!(decls[0].value, vec![Value::keyword("red")]);
        assert!(!decls[1].important);
    }

    #[test]
    fn test_unknown_and_malformed_are_skipped() {
        let decls = parse_declarations("zoom: 2; color red; ; 12px; color: blue");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].property, PropertyId::Color);
    }

    #[test]
    fn test_function_arguments() {
        let decls = parse_declarations("color: rgb(1, 2, 3)");
        let value = &decls[0].value[0];
        assert_eq!(value.kind, ValueKind::Function);
        assert_eq!(value.data, "rgb");
        assert_eq!(value.args.len(), 5);
        assert_eq!(value.args[1].kind, ValueKind::Comma);
    }

    #[test]
    fn test_semicolon_inside_function_does_not_split() {
        let decls = parse_declarations("src: url(\"a;b.ttf\"); color: red");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].value, vec![Value::uri("a;b.ttf")]);
    }

    #[test]
    fn test_font_shorthand_keeps_separators() {
        let decls = parse_declarations("font: 12pt/14pt \"Gentium\", serif");
        let kinds: Vec<ValueKind> = decls[0].value.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValueKind::Length,
                ValueKind::Slash,
                ValueKind::Length,
                ValueKind::String,
                ValueKind::Comma,
                ValueKind::Keyword,
            ]
        );
    }
}
