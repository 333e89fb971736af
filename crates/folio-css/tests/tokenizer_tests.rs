//! Integration tests for the CSS tokenizer.

use folio_css::{CssToken, CssTokenizer};

/// Tokenize and drop whitespace; the trailing EOF is kept.
fn tokenize(input: &str) -> Vec<CssToken> {
    CssTokenizer::tokenize(input)
        .into_iter()
        .filter(|token| !token.is_whitespace())
        .collect()
}

fn ident(name: &str) -> CssToken {
    CssToken::Ident(name.to_string())
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(CssTokenizer::tokenize(""), vec![CssToken::Eof]);
}

#[test]
fn test_whitespace_collapses_to_one_token() {
    assert_eq!(
        CssTokenizer::tokenize("   \t\n  "),
        vec![CssToken::Whitespace, CssToken::Eof]
    );
}

#[test]
fn test_rule() {
    assert_eq!(
        tokenize("p.note > em { color: #00f; margin: 0 1.5em }"),
        vec![
            ident("p"),
            CssToken::Delim('.'),
            ident("note"),
            CssToken::Delim('>'),
            ident("em"),
            CssToken::LeftBrace,
            ident("color"),
            CssToken::Colon,
            CssToken::Hash("00f".into()),
            CssToken::Semicolon,
            ident("margin"),
            CssToken::Colon,
            CssToken::Number("0".into()),
            CssToken::Dimension {
                number: "1.5".into(),
                unit: "em".into(),
            },
            CssToken::RightBrace,
            CssToken::Eof,
        ]
    );
}

#[test]
fn test_attribute_selector() {
    assert_eq!(
        tokenize("[lang|=\"en\"]"),
        vec![
            CssToken::LeftBracket,
            ident("lang"),
            CssToken::Delim('|'),
            CssToken::Delim('='),
            CssToken::String("en".into()),
            CssToken::RightBracket,
            CssToken::Eof,
        ]
    );
}

#[test]
fn test_functions_and_commas() {
    assert_eq!(
        tokenize("rgb(255, 0, 0)"),
        vec![
            CssToken::Function("rgb".into()),
            CssToken::Number("255".into()),
            CssToken::Comma,
            CssToken::Number("0".into()),
            CssToken::Comma,
            CssToken::Number("0".into()),
            CssToken::RightParen,
            CssToken::Eof,
        ]
    );
}

#[test]
fn test_important_is_delim_and_ident() {
    assert_eq!(
        tokenize("red !important"),
        vec![ident("red"), CssToken::Delim('!'), ident("important"), CssToken::Eof]
    );
}

#[test]
fn test_vendor_prefixed_ident() {
    assert_eq!(
        tokenize("-webkit-text-fill-color"),
        vec![ident("-webkit-text-fill-color"), CssToken::Eof]
    );
}

#[test]
fn test_escaped_string_quote() {
    assert_eq!(
        tokenize(r#""say \"hi\"""#),
        vec![CssToken::String("say \"hi\"".into()), CssToken::Eof]
    );
}

#[test]
fn test_streaming_matches_batch() {
    let input = "@media print { h1 { page-break-after: avoid } }";
    let mut tokenizer = CssTokenizer::new(input);
    let mut streamed = Vec::new();
    loop {
        let token = tokenizer.next_token();
        let done = token.is_eof();
        streamed.push(token);
        if done {
            break;
        }
    }
    assert_eq!(streamed, CssTokenizer::tokenize(input));
}

#[test]
fn test_display_spells_tokens() {
    let tokens: Vec<String> = tokenize("12pt 50% #abc")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        tokens[..3],
        ["<dimension:12pt>", "<percentage:50%>", "<hash:#abc>"]
    );
}
