use super::token::CssToken;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Streaming CSS tokenizer. Tokenization never fails: malformed input
/// degrades to delimiter tokens or truncated strings, and the parser's error
/// recovery discards whatever does not form a declaration.
pub struct CssTokenizer {
    /// The input being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
}

impl CssTokenizer {
    /// Create a tokenizer over the given source text.
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Self {
        Self {
            input: input.as_ref().chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the whole input. The returned list always ends with
    /// [`CssToken::Eof`].
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<CssToken> {
        let mut tokenizer = Self::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    pub fn next_token(&mut self) -> CssToken {
        self.consume_comments();

        let Some(c) = self.consume() else {
            return CssToken::Eof;
        };

        match c {
            c if is_whitespace(c) => {
                while self.peek().is_some_and(is_whitespace) {
                    self.position += 1;
                }
                CssToken::Whitespace
            }
            '"' | '\'' => self.consume_string(c),
            '#' => {
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    CssToken::Hash(self.consume_ident_sequence())
                } else {
                    CssToken::Delim('#')
                }
            }
            '(' => CssToken::LeftParen,
            ')' => CssToken::RightParen,
            '[' => CssToken::LeftBracket,
            ']' => CssToken::RightBracket,
            '{' => CssToken::LeftBrace,
            '}' => CssToken::RightBrace,
            ',' => CssToken::Comma,
            ':' => CssToken::Colon,
            ';' => CssToken::Semicolon,
            '+' | '.' => {
                if starts_number(Some(c), self.peek(), self.peek_at(1)) {
                    self.position -= 1;
                    self.consume_numeric()
                } else {
                    CssToken::Delim(c)
                }
            }
            '-' => {
                if starts_number(Some('-'), self.peek(), self.peek_at(1)) {
                    self.position -= 1;
                    self.consume_numeric()
                } else if self.peek() == Some('-') && self.peek_at(1) == Some('>') {
                    self.position += 2;
                    CssToken::Cdc
                } else if starts_ident(Some('-'), self.peek(), self.peek_at(1)) {
                    self.position -= 1;
                    self.consume_ident_like()
                } else {
                    CssToken::Delim('-')
                }
            }
            '<' => {
                if self.peek() == Some('!')
                    && self.peek_at(1) == Some('-')
                    && self.peek_at(2) == Some('-')
                {
                    self.position += 3;
                    CssToken::Cdo
                } else {
                    CssToken::Delim('<')
                }
            }
            '@' => {
                if starts_ident(self.peek(), self.peek_at(1), self.peek_at(2)) {
                    CssToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CssToken::Delim('@')
                }
            }
            '\\' => {
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.position -= 1;
                    self.consume_ident_like()
                } else {
                    CssToken::Delim('\\')
                }
            }
            c if c.is_ascii_digit() => {
                self.position -= 1;
                self.consume_numeric()
            }
            c if is_ident_start_code_point(c) => {
                self.position -= 1;
                self.consume_ident_like()
            }
            c => CssToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => return,
                }
            }
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// An unescaped newline ends the string early instead of producing a
    /// `<bad-string-token>`; the truncated text is kept.
    fn consume_string(&mut self, ending: char) -> CssToken {
        let mut value = String::new();
        loop {
            match self.consume() {
                None => return CssToken::String(value),
                Some(c) if c == ending => return CssToken::String(value),
                Some('\n') => {
                    self.position -= 1;
                    return CssToken::String(value);
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric(&mut self) -> CssToken {
        let number = self.consume_number();

        if starts_ident(self.peek(), self.peek_at(1), self.peek_at(2)) {
            let unit = self.consume_ident_sequence();
            CssToken::Dimension { number, unit }
        } else if self.peek() == Some('%') {
            self.position += 1;
            CssToken::Percentage(number)
        } else {
            CssToken::Number(number)
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// Returns the number's source spelling.
    fn consume_number(&mut self) -> String {
        let mut repr = String::new();

        // STEP 1: optional sign
        if let Some(sign @ ('+' | '-')) = self.peek() {
            self.position += 1;
            repr.push(sign);
        }

        // STEP 2: integer digits
        self.consume_digits(&mut repr);

        // STEP 3: fraction
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
            repr.push('.');
            self.consume_digits(&mut repr);
        }

        // STEP 4: exponent
        if let Some(e @ ('e' | 'E')) = self.peek() {
            let next = self.peek_at(1);
            let signed = matches!(next, Some('+' | '-'))
                && self.peek_at(2).is_some_and(|c| c.is_ascii_digit());
            if signed || next.is_some_and(|c| c.is_ascii_digit()) {
                self.position += 1;
                repr.push(e);
                if signed {
                    if let Some(sign) = self.consume() {
                        repr.push(sign);
                    }
                }
                self.consume_digits(&mut repr);
            }
        }

        repr
    }

    fn consume_digits(&mut self, into: &mut String) {
        while let Some(d) = self.peek().filter(char::is_ascii_digit) {
            self.position += 1;
            into.push(d);
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like(&mut self) -> CssToken {
        let name = self.consume_ident_sequence();

        if self.peek() != Some('(') {
            return CssToken::Ident(name);
        }
        self.position += 1;

        if name.eq_ignore_ascii_case("url") {
            while self.peek().is_some_and(is_whitespace) {
                self.position += 1;
            }
            // A quoted argument is an ordinary function call: url("a.png")
            if !matches!(self.peek(), Some('"' | '\'')) {
                return self.consume_url();
            }
        }
        CssToken::Function(name)
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url(&mut self) -> CssToken {
        let mut value = String::new();
        loop {
            match self.consume() {
                None | Some(')') => return CssToken::Url(value),
                Some(c) if is_whitespace(c) => {
                    while self.peek().is_some_and(is_whitespace) {
                        self.position += 1;
                    }
                    if matches!(self.peek(), None | Some(')')) {
                        self.position += 1;
                        return CssToken::Url(value);
                    }
                    self.consume_bad_url_remnants();
                    return CssToken::Url(value);
                }
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    value.push(self.consume_escaped_code_point());
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) {
        while let Some(c) = self.consume() {
            if c == ')' {
                return;
            }
            if c == '\\' && is_valid_escape(Some('\\'), self.peek()) {
                let _ = self.consume_escaped_code_point();
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        loop {
            match self.peek() {
                Some(c) if is_ident_code_point(c) => {
                    self.position += 1;
                    result.push(c);
                }
                Some('\\') if is_valid_escape(Some('\\'), self.peek_at(1)) => {
                    self.position += 1;
                    result.push(self.consume_escaped_code_point());
                }
                _ => return result,
            }
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Expects the backslash to have been consumed already.
    fn consume_escaped_code_point(&mut self) -> char {
        let Some(c) = self.consume() else {
            return char::REPLACEMENT_CHARACTER;
        };
        if !c.is_ascii_hexdigit() {
            return c;
        }

        let mut hex = String::from(c);
        while hex.len() < 6 {
            match self.peek() {
                Some(h) if h.is_ascii_hexdigit() => {
                    self.position += 1;
                    hex.push(h);
                }
                _ => break,
            }
        }
        // A single whitespace after a hex escape belongs to the escape.
        if self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }

        u32::from_str_radix(&hex, 16)
            .ok()
            .filter(|&cp| cp != 0)
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second.is_some_and(|c| c != '\n')
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn starts_ident(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('-') => {
            second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                || is_valid_escape(second, third)
        }
        Some('\\') => is_valid_escape(first, second),
        Some(c) => is_ident_start_code_point(c),
        None => false,
    }
}

/// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
fn starts_number(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    match first {
        Some('+' | '-') => is_digit(second) || (second == Some('.') && is_digit(third)),
        Some('.') => is_digit(second),
        c => is_digit(c),
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || !c.is_ascii() || c == '_'
}

fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn significant(input: &str) -> Vec<CssToken> {
        CssTokenizer::tokenize(input)
            .into_iter()
            .filter(|t| !t.is_whitespace() && !t.is_eof())
            .collect()
    }

    #[test]
    fn test_numbers_keep_their_spelling() {
        assert_eq!(
            significant("1.50 -2 +3em 50% .5"),
            vec![
                CssToken::Number("1.50".into()),
                CssToken::Number("-2".into()),
                CssToken::Dimension {
                    number: "+3".into(),
                    unit: "em".into()
                },
                CssToken::Percentage("50".into()),
                CssToken::Number(".5".into()),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            significant("/* a */p/* b */"),
            vec![CssToken::Ident("p".into())]
        );
    }

    #[test]
    fn test_unterminated_comment_reaches_eof() {
        assert_eq!(significant("p /* never closed"), vec![CssToken::Ident("p".into())]);
    }

    #[test]
    fn test_hash_and_at_keyword() {
        assert_eq!(
            significant("#fff @media"),
            vec![
                CssToken::Hash("fff".into()),
                CssToken::AtKeyword("media".into())
            ]
        );
    }

    #[test]
    fn test_unquoted_url() {
        assert_eq!(
            significant("url( a/b.png )"),
            vec![CssToken::Url("a/b.png".into())]
        );
    }

    #[test]
    fn test_quoted_url_is_function() {
        assert_eq!(
            significant("url(\"x.png\")"),
            vec![
                CssToken::Function("url".into()),
                CssToken::String("x.png".into()),
                CssToken::RightParen
            ]
        );
    }

    #[test]
    fn test_hex_escape_in_ident() {
        assert_eq!(significant("\\41 b"), vec![CssToken::Ident("Ab".into())]);
    }

    #[test]
    fn test_cdo_cdc() {
        assert_eq!(
            significant("<!-- p -->"),
            vec![CssToken::Cdo, CssToken::Ident("p".into()), CssToken::Cdc]
        );
    }

    #[test]
    fn test_string_stops_at_newline() {
        assert_eq!(
            significant("'abc\ndef'"),
            vec![
                CssToken::String("abc".into()),
                CssToken::Ident("def".into()),
                CssToken::String(String::new()),
            ]
        );
    }
}
