use nom::{bytes::complete::take_while1, error::Error};

use super::error::TinyError;
use super::token::{TinyToken, TinyTokenType, KEYWORDS};
use crate::token::Span;

/// Pull-based TINY scanner: one token per [`TinyLexer::next_token`] call.
///
/// `$` is skipped like whitespace. Once the input is exhausted every call
/// returns an `EOF` token.
#[derive(Debug, Clone)]
pub struct TinyLexer<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> TinyLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0 }
    }

    pub fn next_token(&mut self) -> Result<TinyToken<'a>, TinyError> {
        let source = self.source;
        loop {
            let rest = &source[self.position..];
            let Some(c) = rest.chars().next() else {
                let end = source.len();
                return Ok(TinyToken {
                    kind: TinyTokenType::Eof,
                    text: "",
                    span: Span::new(end, end),
                });
            };

            if c.is_whitespace() || c == '$' {
                self.position += c.len_utf8();
                continue;
            }

            if c.is_alphabetic() {
                let word = self.run(rest, char::is_alphabetic);
                let kind = if KEYWORDS.contains(&word) {
                    TinyTokenType::Keyword
                } else {
                    TinyTokenType::Id
                };
                return Ok(self.emit(kind, word.len()));
            }

            if c.is_ascii_digit() {
                let digits = self.run(rest, |c| c.is_ascii_digit());
                return Ok(self.emit(TinyTokenType::Number, digits.len()));
            }

            if rest.starts_with(":=") {
                return Ok(self.emit(TinyTokenType::Assign, 2));
            }

            let kind = match c {
                '+' => TinyTokenType::Plus,
                '-' => TinyTokenType::Minus,
                '*' => TinyTokenType::Mult,
                '/' => TinyTokenType::Div,
                '(' => TinyTokenType::LParen,
                ')' => TinyTokenType::RParen,
                '=' => TinyTokenType::Eq,
                '>' => TinyTokenType::Gt,
                ';' => TinyTokenType::Semicolon,
                _ => {
                    return Err(TinyError::InvalidCharacter {
                        ch: c,
                        position: self.position,
                    })
                }
            };
            return Ok(self.emit(kind, 1));
        }
    }

    fn run(&self, rest: &'a str, predicate: fn(char) -> bool) -> &'a str {
        take_while1::<_, _, Error<&str>>(predicate)(rest)
            .map(|(_, run)| run)
            .unwrap_or_default()
    }

    fn emit(&mut self, kind: TinyTokenType, len: usize) -> TinyToken<'a> {
        let start = self.position;
        let end = start + len;
        self.position = end;
        TinyToken {
            kind,
            text: &self.source[start..end],
            span: Span::new(start, end),
        }
    }
}

/// Scans the whole program, ending with the `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<TinyToken<'_>>, TinyError> {
    let mut lexer = TinyLexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.kind == TinyTokenType::Eof {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TinyTokenType::*;

    fn kinds(source: &str) -> Vec<TinyTokenType> {
        tokenize(source)
            .expect("source should scan")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_assignment_tokens() {
        let tokens = tokenize("x := (10 + y) * 2").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["x", ":=", "(", "10", "+", "y", ")", "*", "2", ""]);
        assert_eq!(
            kinds("x := (10 + y) * 2"),
            vec![Id, Assign, LParen, Number, Plus, Id, RParen, Mult, Number, Eof]
        );
    }

    #[test]
    fn test_keywords_and_operators() {
        assert_eq!(
            kinds("if a > 1 then b := a / 2 - 1 else b := 0; end"),
            vec![
                Keyword, Id, Gt, Number, Keyword, Id, Assign, Id, Div, Number, Minus, Number,
                Keyword, Id, Assign, Number, Semicolon, Keyword, Eof
            ]
        );
        // Keywords are case-sensitive
        assert_eq!(kinds("IF"), vec![Id, Eof]);
    }

    #[test]
    fn test_identifiers_are_letters_only() {
        let tokens = tokenize("abc123").unwrap();
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].kind, Number);
        assert!(matches!(
            tokenize("a_b"),
            Err(TinyError::InvalidCharacter { ch: '_', position: 1 })
        ));
    }

    #[test]
    fn test_dollar_is_skipped() {
        assert_eq!(kinds("x := 1 $"), vec![Id, Assign, Number, Eof]);
        assert_eq!(kinds("$$"), vec![Eof]);
    }

    #[test]
    fn test_lone_colon_is_invalid() {
        let err = tokenize("x : 1").unwrap_err();
        assert_eq!(err, TinyError::InvalidCharacter { ch: ':', position: 2 });
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = TinyLexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, Id);
        for _ in 0..3 {
            let eof = lexer.next_token().unwrap();
            assert_eq!(eof.kind, Eof);
            assert_eq!(eof.span, Span::new(1, 1));
        }
    }
}
