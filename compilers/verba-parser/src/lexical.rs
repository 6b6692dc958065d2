use std::borrow::Cow;

use nom::{
    bytes::complete::{tag, take_until, take_while},
    character::complete::{digit1, satisfy},
    combinator::recognize,
    sequence::{pair, tuple},
    IResult,
};
use tracing::{debug, debug_span};

use crate::keyword_set::KeywordSet;
use crate::token::{LexKind, Span, Token};

/// Characters emitted as single-character `SYMBOL` tokens.
pub const SYMBOLS: &str = "()[]{}<>;=+-*";

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

/// Scans arbitrary source text into a flat token list.
///
/// Never fails: an unterminated block comment becomes a `LEXICAL_ERROR`
/// token and ends the scan, keeping everything collected before it.
pub struct LexicalAnalyzer<'a, 'k> {
    source: &'a str,
    position: usize,
    tokens: Vec<Token<'a>>,
    reserved: &'k KeywordSet<String>,
}

impl<'a, 'k> LexicalAnalyzer<'a, 'k> {
    pub fn new(source: &'a str, reserved: &'k KeywordSet<String>) -> Self {
        Self {
            source,
            position: 0,
            tokens: Vec::new(),
            reserved,
        }
    }

    pub fn analyze(mut self) -> Vec<Token<'a>> {
        let _span = debug_span!("lexical_analysis", bytes = self.source.len()).entered();

        while let Some(c) = self.rest().chars().next() {
            if c.is_whitespace() {
                self.position += c.len_utf8();
            } else if c.is_alphabetic() || c == '_' {
                self.word();
            } else if c.is_ascii_digit() {
                self.scan(digit1, LexKind::Number);
            } else if c == '/' {
                if !self.slash() {
                    break;
                }
            } else if SYMBOLS.contains(c) {
                self.emit(LexKind::Symbol, c.len_utf8());
            } else {
                self.emit(LexKind::Unknown, c.len_utf8());
            }
        }

        debug!(tokens = self.tokens.len(), "lexical analysis finished");
        self.tokens
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn emit(&mut self, kind: LexKind, len: usize) {
        let start = self.position;
        let end = start + len;
        self.tokens
            .push(Token::new(kind, &self.source[start..end], Span::new(start, end)));
        self.position = end;
    }

    /// Runs `parser` at the current position and emits what it consumed.
    fn scan(&mut self, parser: fn(&'a str) -> IResult<&'a str, &'a str>, kind: LexKind) -> bool {
        match parser(self.rest()) {
            Ok((_, lexeme)) => {
                self.emit(kind, lexeme.len());
                true
            }
            Err(_) => false,
        }
    }

    fn word(&mut self) {
        if let Ok((_, lexeme)) = identifier(self.rest()) {
            let kind = if self.reserved.contains(lexeme) {
                LexKind::ReservedWord
            } else {
                LexKind::Identifier
            };
            self.emit(kind, lexeme.len());
        }
    }

    /// Handles `/`: a block comment, or a lone slash operator.
    /// Returns `false` when scanning must stop.
    fn slash(&mut self) -> bool {
        if !self.rest().starts_with("/*") {
            self.emit(LexKind::OperatorSlash, 1);
            return true;
        }
        if self.scan(block_comment, LexKind::BlockComment) {
            return true;
        }

        let start = self.position;
        debug!(start, "unterminated block comment");
        self.tokens.push(Token {
            kind: LexKind::LexicalError,
            text: Cow::Owned(format!(
                "block comment starting at byte {start} is never closed"
            )),
            span: Span::new(start, self.source.len()),
        });
        self.position = self.source.len();
        false
    }
}

/// Builds the reserved-word set and scans `source` with it.
pub fn analyze_source<'a>(source: &'a str, reserved_words: &[&str]) -> Vec<Token<'a>> {
    let reserved: KeywordSet<String> = reserved_words.iter().copied().collect();
    LexicalAnalyzer::new(source, &reserved).analyze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text<'a>(tokens: &'a [Token<'_>]) -> Vec<(LexKind, &'a str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_ref())).collect()
    }

    #[test]
    fn test_mixed_statement() {
        let tokens = analyze_source("x = 10 /* c */ y", &["int", "while"]);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (LexKind::Identifier, "x"),
                (LexKind::Symbol, "="),
                (LexKind::Number, "10"),
                (LexKind::BlockComment, "/* c */"),
                (LexKind::Identifier, "y"),
            ]
        );
        assert_eq!(tokens[3].span, Span::new(7, 14));
    }

    #[test]
    fn test_reserved_words() {
        let tokens = analyze_source("while (_count1 < 3) { return; }", &["while", "return"]);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (LexKind::ReservedWord, "while"),
                (LexKind::Symbol, "("),
                (LexKind::Identifier, "_count1"),
                (LexKind::Symbol, "<"),
                (LexKind::Number, "3"),
                (LexKind::Symbol, ")"),
                (LexKind::Symbol, "{"),
                (LexKind::ReservedWord, "return"),
                (LexKind::Symbol, ";"),
                (LexKind::Symbol, "}"),
            ]
        );
    }

    #[test]
    fn test_digits_then_letters_split() {
        let tokens = analyze_source("12abc", &[]);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(LexKind::Number, "12"), (LexKind::Identifier, "abc")]
        );
    }

    #[test]
    fn test_slash_and_unknown_characters() {
        let tokens = analyze_source("a / b # ñandú", &[]);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (LexKind::Identifier, "a"),
                (LexKind::OperatorSlash, "/"),
                (LexKind::Identifier, "b"),
                (LexKind::Unknown, "#"),
                (LexKind::Identifier, "ñandú"),
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_stops_scanning() {
        let tokens = analyze_source("/* never closed", &[]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, LexKind::LexicalError);
        assert!(tokens[0].text.contains("byte 0"));

        let tokens = analyze_source("x /* open * / y", &[]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, LexKind::Identifier);
        assert_eq!(tokens[1].kind, LexKind::LexicalError);
        assert_eq!(tokens[1].span, Span::new(2, 15));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(analyze_source("", &[]).is_empty());
        assert!(analyze_source(" \t\n ", &["if"]).is_empty());
    }
}
