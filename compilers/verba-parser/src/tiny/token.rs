use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::token::Span;

/// Reserved words of TINY. Matched exactly against scanned identifiers.
pub const KEYWORDS: [&str; 4] = ["if", "then", "else", "end"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TinyTokenType {
    Id,
    Number,
    Plus,
    Minus,
    Mult,
    Div,
    Assign,
    Gt,
    Eq,
    #[cfg_attr(feature = "serde", serde(rename = "LPAREN"))]
    LParen,
    #[cfg_attr(feature = "serde", serde(rename = "RPAREN"))]
    RParen,
    Semicolon,
    Keyword,
    Eof,
}

impl fmt::Display for TinyTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TinyTokenType::Id => "ID",
            TinyTokenType::Number => "NUMBER",
            TinyTokenType::Plus => "PLUS",
            TinyTokenType::Minus => "MINUS",
            TinyTokenType::Mult => "MULT",
            TinyTokenType::Div => "DIV",
            TinyTokenType::Assign => "ASSIGN",
            TinyTokenType::Gt => "GT",
            TinyTokenType::Eq => "EQ",
            TinyTokenType::LParen => "LPAREN",
            TinyTokenType::RParen => "RPAREN",
            TinyTokenType::Semicolon => "SEMICOLON",
            TinyTokenType::Keyword => "KEYWORD",
            TinyTokenType::Eof => "EOF",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TinyToken<'a> {
    pub kind: TinyTokenType,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> TinyToken<'a> {
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TinyTokenType::Keyword && self.text == word
    }
}

impl fmt::Display for TinyToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TinyTokenType::Eof => f.write_str("EOF"),
            kind => write!(f, "{kind} '{}'", self.text),
        }
    }
}
