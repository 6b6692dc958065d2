use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Byte range in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LexKind {
    Identifier,
    /// Identifier-shaped lexeme found in the reserved-word set
    ReservedWord,
    Number,
    /// One of `()[]{}<>;=+-*`
    Symbol,
    /// `/* ... */`, delimiters included
    BlockComment,
    /// A `/` that does not open a comment
    OperatorSlash,
    Unknown,
    /// Scanning stopped here; the lexeme is a message, not source text
    LexicalError,
}

impl LexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexKind::Identifier => "IDENTIFIER",
            LexKind::ReservedWord => "RESERVED_WORD",
            LexKind::Number => "NUMBER",
            LexKind::Symbol => "SYMBOL",
            LexKind::BlockComment => "BLOCK_COMMENT",
            LexKind::OperatorSlash => "OPERATOR_SLASH",
            LexKind::Unknown => "UNKNOWN",
            LexKind::LexicalError => "LEXICAL_ERROR",
        }
    }
}

impl fmt::Display for LexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<'a> {
    pub kind: LexKind,
    pub text: Cow<'a, str>,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: LexKind, text: &'a str, span: Span) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
            span,
        }
    }
}
