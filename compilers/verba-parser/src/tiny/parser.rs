use tracing::{debug, debug_span};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::error::TinyError;
use super::lexer::TinyLexer;
use super::token::{TinyToken, TinyTokenType};

/// Terminal outcome of checking a TINY program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "verdict"))]
pub enum ParseResult {
    Accepted,
    Rejected { reason: String, position: usize },
}

impl ParseResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ParseResult::Accepted)
    }
}

impl From<Result<(), TinyError>> for ParseResult {
    fn from(outcome: Result<(), TinyError>) -> Self {
        match outcome {
            Ok(()) => ParseResult::Accepted,
            Err(err) => ParseResult::Rejected {
                position: err.position(),
                reason: err.to_string(),
            },
        }
    }
}

type Step = Result<(), TinyError>;

/// Recursive-descent checker with a single token of lookahead.
///
/// ```text
/// program        := stmt_sequence EOF
/// stmt_sequence  := statement (';' statement)*
/// statement      := if_stmt | assign_stmt
/// if_stmt        := 'if' expression 'then' stmt_sequence ('else' stmt_sequence)? 'end'
/// assign_stmt    := ID ':=' expression
/// expression     := term (('>' | '=') term)*
/// term           := factor (('+' | '-') factor)*
/// factor         := primary (('*' | '/') primary)*
/// primary        := '(' expression ')' | ID | NUMBER
/// ```
///
/// The first mismatch aborts the parse; there is no backtracking or
/// resynchronization.
pub struct TinyParser<'a> {
    lexer: TinyLexer<'a>,
    current: TinyToken<'a>,
}

impl<'a> TinyParser<'a> {
    /// Primes the lookahead with the first token.
    pub fn new(source: &'a str) -> Result<Self, TinyError> {
        let mut lexer = TinyLexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses the whole input as one program.
    pub fn program(mut self) -> Step {
        self.stmt_sequence()?;
        if self.current.kind != TinyTokenType::Eof {
            return Err(TinyError::TrailingInput {
                found: self.current.to_string(),
                position: self.current.span.start,
            });
        }
        Ok(())
    }

    fn advance(&mut self) -> Step {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn unexpected(&self, expected: impl Into<String>) -> TinyError {
        TinyError::UnexpectedToken {
            expected: expected.into(),
            found: self.current.to_string(),
            position: self.current.span.start,
        }
    }

    fn consume(&mut self, kind: TinyTokenType) -> Step {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    fn consume_keyword(&mut self, word: &str) -> Step {
        if self.current.is_keyword(word) {
            self.advance()
        } else {
            Err(self.unexpected(format!("KEYWORD '{word}'")))
        }
    }

    fn stmt_sequence(&mut self) -> Step {
        self.statement()?;
        while self.current.kind == TinyTokenType::Semicolon {
            self.advance()?;
            // A trailing ';' before the end of a block is allowed
            if self.current.kind == TinyTokenType::Eof
                || self.current.is_keyword("end")
                || self.current.is_keyword("else")
            {
                break;
            }
            self.statement()?;
        }
        Ok(())
    }

    fn statement(&mut self) -> Step {
        if self.current.is_keyword("if") {
            self.if_stmt()
        } else if self.current.kind == TinyTokenType::Id {
            self.assign_stmt()
        } else {
            Err(self.unexpected("KEYWORD 'if' or ID"))
        }
    }

    fn if_stmt(&mut self) -> Step {
        self.consume_keyword("if")?;
        self.expression()?;
        self.consume_keyword("then")?;
        self.stmt_sequence()?;
        if self.current.is_keyword("else") {
            self.advance()?;
            self.stmt_sequence()?;
        }
        self.consume_keyword("end")
    }

    fn assign_stmt(&mut self) -> Step {
        self.consume(TinyTokenType::Id)?;
        self.consume(TinyTokenType::Assign)?;
        self.expression()
    }

    fn expression(&mut self) -> Step {
        self.term()?;
        while matches!(self.current.kind, TinyTokenType::Gt | TinyTokenType::Eq) {
            self.advance()?;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Step {
        self.factor()?;
        while matches!(self.current.kind, TinyTokenType::Plus | TinyTokenType::Minus) {
            self.advance()?;
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Step {
        self.primary()?;
        while matches!(self.current.kind, TinyTokenType::Mult | TinyTokenType::Div) {
            self.advance()?;
            self.primary()?;
        }
        Ok(())
    }

    fn primary(&mut self) -> Step {
        match self.current.kind {
            TinyTokenType::LParen => {
                self.advance()?;
                self.expression()?;
                self.consume(TinyTokenType::RParen)
            }
            TinyTokenType::Id | TinyTokenType::Number => self.advance(),
            _ => Err(self.unexpected("LPAREN, ID or NUMBER")),
        }
    }
}

/// Scans and parses `source`, folding any lexical or syntax error into a
/// rejection.
pub fn check_program(source: &str) -> ParseResult {
    let _span = debug_span!("check_program", bytes = source.len()).entered();

    let outcome = TinyParser::new(source).and_then(TinyParser::program);
    if let Err(err) = &outcome {
        debug!(%err, "program rejected");
    }
    outcome.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(source: &str) -> TinyError {
        TinyParser::new(source)
            .and_then(TinyParser::program)
            .expect_err("program should be rejected")
    }

    #[test]
    fn test_accepts_if_else() {
        assert_eq!(
            check_program("if x > 0 then y := 1 else y := 2 end"),
            ParseResult::Accepted
        );
    }

    #[test]
    fn test_rejects_leftover_tokens() {
        let result = check_program("x := 1 + 2 > 3 then end");
        assert_eq!(
            result,
            ParseResult::Rejected {
                reason: "syntax error: expected end of input, found KEYWORD 'then' at byte 15"
                    .to_string(),
                position: 15,
            }
        );
        assert!(!result.is_accepted());
    }

    #[test]
    fn test_sequences_and_trailing_semicolons() {
        assert!(check_program("x := 1; y := x * (2 + 3); z := y / 4 - x").is_accepted());
        assert!(check_program("x := 1;").is_accepted());
        assert!(check_program("if a = b then x := 1; else x := 2; end").is_accepted());
        assert!(check_program("x := 1 $").is_accepted());
    }

    #[test]
    fn test_nested_if() {
        let source = "if a > 1 then\n  if b = 2 then c := 3 end;\n  d := 4\nelse\n  d := 5\nend";
        assert!(check_program(source).is_accepted());
    }

    #[test]
    fn test_keywords_are_checked_exactly() {
        // 'else' in place of 'then' is a KEYWORD token, but not the right one
        let err = rejection("if x else y := 1 end");
        assert_eq!(
            err,
            TinyError::UnexpectedToken {
                expected: "KEYWORD 'then'".to_string(),
                found: "KEYWORD 'else'".to_string(),
                position: 5,
            }
        );
    }

    #[test]
    fn test_missing_pieces() {
        assert!(matches!(
            rejection("x := (1 + 2"),
            TinyError::UnexpectedToken { ref expected, ref found, position: 11 }
                if expected == "RPAREN" && found == "EOF"
        ));
        assert!(matches!(
            rejection("x 1"),
            TinyError::UnexpectedToken { ref expected, .. } if expected == "ASSIGN"
        ));
        assert!(matches!(
            rejection("if x > 1 then y := 2"),
            TinyError::UnexpectedToken { ref expected, .. } if expected == "KEYWORD 'end'"
        ));
        assert!(matches!(
            rejection("x := * 2"),
            TinyError::UnexpectedToken { ref expected, position: 5, .. }
                if expected == "LPAREN, ID or NUMBER"
        ));
    }

    #[test]
    fn test_empty_and_statementless_programs() {
        assert!(matches!(
            rejection(""),
            TinyError::UnexpectedToken { ref found, position: 0, .. } if found == "EOF"
        ));
        assert!(!check_program(";").is_accepted());
        assert!(!check_program("if x then end").is_accepted());
    }

    #[test]
    fn test_lexical_error_rejects() {
        let result = check_program("x := 1 # 2");
        assert_eq!(
            result,
            ParseResult::Rejected {
                reason: "lexical error: invalid character '#' at byte 7".to_string(),
                position: 7,
            }
        );
        // Also when the bad character is the very first one
        assert!(matches!(rejection("?"), TinyError::InvalidCharacter { ch: '?', position: 0 }));
    }
}
