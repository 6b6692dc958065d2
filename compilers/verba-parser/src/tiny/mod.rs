//! Scanner and recursive-descent checker for TINY, a minimal imperative
//! language of assignments, `if`/`then`/`else`/`end` and integer arithmetic.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::TinyError;
pub use lexer::{tokenize, TinyLexer};
pub use parser::{check_program, ParseResult, TinyParser};
pub use token::{TinyToken, TinyTokenType, KEYWORDS};
