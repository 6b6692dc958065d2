/// Why a TINY program was rejected. Every variant records the byte offset
/// of the offending character or token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TinyError {
    #[error("lexical error: invalid character '{ch}' at byte {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("syntax error: expected {expected}, found {found} at byte {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("syntax error: expected end of input, found {found} at byte {position}")]
    TrailingInput { found: String, position: usize },
}

impl TinyError {
    pub fn position(&self) -> usize {
        match self {
            TinyError::InvalidCharacter { position, .. }
            | TinyError::UnexpectedToken { position, .. }
            | TinyError::TrailingInput { position, .. } => *position,
        }
    }
}
