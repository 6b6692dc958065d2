use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// An ordered tuple of `n` consecutive tokens.
///
/// The length is fixed at construction; there is no way to push or pop
/// tokens afterwards. Equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct NGram {
    tokens: Vec<String>,
}

impl NGram {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn from_slice<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| String::from(t.as_ref())).collect(),
        }
    }

    /// Arity of the n-gram.
    pub fn order(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// True when the first `prefix.len()` tokens equal `prefix`.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.tokens.len()
            && self.tokens.iter().zip(prefix).all(|(t, p)| t == p)
    }

    /// True when the n-gram is exactly `tokens`.
    pub fn matches(&self, tokens: &[&str]) -> bool {
        self.tokens.len() == tokens.len() && self.starts_with(tokens)
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl ArchivedNGram {
    pub fn order(&self) -> usize {
        self.tokens.len()
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(|t| t.as_str())
    }

    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.tokens.len()
            && self.tokens.iter().zip(prefix).all(|(t, p)| t.as_str() == *p)
    }

    pub fn matches(&self, tokens: &[&str]) -> bool {
        self.tokens.len() == tokens.len() && self.starts_with(tokens)
    }
}
