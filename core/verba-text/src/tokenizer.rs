use std::iter::FusedIterator;

use nom::{
    bytes::complete::{take_till, take_while1},
    error::Error,
    IResult,
};

/// Predicate for characters that make up a word once the text is
/// lowercased: `a`-`z`, the accented vowels, `ñ` and `ü`.
/// Everything else (digits, punctuation, other scripts) separates words.
pub fn is_word_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü')
}

/// Skips separators, then takes the next maximal word run.
fn next_word(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_till::<_, _, Error<&str>>(is_word_char)(input)?;
    take_while1(is_word_char)(input)
}

/// Owns the lowercased text; every call to [`Tokenizer::tokens`] starts a
/// fresh pass over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    text: String,
}

impl Tokenizer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_lowercase(),
        }
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { rest: &self.text }
    }
}

/// Lazy word iterator produced by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match next_word(self.rest) {
            Ok((rest, word)) => {
                self.rest = rest;
                Some(word)
            }
            Err(_) => {
                self.rest = "";
                None
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Lowercases `text` and collects its words.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new(text).tokens().map(str::to_owned).collect()
}
