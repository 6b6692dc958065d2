//! Word-level text processing: tokenization, stop-word filtering, n-gram
//! generation and frequency counting.

pub mod document;
pub mod frequency;
pub mod ngram;
pub mod stopwords;
pub mod tokenizer;

pub use document::DocumentAnalysis;
pub use frequency::{count_frequencies, FrequencyTable};
pub use ngram::{bigrams, ngrams, trigrams, unigrams};
pub use stopwords::{clean_tokens, is_stop_word, remove_stop_words, STOP_WORDS};
pub use tokenizer::{is_word_char, tokenize, Tokenizer, Tokens};
