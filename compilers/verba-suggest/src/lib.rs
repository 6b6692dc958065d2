pub mod engine;
pub mod source;

pub use engine::{suggest, Order, Suggestion, SuggestionEngine, DEFAULT_LIMIT};
pub use source::{load_archived, CorpusError, FrequencySource};
