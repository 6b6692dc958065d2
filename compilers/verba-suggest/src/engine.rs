use tracing::{debug, debug_span};
use verba_text::FrequencyTable;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::source::FrequencySource;

/// Number of suggestions returned unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 3;

/// Arity of the model used for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// One token of context, bigram continuations
    Bigram,
    /// Two tokens of context, trigram continuations
    Trigram,
}

impl Order {
    /// `Some` for n = 2 or 3.
    pub fn from_arity(n: usize) -> Option<Self> {
        match n {
            2 => Some(Order::Bigram),
            3 => Some(Order::Trigram),
            _ => None,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Order::Bigram => 2,
            Order::Trigram => 3,
        }
    }

    pub fn context_len(self) -> usize {
        self.arity() - 1
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Suggestion {
    pub token: String,
    pub probability: f64,
}

/// Unsmoothed Markov next-token predictor over a [`FrequencySource`].
pub struct SuggestionEngine<'s, S: ?Sized> {
    source: &'s S,
    limit: usize,
}

impl<'s, S: FrequencySource + ?Sized> SuggestionEngine<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Ranks the tokens that followed the last `order.context_len()` tokens
    /// of `context`.
    ///
    /// Probability is the continuation's frequency over the frequency of the
    /// context itself, both summed over documents. The two are looked up
    /// independently, so on an inconsistent corpus the probabilities need
    /// not sum to one. Unseen or too-short contexts give no suggestions.
    pub fn suggest<T: AsRef<str>>(&self, context: &[T], order: Order) -> Vec<Suggestion> {
        let _span = debug_span!("suggest", order = order.arity(), context_len = context.len()).entered();

        let needed = order.context_len();
        if context.len() < needed {
            debug!("context shorter than model order");
            return Vec::new();
        }
        let window: Vec<&str> = context[context.len() - needed..]
            .iter()
            .map(|token| token.as_ref())
            .collect();

        let total = self.source.frequency(&window);
        if total == 0 {
            debug!(?window, "unseen context");
            return Vec::new();
        }

        // One entry per candidate, even when several documents recorded it
        let mut candidates = FrequencyTable::new();
        for (token, frequency) in self.source.continuations(&window) {
            candidates.add_count(token, frequency);
        }

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .map(|(token, frequency)| Suggestion {
                token,
                probability: frequency as f64 / total as f64,
            })
            .collect();
        // Stable: equal probabilities keep encounter order
        suggestions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        suggestions.truncate(self.limit);

        debug!(total, returned = suggestions.len());
        suggestions
    }
}

/// Top [`DEFAULT_LIMIT`] suggestions for `context`.
pub fn suggest<S, T>(source: &S, context: &[T], order: Order) -> Vec<Suggestion>
where
    S: FrequencySource + ?Sized,
    T: AsRef<str>,
{
    SuggestionEngine::new(source).suggest(context, order)
}
