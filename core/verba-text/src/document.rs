use tracing::{debug, debug_span};
use verba_protocol::{DocumentId, GramRecord, NGram, NGramCorpus};

use crate::frequency::{count_frequencies, FrequencyTable};
use crate::ngram::ngrams;
use crate::stopwords::remove_stop_words;
use crate::tokenizer::tokenize;

/// Everything extracted from one uploaded text.
///
/// N-gram tables are built from the raw token stream (stop words kept, so
/// suggestions can predict them); `keywords` is the stop-word-free table
/// used for keyword listings and word clouds.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub document: DocumentId,
    pub unigrams: FrequencyTable<NGram>,
    pub bigrams: FrequencyTable<NGram>,
    pub trigrams: FrequencyTable<NGram>,
    pub keywords: FrequencyTable<String>,
}

impl DocumentAnalysis {
    pub fn analyze(document: DocumentId, text: &str) -> Self {
        let _span = debug_span!("analyze_document", document = document.0, bytes = text.len()).entered();

        let tokens = tokenize(text);
        let unigrams = count_frequencies(ngrams(&tokens, 1));
        let bigrams = count_frequencies(ngrams(&tokens, 2));
        let trigrams = count_frequencies(ngrams(&tokens, 3));
        let keywords = count_frequencies(remove_stop_words(tokens.iter().cloned()));

        debug!(
            tokens = tokens.len(),
            unique = unigrams.len(),
            bigrams = bigrams.len(),
            trigrams = trigrams.len(),
            "document analyzed"
        );

        Self {
            document,
            unigrams,
            bigrams,
            trigrams,
            keywords,
        }
    }

    /// Distinct words in the document.
    pub fn unique_words(&self) -> usize {
        self.unigrams.len()
    }

    /// Total words in the document.
    pub fn total_words(&self) -> u64 {
        self.unigrams.total()
    }

    /// One corpus record per distinct n-gram, unigrams first.
    pub fn records(&self) -> impl Iterator<Item = GramRecord> + '_ {
        [&self.unigrams, &self.bigrams, &self.trigrams]
            .into_iter()
            .flat_map(|table| table.iter())
            .map(|(gram, count)| GramRecord {
                document: self.document,
                gram: gram.clone(),
                frequency: u32::try_from(count).unwrap_or(u32::MAX),
            })
    }

    /// Appends this document's records to `corpus`.
    pub fn write_into(&self, corpus: &mut NGramCorpus) {
        for record in self.records() {
            corpus.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(tokens: &[&str]) -> NGram {
        NGram::from_slice(tokens)
    }

    #[test]
    fn test_analyze_document() {
        let analysis = DocumentAnalysis::analyze(
            DocumentId::new(1),
            "El perro corre. El perro ladra, el gato duerme.",
        );

        assert_eq!(analysis.total_words(), 9);
        assert_eq!(analysis.unique_words(), 6);
        assert_eq!(analysis.unigrams.get(&g(&["el"])), 3);
        assert_eq!(analysis.bigrams.get(&g(&["el", "perro"])), 2);
        // Sentence punctuation does not break n-grams
        assert_eq!(analysis.bigrams.get(&g(&["corre", "el"])), 1);
        assert_eq!(analysis.trigrams.get(&g(&["el", "perro", "corre"])), 1);

        assert_eq!(analysis.keywords.get("perro"), 2);
        assert_eq!(analysis.keywords.get("el"), 0);
    }

    #[test]
    fn test_write_into_corpus() {
        let analysis = DocumentAnalysis::analyze(DocumentId::new(4), "uno dos uno");
        let mut corpus = NGramCorpus::new(1);
        analysis.write_into(&mut corpus);

        assert_eq!(corpus.unigrams.len(), 2);
        assert_eq!(corpus.bigrams.len(), 2);
        assert_eq!(corpus.trigrams.len(), 1);
        assert_eq!(corpus.unigrams[0].gram, g(&["uno"]));
        assert_eq!(corpus.unigrams[0].frequency, 2);
        assert!(corpus.unigrams.iter().all(|r| r.document == DocumentId::new(4)));
    }

    #[test]
    fn test_empty_document() {
        let analysis = DocumentAnalysis::analyze(DocumentId::new(2), "123 !!");
        assert_eq!(analysis.total_words(), 0);
        assert_eq!(analysis.records().count(), 0);
    }
}
