use verba_protocol::{ArchivedNGramCorpus, NGramCorpus};

/// Read access to n-gram frequencies, whatever the storage.
pub trait FrequencySource {
    /// Corpus-wide frequency of exactly `gram`, summed over documents.
    fn frequency(&self, gram: &[&str]) -> u64;

    /// Every stored n-gram of order `prefix.len() + 1` that starts with
    /// `prefix`, as (final token, frequency), in storage order.
    fn continuations(&self, prefix: &[&str]) -> Vec<(String, u64)>;
}

impl FrequencySource for NGramCorpus {
    fn frequency(&self, gram: &[&str]) -> u64 {
        self.table(gram.len())
            .unwrap_or_default()
            .iter()
            .filter(|record| record.gram.matches(gram))
            .map(|record| u64::from(record.frequency))
            .sum()
    }

    fn continuations(&self, prefix: &[&str]) -> Vec<(String, u64)> {
        self.table(prefix.len() + 1)
            .unwrap_or_default()
            .iter()
            .filter(|record| record.gram.starts_with(prefix))
            .filter_map(|record| {
                let next = record.gram.last()?;
                Some((next.to_owned(), u64::from(record.frequency)))
            })
            .collect()
    }
}

// Same lookups straight off the zero-copy archive.
impl FrequencySource for ArchivedNGramCorpus {
    fn frequency(&self, gram: &[&str]) -> u64 {
        self.table(gram.len())
            .unwrap_or_default()
            .iter()
            .filter(|record| record.gram.matches(gram))
            .map(|record| u64::from(record.frequency))
            .sum()
    }

    fn continuations(&self, prefix: &[&str]) -> Vec<(String, u64)> {
        self.table(prefix.len() + 1)
            .unwrap_or_default()
            .iter()
            .filter(|record| record.gram.starts_with(prefix))
            .filter_map(|record| {
                let next = record.gram.last()?;
                Some((next.to_owned(), u64::from(record.frequency)))
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus archive failed validation: {0}")]
    Invalid(String),
}

/// Validates `bytes` as an archived [`NGramCorpus`] and returns a view into it.
///
/// The buffer must be aligned for the archive (e.g. an `rkyv::AlignedVec`).
pub fn load_archived(bytes: &[u8]) -> Result<&ArchivedNGramCorpus, CorpusError> {
    rkyv::check_archived_root::<NGramCorpus>(bytes).map_err(|e| CorpusError::Invalid(e.to_string()))
}
