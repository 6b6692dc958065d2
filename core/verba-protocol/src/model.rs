use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::DocumentId;
use crate::ngram::NGram;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Highest n-gram order stored in a corpus.
pub const MAX_ORDER: usize = 3;

/// How often one n-gram occurred in one document.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct GramRecord {
    pub document: DocumentId,
    pub gram: NGram,
    pub frequency: u32,
}

/// Persisted n-gram frequency tables, one record per (document, n-gram).
///
/// The same n-gram may appear once per document; consumers sum across
/// documents when they need a corpus-wide total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NGramCorpus {
    pub version: u32,
    pub unigrams: Vec<GramRecord>,
    pub bigrams: Vec<GramRecord>,
    pub trigrams: Vec<GramRecord>,
}

impl NGramCorpus {
    pub fn new(version: u32) -> Self {
        Self { version, ..Self::default() }
    }

    /// Records of the given order, or `None` outside `1..=MAX_ORDER`.
    pub fn table(&self, order: usize) -> Option<&[GramRecord]> {
        match order {
            1 => Some(self.unigrams.as_slice()),
            2 => Some(self.bigrams.as_slice()),
            3 => Some(self.trigrams.as_slice()),
            _ => None,
        }
    }

    /// Appends a record to the table matching the n-gram's order.
    /// Zero counts and unsupported orders are dropped.
    pub fn push(&mut self, record: GramRecord) -> bool {
        if record.frequency == 0 {
            return false;
        }
        let table = match record.gram.order() {
            1 => &mut self.unigrams,
            2 => &mut self.bigrams,
            3 => &mut self.trigrams,
            _ => return false,
        };
        table.push(record);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty() && self.bigrams.is_empty() && self.trigrams.is_empty()
    }

    pub fn documents(&self) -> Vec<DocumentId> {
        let mut docs: Vec<DocumentId> = self.unigrams.iter().map(|r| r.document).collect();
        docs.sort_unstable();
        docs.dedup();
        docs
    }
}

impl ArchivedNGramCorpus {
    pub fn table(&self, order: usize) -> Option<&[ArchivedGramRecord]> {
        match order {
            1 => Some(self.unigrams.as_slice()),
            2 => Some(self.bigrams.as_slice()),
            3 => Some(self.trigrams.as_slice()),
            _ => None,
        }
    }
}
