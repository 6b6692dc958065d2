use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use rkyv::AlignedVec;
use tracing::{info, warn};
use verba_protocol::{DocumentId, NGramCorpus};
use verba_text::DocumentAnalysis;

pub const CORPUS_VERSION: u32 = 1;

/// Reads a text file, replacing invalid UTF-8 rather than failing.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Analyzes each text as its own document, numbered from 1.
pub fn build_corpus<'t>(texts: impl IntoIterator<Item = &'t str>) -> NGramCorpus {
    let mut corpus = NGramCorpus::new(CORPUS_VERSION);
    for (i, text) in texts.into_iter().enumerate() {
        let document = DocumentId::new(i as u32 + 1);
        let analysis = DocumentAnalysis::analyze(document, text);
        info!(
            document = document.0,
            words = analysis.total_words(),
            unique = analysis.unique_words(),
            "indexed document"
        );
        analysis.write_into(&mut corpus);
    }
    corpus
}

/// Re-routes records through [`NGramCorpus::push`] so hand-written JSON
/// cannot smuggle in zero counts or misfiled n-grams.
pub fn normalize(raw: NGramCorpus) -> NGramCorpus {
    let mut corpus = NGramCorpus::new(raw.version);
    let records = raw
        .unigrams
        .into_iter()
        .chain(raw.bigrams)
        .chain(raw.trigrams);
    for record in records {
        let gram = record.gram.to_string();
        if !corpus.push(record) {
            warn!(%gram, "dropping record with zero count or unsupported order");
        }
    }
    corpus
}

pub fn encode(corpus: &NGramCorpus) -> anyhow::Result<AlignedVec> {
    rkyv::to_bytes::<_, 256>(corpus).map_err(|e| anyhow!("rkyv serialization failed: {e:?}"))
}

/// Reads an archive into an aligned buffer, ready for `load_archived`.
pub fn read_archive(path: &Path) -> anyhow::Result<AlignedVec> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(&bytes);
    Ok(aligned)
}
