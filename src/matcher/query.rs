//! A normalized, weighted utterance ready to be scored.

use crate::analysis::normalizer::{NormalizedText, TextNormalizer};
use crate::corpus::{CorpusIndex, TermVector};
use crate::error::Result;

/// One utterance prepared against a specific index.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The utterance as spoken.
    pub raw: String,
    /// Normalized text, tokens and keywords.
    pub normalized: NormalizedText,
    /// Term weights against the index's document frequencies.
    pub vector: TermVector,
}

impl Query {
    /// Normalize `utterance` and weigh it against `index`.
    pub fn prepare(normalizer: &TextNormalizer, index: &CorpusIndex, utterance: &str) -> Result<Self> {
        let normalized = normalizer.normalize(utterance)?;
        let vector = index.frequencies().query_vector(&normalized.tokens);

        Ok(Query {
            raw: utterance.to_string(),
            normalized,
            vector,
        })
    }
}
