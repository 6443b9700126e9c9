//! The knowledge-base corpus index.
//!
//! A [`CorpusIndex`] is built once from a snapshot by the [`IndexBuilder`]
//! and never mutated afterwards. It holds the normalized entries with their
//! tf-idf vectors, the document-frequency table the query is weighed
//! against, and the match threshold derived from the corpus shape.

pub mod builder;
pub mod entry;
pub mod tfidf;
pub mod threshold;

use serde::Serialize;

pub use builder::IndexBuilder;
pub use entry::{IndexedEntry, KnowledgeEntry};
pub use tfidf::{DocumentFrequencies, TermVector};

/// Statistics collected while building an index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    /// Entries that made it into the index.
    pub valid_entries: usize,
    /// Entries skipped as malformed.
    pub skipped_entries: usize,
    /// Average raw question length in characters over valid entries.
    pub average_question_chars: f64,
    /// Number of distinct normalized terms.
    pub vocabulary_size: usize,
    /// The adjusted match threshold.
    pub threshold: f64,
}

/// Immutable, normalized knowledge base ready for matching.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    entries: Vec<IndexedEntry>,
    frequencies: DocumentFrequencies,
    stats: IndexStats,
}

impl CorpusIndex {
    pub(crate) fn new(
        entries: Vec<IndexedEntry>,
        frequencies: DocumentFrequencies,
        stats: IndexStats,
    ) -> Self {
        CorpusIndex {
            entries,
            frequencies,
            stats,
        }
    }

    /// Entries in snapshot order.
    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The document-frequency table.
    pub fn frequencies(&self) -> &DocumentFrequencies {
        &self.frequencies
    }

    /// The match threshold.
    pub fn threshold(&self) -> f64 {
        self.stats.threshold
    }

    /// Build statistics.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
