//! Sparse tf-idf weighting over the knowledge-base questions.
//!
//! Inverse document frequency uses the smoothed natural-log form
//! `1 + ln(N / (1 + df))`. Terms never seen in the corpus weigh zero, so a
//! query made only of unseen words has an all-zero vector and a cosine
//! similarity of zero against every entry.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Sparse term → weight vector. Ordered so that sums are reproducible.
pub type TermVector = BTreeMap<String, f64>;

/// Document-frequency table of the corpus.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequencies {
    /// Term -> number of documents containing it.
    counts: AHashMap<String, usize>,
    /// Total number of documents registered.
    n_documents: usize,
}

impl DocumentFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the terms of one document.
    pub fn add_document(&mut self, tokens: &[String]) {
        self.n_documents += 1;

        let mut seen: Vec<&String> = tokens.iter().collect();
        seen.sort_unstable();
        seen.dedup();

        for token in seen {
            *self.counts.entry(token.clone()).or_insert(0) += 1;
        }
    }

    /// Number of documents registered.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Number of distinct terms.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Inverse document frequency of `term`; zero for unseen terms.
    pub fn idf(&self, term: &str) -> f64 {
        match self.document_frequency(term) {
            0 => 0.0,
            df => 1.0 + (self.n_documents as f64 / (1.0 + df as f64)).ln(),
        }
    }

    /// Weight an indexed document: raw term count × idf.
    pub fn document_vector(&self, tokens: &[String]) -> TermVector {
        let mut vector = TermVector::new();
        for (term, count) in Self::term_counts(tokens) {
            vector.insert(term.to_string(), count as f64 * self.idf(term));
        }
        vector
    }

    /// Weight a query: (count / token count) × idf. Unseen terms are left out.
    pub fn query_vector(&self, tokens: &[String]) -> TermVector {
        let length = tokens.len() as f64;
        let mut vector = TermVector::new();
        for (term, count) in Self::term_counts(tokens) {
            let idf = self.idf(term);
            if idf > 0.0 {
                vector.insert(term.to_string(), count as f64 / length * idf);
            }
        }
        vector
    }

    fn term_counts(tokens: &[String]) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Cosine similarity of two sparse vectors; zero if either has no magnitude.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();
    let magnitude_a: f64 = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.values().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot / (magnitude_a * magnitude_b)
    }
}
