//! Builds a [`CorpusIndex`] from a knowledge-base snapshot.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analysis::normalizer::{NormalizedText, TextNormalizer};
use crate::config::MatcherConfig;
use crate::corpus::entry::{IndexedEntry, KnowledgeEntry};
use crate::corpus::threshold::adaptive_threshold;
use crate::corpus::tfidf::DocumentFrequencies;
use crate::corpus::{CorpusIndex, IndexStats};
use crate::error::{FrontdeskError, Result};

/// Builder for immutable corpus indexes.
///
/// # Examples
///
/// ```
/// use frontdesk::corpus::IndexBuilder;
/// use serde_json::json;
///
/// let builder = IndexBuilder::new().unwrap();
/// let index = builder
///     .build(&json!([
///         {"id": 1, "question": "What are your hours?", "answer": "9am to 7pm"},
///         {"id": 2, "question": "Do you take walk-ins?"},
///     ]))
///     .unwrap();
///
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.stats().skipped_entries, 1);
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    normalizer: Arc<TextNormalizer>,
    config: MatcherConfig,
}

impl IndexBuilder {
    /// Create a builder with its own normalizer and the default settings.
    pub fn new() -> Result<Self> {
        Ok(Self::with_normalizer(
            Arc::new(TextNormalizer::new()?),
            MatcherConfig::default(),
        ))
    }

    /// Create a builder sharing `normalizer` with the matcher.
    pub fn with_normalizer(normalizer: Arc<TextNormalizer>, config: MatcherConfig) -> Self {
        IndexBuilder { normalizer, config }
    }

    /// Get the matcher settings used for the threshold.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Build an index from a JSON snapshot.
    ///
    /// Fails only if the snapshot is not an array. Entries that are not
    /// objects, or lack a non-blank `question` or `answer`, are skipped.
    pub fn build(&self, snapshot: &Value) -> Result<CorpusIndex> {
        let Some(items) = snapshot.as_array() else {
            return Err(FrontdeskError::initialization(format!(
                "knowledge base must be a JSON array, got {}",
                json_kind(snapshot)
            )));
        };

        let mut entries = Vec::with_capacity(items.len());
        let mut skipped = 0;
        for (position, item) in items.iter().enumerate() {
            match KnowledgeEntry::deserialize(item) {
                Ok(entry) => entries.push((position, entry)),
                Err(e) => {
                    warn!(position, reason = %e, "skipping malformed knowledge entry");
                    skipped += 1;
                }
            }
        }

        self.build_index(entries, skipped)
    }

    /// Build an index from typed entries.
    pub fn build_from_entries(&self, entries: Vec<KnowledgeEntry>) -> Result<CorpusIndex> {
        self.build_index(entries.into_iter().enumerate().collect(), 0)
    }

    /// Read a JSON snapshot file and build an index from it.
    pub fn build_from_path<P: AsRef<Path>>(&self, path: P) -> Result<CorpusIndex> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FrontdeskError::initialization(format!(
                "failed to read knowledge base {}: {e}",
                path.display()
            ))
        })?;
        let snapshot: Value = serde_json::from_str(&contents).map_err(|e| {
            FrontdeskError::initialization(format!(
                "knowledge base {} is not valid JSON: {e}",
                path.display()
            ))
        })?;

        self.build(&snapshot)
    }

    fn build_index(
        &self,
        entries: Vec<(usize, KnowledgeEntry)>,
        mut skipped: usize,
    ) -> Result<CorpusIndex> {
        let mut frequencies = DocumentFrequencies::new();
        let mut prepared: Vec<(String, KnowledgeEntry, NormalizedText)> =
            Vec::with_capacity(entries.len());
        let mut question_chars = 0usize;

        for (position, entry) in entries {
            if let Some(reason) = entry.defect() {
                warn!(position, reason, "skipping malformed knowledge entry");
                skipped += 1;
                continue;
            }

            let normalized = self.normalizer.normalize(&entry.question)?;
            frequencies.add_document(&normalized.tokens);
            question_chars += entry.question.chars().count();

            let id = entry.id.clone().unwrap_or_else(|| position.to_string());
            debug!(id = %id, keywords = normalized.keywords.len(), "indexed knowledge entry");
            prepared.push((id, entry, normalized));
        }

        // Vectors need the final document frequencies.
        let entries: Vec<IndexedEntry> = prepared
            .into_iter()
            .map(|(id, entry, normalized)| IndexedEntry {
                id,
                term_vector: frequencies.document_vector(&normalized.tokens),
                question: entry.question,
                answer: entry.answer,
                normalized_question: normalized.text,
                keywords: normalized.keywords,
            })
            .collect();

        let average_question_chars = if entries.is_empty() {
            0.0
        } else {
            question_chars as f64 / entries.len() as f64
        };
        let threshold = adaptive_threshold(&self.config, entries.len(), average_question_chars);

        let stats = IndexStats {
            valid_entries: entries.len(),
            skipped_entries: skipped,
            average_question_chars,
            vocabulary_size: frequencies.vocabulary_size(),
            threshold,
        };

        if entries.is_empty() {
            warn!(skipped, "knowledge base is empty");
        }
        info!(
            entries = stats.valid_entries,
            skipped = stats.skipped_entries,
            threshold = format_args!("{threshold:.3}"),
            "knowledge index ready"
        );

        Ok(CorpusIndex::new(entries, frequencies, stats))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
