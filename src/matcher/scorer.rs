//! Blended similarity scoring over the corpus.
//!
//! Each entry is scored as
//!
//! ```text
//! combined = w_cos · cosine(tf-idf) + w_str · dice(bigrams) + w_kw · keyword overlap
//! ```
//!
//! and the best entry is returned if its score is strictly greater than the
//! corpus threshold. The scan is linear; ties keep the earliest entry.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::similarity::{DiceCoefficient, StringSimilarity};
use crate::config::ScoreWeights;
use crate::corpus::tfidf::cosine_similarity;
use crate::corpus::{CorpusIndex, IndexedEntry};
use crate::error::{FrontdeskError, Result};
use crate::matcher::query::Query;
use crate::matcher::result::{MatchErrorKind, MatchResult};

/// Per-entry score components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub entry_id: String,
    pub question: String,
    pub cosine: f64,
    pub string: f64,
    pub keyword: f64,
    pub combined: f64,
}

/// Fraction of shared keywords, relative to the larger keyword set.
pub fn keyword_overlap(query: &BTreeSet<String>, entry: &BTreeSet<String>) -> f64 {
    let common = query.intersection(entry).count();
    common as f64 / query.len().max(entry.len()).max(1) as f64
}

/// Scores utterances against a [`CorpusIndex`].
#[derive(Clone)]
pub struct SimilarityScorer {
    normalizer: Arc<TextNormalizer>,
    string_similarity: Arc<dyn StringSimilarity>,
    weights: ScoreWeights,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("string_similarity", &self.string_similarity.name())
            .field("weights", &self.weights)
            .finish()
    }
}

impl SimilarityScorer {
    /// Create a scorer with the Dice coefficient and the given weights.
    pub fn new(normalizer: Arc<TextNormalizer>, weights: ScoreWeights) -> Self {
        Self::with_string_similarity(normalizer, Arc::new(DiceCoefficient::new()), weights)
    }

    /// Create a scorer with a custom string similarity.
    pub fn with_string_similarity(
        normalizer: Arc<TextNormalizer>,
        string_similarity: Arc<dyn StringSimilarity>,
        weights: ScoreWeights,
    ) -> Self {
        SimilarityScorer {
            normalizer,
            string_similarity,
            weights,
        }
    }

    /// Get the blend weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Find the best entry for `utterance`.
    ///
    /// Never fails: a missing index or a scoring failure is reported through
    /// [`MatchResult::error`].
    pub fn match_query(&self, index: Option<&CorpusIndex>, utterance: &str) -> MatchResult {
        let Some(index) = index else {
            error!("knowledge index is not initialized");
            return MatchResult::failed(MatchErrorKind::NotInitialized);
        };

        if index.is_empty() {
            return MatchResult::not_found(0.0);
        }

        match self.best_match(index, utterance) {
            Ok((entry, score)) if score > index.threshold() => {
                info!(
                    question = %entry.question,
                    score = format_args!("{score:.3}"),
                    "knowledge match"
                );
                MatchResult::matched(entry, score)
            }
            Ok((_, score)) => {
                info!(
                    best = format_args!("{score:.3}"),
                    need = format_args!("{:.3}", index.threshold()),
                    "no knowledge match"
                );
                MatchResult::not_found(score)
            }
            Err(e) => {
                error!(error = %e, "knowledge search failed");
                MatchResult::failed(MatchErrorKind::ComputationError)
            }
        }
    }

    /// Score every entry of `index` against `utterance`, in corpus order.
    pub fn score_breakdown(&self, index: &CorpusIndex, utterance: &str) -> Result<Vec<ScoreBreakdown>> {
        let query = Query::prepare(&self.normalizer, index, utterance)?;

        index
            .entries()
            .iter()
            .map(|entry| self.score_entry(&query, entry))
            .collect()
    }

    fn best_match<'a>(&self, index: &'a CorpusIndex, utterance: &str) -> Result<(&'a IndexedEntry, f64)> {
        let query = Query::prepare(&self.normalizer, index, utterance)?;

        let mut best: Option<(&IndexedEntry, f64)> = None;
        for entry in index.entries() {
            let combined = self.score_entry(&query, entry)?.combined;
            if best.is_none_or(|(_, score)| combined > score) {
                best = Some((entry, combined));
            }
        }

        best.ok_or_else(|| FrontdeskError::other("no entries to score"))
    }

    fn score_entry(&self, query: &Query, entry: &IndexedEntry) -> Result<ScoreBreakdown> {
        let cosine = cosine_similarity(&query.vector, &entry.term_vector);
        let string = self
            .string_similarity
            .similarity(&query.normalized.text, &entry.normalized_question);
        let keyword = keyword_overlap(&query.normalized.keywords, &entry.keywords);
        let combined = self.weights.combine(cosine, string, keyword);

        if !combined.is_finite() {
            return Err(FrontdeskError::other(format!(
                "non-finite score for entry {}",
                entry.id
            )));
        }

        Ok(ScoreBreakdown {
            entry_id: entry.id.clone(),
            question: entry.question.clone(),
            cosine,
            string,
            keyword,
            combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{IndexBuilder, KnowledgeEntry};
    use crate::config::MatcherConfig;

    fn setup(entries: Vec<KnowledgeEntry>) -> (SimilarityScorer, CorpusIndex) {
        let normalizer = Arc::new(TextNormalizer::new().unwrap());
        let builder = IndexBuilder::with_normalizer(normalizer.clone(), MatcherConfig::default());
        let index = builder.build_from_entries(entries).unwrap();
        (SimilarityScorer::new(normalizer, ScoreWeights::default()), index)
    }

    struct Nan;

    impl StringSimilarity for Nan {
        fn similarity(&self, _a: &str, _b: &str) -> f64 {
            f64::NAN
        }

        fn name(&self) -> &'static str {
            "nan"
        }
    }

    #[test]
    fn test_hours_scenario() {
        let (scorer, index) = setup(vec![KnowledgeEntry::new("What are your hours?", "9am to 7pm")]);

        let breakdown = scorer.score_breakdown(&index, "when are you open").unwrap();
        assert!((breakdown[0].cosine - 0.5).abs() < 1e-9);
        assert!((breakdown[0].string - 12.0 / 28.0).abs() < 1e-9);
        assert_eq!(breakdown[0].keyword, 0.0);
        assert!((breakdown[0].combined - 0.35).abs() < 1e-9);

        let result = scorer.match_query(Some(&index), "when are you open");
        assert!(result.found);
        assert_eq!(result.answer.as_deref(), Some("9am to 7pm"));
        assert_eq!(result.matched_question.as_deref(), Some("What are your hours?"));
    }

    #[test]
    fn test_not_initialized_and_empty() {
        let (scorer, index) = setup(Vec::new());

        let result = scorer.match_query(None, "anything");
        assert_eq!(result.error_kind, Some(MatchErrorKind::NotInitialized));
        assert!(!result.found);

        let result = scorer.match_query(Some(&index), "anything");
        assert!(!result.found);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.error_kind, None);
    }

    #[test]
    fn test_non_finite_score_is_a_computation_error() {
        let normalizer = Arc::new(TextNormalizer::new().unwrap());
        let index = IndexBuilder::with_normalizer(normalizer.clone(), MatcherConfig::default())
            .build_from_entries(vec![KnowledgeEntry::new("Do you sell gift cards?", "Yes")])
            .unwrap();
        let scorer =
            SimilarityScorer::with_string_similarity(normalizer, Arc::new(Nan), ScoreWeights::default());

        let result = scorer.match_query(Some(&index), "gift cards");
        assert_eq!(result.error_kind, Some(MatchErrorKind::ComputationError));
        assert!(!result.found);
    }

    #[test]
    fn test_ties_keep_first_entry() {
        let (scorer, index) = setup(vec![
            KnowledgeEntry::new("Do you sell gift cards?", "first").with_id("a"),
            KnowledgeEntry::new("Do you sell gift cards?", "second").with_id("b"),
        ]);

        let result = scorer.match_query(Some(&index), "do you sell gift cards");
        assert!(result.found);
        assert_eq!(result.matched_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_keyword_overlap() {
        let set = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<BTreeSet<_>>();

        assert_eq!(keyword_overlap(&set(&[]), &set(&[])), 0.0);
        assert_eq!(keyword_overlap(&set(&["gift", "card"]), &set(&["card"])), 0.5);
        assert_eq!(keyword_overlap(&set(&["hour"]), &set(&["hour"])), 1.0);
    }
}
