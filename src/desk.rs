//! The per-turn decision facade.
//!
//! [`FrontDesk`] owns the closing classifier, the similarity scorer and the
//! currently installed [`CorpusIndex`]. Each utterance is first checked for
//! closing intent; only if the caller is not closing is the knowledge base
//! consulted.
//!
//! # Examples
//!
//! ```
//! use frontdesk::config::DeskConfig;
//! use frontdesk::desk::{FrontDesk, TurnDecision};
//! use serde_json::json;
//!
//! let desk = FrontDesk::new(&DeskConfig::default()).unwrap();
//! desk.load_snapshot(&json!([
//!     {"id": 1, "question": "What are your hours?", "answer": "9am to 7pm daily"}
//! ]))
//! .unwrap();
//!
//! assert_eq!(desk.decide("No thanks"), TurnDecision::Closing);
//! match desk.decide("when are you open") {
//!     TurnDecision::Lookup(result) => assert!(result.found),
//!     TurnDecision::Closing => unreachable!(),
//! }
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::sentiment::AfinnSentiment;
use crate::config::DeskConfig;
use crate::corpus::{CorpusIndex, IndexBuilder};
use crate::error::{FrontdeskError, Result};
use crate::intent::ClosingIntentClassifier;
use crate::matcher::{MatchResult, ScoreBreakdown, SimilarityScorer};

/// What to do with one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum TurnDecision {
    /// The caller is ending the conversation.
    Closing,
    /// The knowledge base was consulted.
    Lookup(MatchResult),
}

impl TurnDecision {
    /// Check if the caller is closing.
    pub fn is_closing(&self) -> bool {
        matches!(self, TurnDecision::Closing)
    }

    /// The lookup result, if the knowledge base was consulted.
    pub fn lookup(&self) -> Option<&MatchResult> {
        match self {
            TurnDecision::Lookup(result) => Some(result),
            TurnDecision::Closing => None,
        }
    }
}

/// Holds the currently installed index.
///
/// Readers clone the `Arc` once per query, so replacing the index never
/// affects a query already in flight.
#[derive(Debug, Default)]
pub struct IndexHandle {
    current: RwLock<Option<Arc<CorpusIndex>>>,
}

impl IndexHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the installed index, returning the previous one.
    pub fn install(&self, index: Arc<CorpusIndex>) -> Option<Arc<CorpusIndex>> {
        self.current.write().replace(index)
    }

    /// The installed index, if any.
    pub fn current(&self) -> Option<Arc<CorpusIndex>> {
        self.current.read().clone()
    }

    /// Check if an index has been installed.
    pub fn is_initialized(&self) -> bool {
        self.current.read().is_some()
    }
}

/// Per-turn decision engine.
#[derive(Debug)]
pub struct FrontDesk {
    builder: IndexBuilder,
    closing: ClosingIntentClassifier,
    scorer: SimilarityScorer,
    index: IndexHandle,
}

impl FrontDesk {
    /// Create a desk with no index installed.
    pub fn new(config: &DeskConfig) -> Result<Self> {
        config.validate()?;

        let normalizer = Arc::new(TextNormalizer::new()?);
        let builder = IndexBuilder::with_normalizer(normalizer.clone(), config.matcher.clone());
        let closing = ClosingIntentClassifier::with_components(
            normalizer.clone(),
            Arc::new(AfinnSentiment::new()),
            config.closing.clone(),
        );
        let scorer = SimilarityScorer::new(normalizer, config.matcher.weights);

        Ok(FrontDesk {
            builder,
            closing,
            scorer,
            index: IndexHandle::new(),
        })
    }

    /// The builder sharing this desk's normalizer and matcher settings.
    pub fn builder(&self) -> &IndexBuilder {
        &self.builder
    }

    /// The closing-intent classifier.
    pub fn closing_classifier(&self) -> &ClosingIntentClassifier {
        &self.closing
    }

    /// The similarity scorer.
    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Install a built index, replacing any previous one.
    pub fn install_index(&self, index: CorpusIndex) -> Arc<CorpusIndex> {
        let index = Arc::new(index);
        if self.index.install(index.clone()).is_some() {
            info!(entries = index.len(), "knowledge index replaced");
        }
        index
    }

    /// Build an index from a JSON snapshot and install it.
    pub fn load_snapshot(&self, snapshot: &Value) -> Result<Arc<CorpusIndex>> {
        let index = self.builder.build(snapshot)?;
        Ok(self.install_index(index))
    }

    /// The installed index, if any.
    pub fn index(&self) -> Option<Arc<CorpusIndex>> {
        self.index.current()
    }

    /// Decide what to do with one utterance.
    pub fn decide(&self, utterance: &str) -> TurnDecision {
        if self.closing.is_closing(utterance) {
            debug!("closing intent");
            return TurnDecision::Closing;
        }

        let index = self.index.current();
        TurnDecision::Lookup(self.scorer.match_query(index.as_deref(), utterance))
    }

    /// Decide many utterances in parallel. Results keep the input order.
    pub fn decide_batch<S: AsRef<str> + Sync>(&self, utterances: &[S]) -> Vec<TurnDecision> {
        utterances
            .par_iter()
            .map(|utterance| self.decide(utterance.as_ref()))
            .collect()
    }

    /// Per-entry score components for `utterance` against the installed index.
    pub fn explain(&self, utterance: &str) -> Result<Vec<ScoreBreakdown>> {
        let index = self
            .index
            .current()
            .ok_or_else(|| FrontdeskError::initialization("no knowledge index installed"))?;
        self.scorer.score_breakdown(&index, utterance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::KnowledgeEntry;
    use crate::matcher::MatchErrorKind;
    use serde_json::json;

    fn desk() -> FrontDesk {
        let desk = FrontDesk::new(&DeskConfig::default()).unwrap();
        desk.load_snapshot(&json!([
            {"id": 1, "question": "What are your hours?", "answer": "9am to 7pm"},
            {"id": 2, "question": "Do you take walk-ins?", "answer": "Yes, when a chair is free"},
        ]))
        .unwrap();
        desk
    }

    #[test]
    fn test_closing_short_circuits() {
        let desk = desk();

        assert_eq!(desk.decide("that's it, thanks"), TurnDecision::Closing);
        assert!(desk.decide("bye").is_closing());
    }

    #[test]
    fn test_lookup() {
        let desk = desk();

        let decision = desk.decide("do you take walk ins");
        let result = decision.lookup().unwrap();
        assert!(result.found);
        assert_eq!(result.matched_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_not_initialized() {
        let desk = FrontDesk::new(&DeskConfig::default()).unwrap();

        let decision = desk.decide("what are your hours");
        assert_eq!(
            decision.lookup().unwrap().error_kind,
            Some(MatchErrorKind::NotInitialized)
        );
        assert!(desk.explain("what are your hours").is_err());
        // Closing does not need an index.
        assert!(desk.decide("goodbye").is_closing());
    }

    #[test]
    fn test_install_replaces_index() {
        let desk = desk();
        let held = desk.index().unwrap();

        let replacement = desk
            .builder()
            .build_from_entries(vec![KnowledgeEntry::new("Is there parking?", "Behind the shop")])
            .unwrap();
        desk.install_index(replacement);

        assert_eq!(held.len(), 2);
        assert_eq!(desk.index().unwrap().len(), 1);
    }

    #[test]
    fn test_batch_keeps_order() {
        let desk = desk();
        let utterances = ["bye", "what are your hours", "do you take walk ins"];

        let decisions = desk.decide_batch(&utterances);
        assert_eq!(decisions.len(), 3);
        assert!(decisions[0].is_closing());
        assert_eq!(
            decisions[1].lookup().unwrap().matched_id.as_deref(),
            Some("1")
        );
        assert_eq!(decisions, utterances.iter().map(|u| desk.decide(u)).collect::<Vec<_>>());
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_value(TurnDecision::Closing).unwrap();
        assert_eq!(json, json!({"decision": "closing"}));

        let json = serde_json::to_value(desk().decide("what are your hours")).unwrap();
        assert_eq!(json["decision"], "lookup");
        assert_eq!(json["found"], true);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = DeskConfig::default();
        config.matcher.weights.cosine = 2.0;

        assert!(matches!(
            FrontDesk::new(&config),
            Err(FrontdeskError::Config(_))
        ));
    }

    #[test]
    fn test_desk_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FrontDesk>();
    }
}
