//! Closing-intent classifier.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::sentiment::{AfinnSentiment, SentimentScorer};
use crate::config::ClosingConfig;
use crate::error::Result;
use crate::intent::classifier::{IntentClassifier, TurnIntent};
use crate::intent::markers::{CLOSURE_PHRASES, PhraseText};
use crate::intent::rules::{any_rule_matches, matching_rules};
use crate::intent::signals::ClosingSignals;

/// Decides whether an utterance ends the conversation.
///
/// A closure phrase ("that's it", "no thanks", ...) decides immediately.
/// Otherwise lexical signals are extracted and the utterance is closing if
/// any of the closing rules holds.
///
/// # Examples
///
/// ```
/// use frontdesk::intent::ClosingIntentClassifier;
///
/// let classifier = ClosingIntentClassifier::new().unwrap();
///
/// assert!(classifier.is_closing("Thats it!"));
/// assert!(classifier.is_closing("ok bye"));
/// assert!(!classifier.is_closing("What are your hours?"));
/// ```
pub struct ClosingIntentClassifier {
    normalizer: Arc<TextNormalizer>,
    sentiment: Arc<dyn SentimentScorer>,
    config: ClosingConfig,
}

impl std::fmt::Debug for ClosingIntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosingIntentClassifier")
            .field("sentiment", &self.sentiment.name())
            .field("config", &self.config)
            .finish()
    }
}

impl ClosingIntentClassifier {
    /// Create a classifier with its own normalizer and the AFINN lexicon.
    pub fn new() -> Result<Self> {
        Ok(Self::with_components(
            Arc::new(TextNormalizer::new()?),
            Arc::new(AfinnSentiment::new()),
            ClosingConfig::default(),
        ))
    }

    /// Create a classifier from explicit components.
    pub fn with_components(
        normalizer: Arc<TextNormalizer>,
        sentiment: Arc<dyn SentimentScorer>,
        config: ClosingConfig,
    ) -> Self {
        ClosingIntentClassifier {
            normalizer,
            sentiment,
            config,
        }
    }

    /// Check if the utterance ends the conversation.
    pub fn is_closing(&self, utterance: &str) -> bool {
        match self.classify(utterance) {
            Ok(closing) => closing,
            Err(e) => {
                warn!(error = %e, "closing check failed, treating utterance as a question");
                false
            }
        }
    }

    /// The closure phrase found in the utterance, if any.
    pub fn closure_phrase(&self, utterance: &str) -> Result<Option<&'static str>> {
        let tokens = self.normalizer.normalize_phrase(utterance)?;
        Ok(PhraseText::new(&tokens).find_any(CLOSURE_PHRASES))
    }

    /// Extract the signals the closing rules are evaluated over.
    pub fn signals(&self, utterance: &str) -> Result<ClosingSignals> {
        let tokens = self.normalizer.normalize_phrase(utterance)?;
        Ok(self.signals_from_tokens(utterance, &tokens))
    }

    /// Names of the closing rules that hold for the utterance.
    pub fn matched_rules(&self, utterance: &str) -> Result<Vec<&'static str>> {
        Ok(matching_rules(&self.signals(utterance)?))
    }

    fn signals_from_tokens(&self, utterance: &str, tokens: &[String]) -> ClosingSignals {
        ClosingSignals::extract(
            utterance,
            tokens,
            self.sentiment.as_ref(),
            self.config.short_utterance_max_tokens,
        )
    }

    fn classify(&self, utterance: &str) -> Result<bool> {
        let tokens = self.normalizer.normalize_phrase(utterance)?;

        if let Some(phrase) = PhraseText::new(&tokens).find_any(CLOSURE_PHRASES) {
            debug!(phrase, "closure phrase");
            return Ok(true);
        }

        let signals = self.signals_from_tokens(utterance, &tokens);
        let closing = any_rule_matches(&signals);
        if closing {
            debug!(rules = ?matching_rules(&signals), "closing rules matched");
        }
        Ok(closing)
    }
}

impl IntentClassifier for ClosingIntentClassifier {
    fn predict(&self, utterance: &str) -> Result<TurnIntent> {
        if self.classify(utterance)? {
            Ok(TurnIntent::Closing)
        } else {
            Ok(TurnIntent::Question)
        }
    }

    fn name(&self) -> &str {
        "closing"
    }
}
