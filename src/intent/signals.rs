//! Features the closing rules are evaluated over.

use serde::Serialize;

use crate::analysis::sentiment::SentimentScorer;
use crate::intent::markers::{
    COMPLETE_MARKERS, FAREWELL_MARKERS, NEGATIVE_MARKERS, PhraseText, THANKS_MARKERS,
};

/// Lexical signals extracted from one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClosingSignals {
    pub has_farewell: bool,
    pub has_thanks: bool,
    pub has_negative: bool,
    pub has_complete: bool,
    /// At most the configured number of words.
    pub is_short: bool,
    /// No question mark in the raw utterance.
    pub is_statement: bool,
    /// Sum of word valences.
    pub sentiment: i32,
}

impl ClosingSignals {
    /// Extract signals from the raw utterance and its phrase-normalized tokens.
    pub fn extract(
        raw: &str,
        tokens: &[String],
        sentiment: &dyn SentimentScorer,
        short_utterance_max_tokens: usize,
    ) -> Self {
        let text = PhraseText::new(tokens);
        let words: Vec<&str> = tokens.iter().map(String::as_str).collect();

        ClosingSignals {
            has_farewell: text.contains_any(FAREWELL_MARKERS),
            has_thanks: text.contains_any(THANKS_MARKERS),
            has_negative: text.contains_any(NEGATIVE_MARKERS),
            has_complete: text.contains_any(COMPLETE_MARKERS),
            is_short: tokens.len() <= short_utterance_max_tokens,
            is_statement: !raw.contains('?'),
            sentiment: sentiment.score(&words),
        }
    }
}
