//! The outcome of matching one utterance against the corpus.

use serde::{Deserialize, Serialize};

use crate::corpus::IndexedEntry;

/// Why a match could not be attempted or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchErrorKind {
    /// No index has been installed yet.
    NotInitialized,
    /// Scoring failed for this utterance.
    ComputationError,
}

impl std::fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchErrorKind::NotInitialized => write!(f, "not_initialized"),
            MatchErrorKind::ComputationError => write!(f, "computation_error"),
        }
    }
}

/// Result of a knowledge-base lookup.
///
/// `confidence` is the best combined score seen, reported whether or not it
/// cleared the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<MatchErrorKind>,
}

impl MatchResult {
    /// A match above the threshold.
    pub fn matched(entry: &IndexedEntry, confidence: f64) -> Self {
        MatchResult {
            found: true,
            answer: Some(entry.answer.clone()),
            confidence,
            matched_question: Some(entry.question.clone()),
            matched_id: Some(entry.id.clone()),
            error_kind: None,
        }
    }

    /// No entry cleared the threshold.
    pub fn not_found(confidence: f64) -> Self {
        MatchResult {
            found: false,
            answer: None,
            confidence,
            matched_question: None,
            matched_id: None,
            error_kind: None,
        }
    }

    /// The lookup could not be performed.
    pub fn failed(error_kind: MatchErrorKind) -> Self {
        MatchResult {
            error_kind: Some(error_kind),
            ..Self::not_found(0.0)
        }
    }

    /// Check if the lookup failed.
    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }
}
