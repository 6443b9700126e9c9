//! Intent classifier trait definition.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the caller is doing with one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnIntent {
    /// The caller is ending the conversation.
    Closing,
    /// Anything else; treated as a question for the knowledge base.
    Question,
}

/// Intent classifier trait.
///
/// Implementations of this trait decide what a single utterance is meant to
/// do, without any dialogue state.
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent for a given utterance.
    fn predict(&self, utterance: &str) -> Result<TurnIntent>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
