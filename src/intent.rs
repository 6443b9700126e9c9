//! Turn intent classification.
//!
//! The [`ClosingIntentClassifier`] decides whether a caller is ending the
//! conversation. It only looks at the current utterance.

pub mod classifier;
pub mod closing;
pub mod markers;
pub mod rules;
pub mod signals;

pub use classifier::{IntentClassifier, TurnIntent};
pub use closing::ClosingIntentClassifier;
pub use signals::ClosingSignals;
