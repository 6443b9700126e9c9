//! # frontdesk
//!
//! Per-turn decision engine for a voice front desk.
//!
//! Each caller utterance is classified into one of three outcomes:
//!
//! - the caller is ending the conversation (closing intent),
//! - the question matches an answer in a small knowledge base,
//! - the question is unknown and must be escalated to a human.
//!
//! ## Features
//!
//! - Shared normalization pipeline (char filters, tokenizer, stop words,
//!   Porter stemming)
//! - Immutable tf-idf corpus index with a corpus-dependent threshold
//! - Rule-based closing classifier with AFINN sentiment
//! - Blended cosine / Dice / keyword-overlap matching
//! - Turn replies and escalation records for the voice session
//!
//! ## Example
//!
//! ```
//! use frontdesk::prelude::*;
//! use serde_json::json;
//!
//! let desk = FrontDesk::new(&DeskConfig::default()).unwrap();
//! desk.load_snapshot(&json!([
//!     {"id": 1, "question": "What are your hours?", "answer": "9am to 7pm"},
//! ]))
//! .unwrap();
//!
//! assert!(desk.decide("thanks, bye!").is_closing());
//! assert!(desk.decide("when are you open").lookup().unwrap().found);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod desk;
pub mod error;
pub mod intent;
pub mod logging;
pub mod matcher;
pub mod turn;

pub mod prelude {
    pub use crate::analysis::{NormalizedText, TextNormalizer};
    pub use crate::config::DeskConfig;
    pub use crate::corpus::{CorpusIndex, IndexBuilder, KnowledgeEntry};
    pub use crate::desk::{FrontDesk, TurnDecision};
    pub use crate::error::{FrontdeskError, Result};
    pub use crate::intent::{ClosingIntentClassifier, IntentClassifier, TurnIntent};
    pub use crate::matcher::{MatchErrorKind, MatchResult, SimilarityScorer};
    pub use crate::turn::{EscalationSink, PendingRequest, TurnHandler, TurnReply};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
