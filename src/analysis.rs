//! Text analysis for the front desk.
//!
//! This module provides the building blocks shared by the closing-intent
//! classifier and the knowledge-base matcher: char filters, tokenizers,
//! token filters and the pipelines that chain them, plus the sentiment and
//! string-similarity capabilities.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod sentiment;
pub mod similarity;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::{NormalizedText, TextNormalizer};
pub use sentiment::{AfinnSentiment, SentimentScorer};
pub use similarity::{DiceCoefficient, StringSimilarity};
pub use token::{Token, TokenStream};
