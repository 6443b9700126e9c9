//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline after char
//! filtering: they split already-normalized text into [`Token`]s.
//!
//! [`Token`]: crate::analysis::token::Token
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("what are your hours").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that a tokenizer owned by a shared
/// normalizer can be used from concurrent turns.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
