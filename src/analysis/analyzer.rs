//! Analyzer trait and implementations.
//!
//! Analyzers combine char filters, a tokenizer and token filters into the
//! complete processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use frontdesk::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use frontdesk::analysis::token_filter::lowercase::LowercaseFilter;
//! use frontdesk::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()));
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can serve every
/// concurrent turn handled by a worker.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}

mod pipeline;

pub use pipeline::PipelineAnalyzer;
