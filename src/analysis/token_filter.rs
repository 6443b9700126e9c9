//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. The keyword
//! pipeline chains them like this:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Min Length → Porter Stemmer → keywords
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`length::MinLengthFilter`] - Drops tokens shorter than a minimum
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::token_filter::Filter;
//! use frontdesk::analysis::token_filter::lowercase::LowercaseFilter;
//! use frontdesk::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing
/// them to rewrite or drop tokens. The trait requires `Send + Sync`
/// because analyzers are shared across concurrent turns.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod lowercase;
pub mod stem;
pub mod stop;

pub use length::MinLengthFilter;
pub use lowercase::LowercaseFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
