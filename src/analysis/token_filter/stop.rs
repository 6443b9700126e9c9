//! Stop filter implementation.
//!
//! Removes function words that carry no topical signal before keyword
//! extraction. The default list covers articles, prepositions, pronouns,
//! auxiliary verbs, quantifiers and the question words customers open most
//! questions with.
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::token_filter::Filter;
//! use frontdesk::analysis::token_filter::stop::StopFilter;
//! use frontdesk::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("what", 0),
//!     Token::new("are", 1),
//!     Token::new("your", 2),
//!     Token::new("hours", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "hours");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words used for keyword extraction.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    // articles and conjunctions
    "a", "an", "the", "and", "or", "but", "if", "nor",
    // prepositions
    "in", "on", "at", "for", "by", "to", "from", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "of", "off", "over", "under", "up",
    "down", "out",
    // pronouns and determiners
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "this", "that",
    "these", "those", "who", "whom", "whose", "which", "what",
    // auxiliary and modal verbs
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    // quantifiers
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "not",
    "only", "own", "same", "so", "than", "too", "very", "much", "many",
    // question words and adverbs
    "how", "when", "where", "why", "then", "once", "here", "there", "again", "further", "now",
    "just",
    // contraction fragments left behind by punctuation stripping
    "s", "t", "don", "ll", "re", "ve", "m", "d",
];

/// Removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a filter with the default English list.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a filter from an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
