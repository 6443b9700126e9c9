//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it reaches the tokenizer.
//! The normalizer uses them to strip punctuation and to fold typographic
//! apostrophes into ASCII ones, so that `"That’s it!"` and `"that's it"`
//! analyze to the same tokens.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`mapping::MappingCharFilter`] - Character-to-character mapping
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::char_filter::CharFilter;
//! use frontdesk::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[^\w\s]", " ").unwrap();
//! assert_eq!(filter.filter("hours?"), "hours ");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
pub mod pattern_replace;

pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
