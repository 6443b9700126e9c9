//! Text normalization shared by the closing classifier and the matcher.
//!
//! [`TextNormalizer`] owns two pipelines:
//!
//! ```text
//! match:   PatternReplace([^\w\s]) → Whitespace → Lowercase
//!            └─ keywords: → Stop → MinLength(3) → Porter
//! phrase:  Mapping(’ → ') → PatternReplace([^\w\s']) → Whitespace → Lowercase
//! ```
//!
//! The match pipeline yields the normalized text and tokens used for tf-idf
//! and string similarity, plus the stemmed keyword set. The phrase pipeline
//! keeps apostrophes so closure phrases such as `"that's it"` survive.
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! let normalized = normalizer.normalize("  What are your HOURS?! ").unwrap();
//!
//! assert_eq!(normalized.text, "what are your hours");
//! assert_eq!(normalized.tokens, vec!["what", "are", "your", "hours"]);
//! assert!(normalized.keywords.contains("hour"));
//! assert_eq!(normalized.keywords.len(), 1);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{MappingCharFilter, PatternReplaceCharFilter};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{
    Filter, LowercaseFilter, MinLengthFilter, PorterStemmer, StemFilter, Stemmer, StopFilter,
};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Keywords shorter than this many characters are dropped.
const MIN_KEYWORD_CHARS: usize = 3;

/// The normalized form of one piece of text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    /// Lowercased text with punctuation removed and whitespace collapsed.
    pub text: String,
    /// Whitespace tokens of `text`.
    pub tokens: Vec<String>,
    /// Stemmed content words.
    pub keywords: BTreeSet<String>,
}

impl NormalizedText {
    /// Check if nothing survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Lowercasing, punctuation-stripping normalizer with keyword extraction.
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: PipelineAnalyzer,
    keyword_filters: Vec<Arc<dyn Filter>>,
    phrase_analyzer: PipelineAnalyzer,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer)
            .field(
                "keyword_filters",
                &self
                    .keyword_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field("phrase_analyzer", &self.phrase_analyzer)
            .finish()
    }
}

impl TextNormalizer {
    /// Create a normalizer with the default stop words and Porter stemmer.
    pub fn new() -> Result<Self> {
        Self::with_stemmer(Arc::new(PorterStemmer::new()))
    }

    /// Create a normalizer that stems keywords with `stemmer`.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"[^\w\s]", " ")?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("match");

        let keyword_filters: Vec<Arc<dyn Filter>> = vec![
            Arc::new(StopFilter::new()),
            Arc::new(MinLengthFilter::new(MIN_KEYWORD_CHARS)),
            Arc::new(StemFilter::with_stemmer(stemmer)),
        ];

        let phrase_analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(MappingCharFilter::typographic_quotes()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"[^\w\s']", " ")?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("phrase");

        Ok(TextNormalizer {
            analyzer,
            keyword_filters,
            phrase_analyzer,
        })
    }

    /// Normalize `text` into its text, tokens and keyword set.
    pub fn normalize(&self, text: &str) -> Result<NormalizedText> {
        let tokens: Vec<Token> = self.analyzer.analyze(text)?.collect();

        let mut stream: TokenStream = Box::new(tokens.clone().into_iter());
        for filter in &self.keyword_filters {
            stream = filter.filter(stream)?;
        }
        let keywords = stream
            .filter(|token| !token.is_empty())
            .map(|token| token.text)
            .collect();

        let tokens: Vec<String> = tokens.into_iter().map(|token| token.text).collect();
        Ok(NormalizedText {
            text: tokens.join(" "),
            tokens,
            keywords,
        })
    }

    /// Normalize `text` for phrase matching: apostrophes are kept and
    /// typographic apostrophes are folded to `'`.
    pub fn normalize_phrase(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .phrase_analyzer
            .analyze(text)?
            .map(|token| token.text)
            .collect())
    }
}
