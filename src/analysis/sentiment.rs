//! Lexicon-based sentiment scoring.
//!
//! [`SentimentScorer`] is the capability the closing-intent classifier uses
//! to read the polarity of an utterance. The bundled [`AfinnSentiment`]
//! scorer sums integer valences from an AFINN-style word list: the result is
//! negative, zero, or positive, and its magnitude grows with the number of
//! polarized words.
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::sentiment::{AfinnSentiment, SentimentScorer};
//!
//! let scorer = AfinnSentiment::new();
//! assert_eq!(scorer.score(&["great", "thanks"]), 5);
//! assert_eq!(scorer.score(&["terrible", "service"]), -3);
//! ```

use ahash::AHashMap;

/// Trait for sentiment scoring over a token sequence.
pub trait SentimentScorer: Send + Sync {
    /// Score a sequence of lowercased words.
    fn score(&self, tokens: &[&str]) -> i32;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}

/// Word valences, AFINN scale (-5 ..= 5).
const AFINN_LEXICON: &[(&str, i32)] = &[
    // positive
    ("agree", 1),
    ("amazing", 4),
    ("appreciate", 2),
    ("appreciated", 2),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("brilliant", 4),
    ("care", 2),
    ("cheers", 2),
    ("clean", 2),
    ("comfortable", 2),
    ("cool", 1),
    ("delighted", 3),
    ("easy", 1),
    ("enjoy", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fantastic", 4),
    ("fine", 2),
    ("free", 1),
    ("friendly", 2),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("happy", 3),
    ("helpful", 2),
    ("hope", 2),
    ("kind", 2),
    ("like", 2),
    ("love", 3),
    ("lovely", 3),
    ("nice", 3),
    ("outstanding", 5),
    ("perfect", 3),
    ("pleased", 3),
    ("recommend", 2),
    ("relaxed", 2),
    ("satisfied", 2),
    ("super", 3),
    ("superb", 5),
    ("sure", 1),
    ("sweet", 2),
    ("thank", 2),
    ("thankful", 2),
    ("thanks", 2),
    ("thrilled", 5),
    ("welcome", 2),
    ("wonderful", 4),
    ("worth", 2),
    ("yeah", 1),
    ("yes", 1),
    // negative
    ("angry", -3),
    ("annoyed", -2),
    ("annoying", -2),
    ("awful", -3),
    ("bad", -3),
    ("broken", -1),
    ("cancel", -1),
    ("cancelled", -1),
    ("complain", -2),
    ("complaint", -2),
    ("confused", -2),
    ("damn", -2),
    ("difficult", -1),
    ("disappointed", -2),
    ("disappointing", -2),
    ("fail", -2),
    ("failed", -2),
    ("hard", -1),
    ("hate", -3),
    ("horrible", -3),
    ("lost", -3),
    ("miss", -2),
    ("no", -1),
    ("pain", -2),
    ("poor", -2),
    ("problem", -2),
    ("problems", -2),
    ("rude", -2),
    ("sad", -2),
    ("sorry", -1),
    ("stupid", -2),
    ("terrible", -3),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("useless", -2),
    ("waste", -1),
    ("worried", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// AFINN-style sentiment scorer.
#[derive(Clone, Debug)]
pub struct AfinnSentiment {
    lexicon: AHashMap<String, i32>,
}

impl AfinnSentiment {
    /// Create a scorer over the bundled lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(AFINN_LEXICON.iter().map(|&(word, valence)| (word, valence)))
    }

    /// Create a scorer over a custom lexicon.
    pub fn with_lexicon<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            lexicon: entries
                .into_iter()
                .map(|(word, valence)| (word.into(), valence))
                .collect(),
        }
    }

    /// Valence of a single word, ignoring surrounding punctuation.
    pub fn valence(&self, word: &str) -> i32 {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        self.lexicon.get(word).copied().unwrap_or(0)
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl Default for AfinnSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for AfinnSentiment {
    fn score(&self, tokens: &[&str]) -> i32 {
        tokens.iter().map(|token| self.valence(token)).sum()
    }

    fn name(&self) -> &'static str {
        "afinn"
    }
}
