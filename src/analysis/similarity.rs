//! Character-level string similarity.
//!
//! The matcher blends a lexical string similarity into its score so that
//! near-identical phrasings ("whats your hours" vs "what are your hours")
//! still score well when the tf-idf vectors barely overlap.

use ahash::AHashMap;

/// Trait for string similarity measures returning a value in `[0, 1]`.
pub trait StringSimilarity: Send + Sync {
    /// Compare two strings.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Get the name of this measure.
    fn name(&self) -> &'static str;
}

/// Sørensen–Dice coefficient over character bigrams.
///
/// Whitespace is removed before comparison. Identical strings score `1.0`;
/// otherwise a string shorter than two characters scores `0.0`. Bigrams are
/// counted as a multiset, so repeated pairs only match as often as they
/// occur on both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceCoefficient;

impl DiceCoefficient {
    pub fn new() -> Self {
        DiceCoefficient
    }

    fn compact(text: &str) -> Vec<char> {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl StringSimilarity for DiceCoefficient {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let first = Self::compact(a);
        let second = Self::compact(b);

        if first == second {
            return 1.0;
        }
        if first.len() < 2 || second.len() < 2 {
            return 0.0;
        }

        let mut bigrams: AHashMap<(char, char), usize> = AHashMap::new();
        for pair in first.windows(2) {
            *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
        }

        let mut intersection = 0usize;
        for pair in second.windows(2) {
            if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
                if *count > 0 {
                    *count -= 1;
                    intersection += 1;
                }
            }
        }

        (2 * intersection) as f64 / (first.len() + second.len() - 2) as f64
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}
