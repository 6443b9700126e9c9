//! Porter stemming algorithm implementation.
//!
//! The stemmer applies the classic rewrite steps:
//! 1. Plurals, -ed/-ing suffixes and terminal y
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Words containing non-ASCII characters are only lowercased; the rules are
//! defined over the English alphabet.
//!
//! # Examples
//!
//! ```
//! use frontdesk::analysis::token_filter::stem::Stemmer;
//! use frontdesk::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("pricing"), "price");
//! assert_eq!(stemmer.stem("prices"), "price");
//! assert_eq!(stemmer.stem("appointments"), "appoint");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` is a vowel. `y` is a vowel after a consonant.
    fn is_vowel(word: &[u8], pos: usize) -> bool {
        match word.get(pos) {
            Some(b'a' | b'e' | b'i' | b'o' | b'u') => true,
            Some(b'y') if pos > 0 => !Self::is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &str) -> usize {
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut m = 0;
        let mut i = 0;

        // Skip initial consonants
        while i < n && !Self::is_vowel(bytes, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(bytes, i) {
                i += 1;
            }

            if i >= n {
                break;
            }

            m += 1;

            while i < n && !Self::is_vowel(bytes, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &str) -> bool {
        let bytes = word.as_bytes();
        (0..bytes.len()).any(|i| Self::is_vowel(bytes, i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && !Self::is_vowel(bytes, len - 1)
    }

    /// Check if word ends with consonant-vowel-consonant, the last not w, x or y.
    fn ends_cvc(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        if len < 3 {
            return false;
        }

        !Self::is_vowel(bytes, len - 3)
            && Self::is_vowel(bytes, len - 2)
            && !Self::is_vowel(bytes, len - 1)
            && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
    }

    fn strip_suffix<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
        word.strip_suffix(suffix)
    }

    /// Replace `old_suffix` with `new_suffix` when the remaining stem has
    /// measure at least `min_measure`.
    fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
        match Self::strip_suffix(word, old_suffix) {
            Some(stem) if Self::measure(stem) >= min_measure => format!("{stem}{new_suffix}"),
            _ => word.to_string(),
        }
    }

    fn step1a(word: &str) -> String {
        if let Some(stem) = Self::strip_suffix(word, "sses") {
            format!("{stem}ss")
        } else if let Some(stem) = Self::strip_suffix(word, "ies") {
            format!("{stem}i")
        } else if word.ends_with("ss") {
            word.to_string()
        } else if let Some(stem) = Self::strip_suffix(word, "s") {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(word: &str) -> String {
        if word.ends_with("eed") {
            return Self::replace_suffix(word, "eed", "ee", 1);
        }

        let stripped = ["ed", "ing"].iter().find_map(|suffix| {
            Self::strip_suffix(word, suffix).filter(|stem| Self::contains_vowel(stem))
        });

        match stripped {
            Some(stem) => Self::step1b_cleanup(stem),
            None => word.to_string(),
        }
    }

    /// Restore an `e` or undouble a consonant after removing -ed/-ing.
    fn step1b_cleanup(stem: &str) -> String {
        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if Self::ends_with_double_consonant(stem)
            && !stem.ends_with('l')
            && !stem.ends_with('s')
            && !stem.ends_with('z')
        {
            stem[..stem.len() - 1].to_string()
        } else if Self::measure(stem) == 1 && Self::ends_cvc(stem) {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    fn step1c(word: &str) -> String {
        match Self::strip_suffix(word, "y") {
            Some(stem) if Self::contains_vowel(stem) => format!("{stem}i"),
            _ => word.to_string(),
        }
    }

    fn step2(word: &str) -> String {
        const SUFFIXES: &[(&str, &str)] = &[
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];

        Self::apply_first(word, SUFFIXES)
    }

    fn step3(word: &str) -> String {
        const SUFFIXES: &[(&str, &str)] = &[
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];

        Self::apply_first(word, SUFFIXES)
    }

    /// Apply the first rule whose suffix matches, if its stem has measure > 0.
    fn apply_first(word: &str, rules: &[(&str, &str)]) -> String {
        rules
            .iter()
            .find(|(old_suffix, _)| word.ends_with(old_suffix))
            .map(|(old_suffix, new_suffix)| Self::replace_suffix(word, old_suffix, new_suffix, 1))
            .unwrap_or_else(|| word.to_string())
    }

    fn step4(word: &str) -> String {
        const SUFFIXES: &[&str] = &[
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
            "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];

        let Some(suffix) = SUFFIXES.iter().find(|suffix| word.ends_with(*suffix)) else {
            return word.to_string();
        };

        let stem = &word[..word.len() - suffix.len()];
        let ion_ok = *suffix != "ion" || stem.ends_with('s') || stem.ends_with('t');
        if Self::measure(stem) > 1 && ion_ok {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn step5(word: &str) -> String {
        let word = match Self::strip_suffix(word, "e") {
            Some(stem) => {
                let m = Self::measure(stem);
                if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                    stem.to_string()
                } else {
                    word.to_string()
                }
            }
            None => word.to_string(),
        };

        if word.ends_with("ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = Self::step1a(&word);
        let word = Self::step1b(&word);
        let word = Self::step1c(&word);
        let word = Self::step2(&word);
        let word = Self::step3(&word);
        let word = Self::step4(&word);
        Self::step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
