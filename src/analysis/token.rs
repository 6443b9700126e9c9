//! Tokens flowing through the normalization pipeline.
//!
//! The whitespace tokenizer emits them in word order, filters rewrite or drop
//! them, and the normalizer keeps only their text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One word of an utterance or question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Index of the word in the tokenizer output.
    pub position: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Length of the word in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Keep the position, swap the text.
    pub fn map_text<F: FnOnce(&str) -> String>(mut self, f: F) -> Self {
        self.text = f(&self.text);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazily evaluated sequence of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters() {
        let token = Token::new("café", 0);
        assert_eq!(token.char_len(), 4);
        assert_eq!(token.text.len(), 5);
    }

    #[test]
    fn test_map_text_keeps_position() {
        let token = Token::new("Prices", 2).map_text(str::to_lowercase);

        assert_eq!(token.text, "prices");
        assert_eq!(token.position, 2);
        assert_eq!(token.to_string(), "prices");
    }
}
