//! Minimum-length filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum number of characters.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_chars: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens with at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter { min_chars }
    }

    /// Get the minimum length.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        Ok(Box::new(tokens.filter(move |token| token.char_len() >= min_chars)))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::new(3);
        let tokens = vec![
            Token::new("do", 0),
            Token::new("you", 1),
            Token::new("x", 2),
            Token::new("open", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "you");
        assert_eq!(result[1].text, "open");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::new(3).name(), "min_length");
    }
}
