//! Case folding.
//!
//! Every later comparison (stop words, keyword overlap, tf-idf terms,
//! bigrams) assumes lowercase text.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases each token with full Unicode case mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| token.map_text(str::to_lowercase))))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercases_unicode() {
        let tokens = vec![Token::new("HAIRCUT", 0), Token::new("ÉCLAIR", 1)];

        let result: Vec<String> = LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|token| token.text)
            .collect();

        assert_eq!(result, vec!["haircut", "éclair"]);
    }
}
