use ahash::AHashMap;

use super::CharFilter;

/// A char filter that replaces individual characters through a lookup table.
#[derive(Clone, Debug, Default)]
pub struct MappingCharFilter {
    mapping: AHashMap<char, char>,
}

impl MappingCharFilter {
    /// Create a mapping filter from `(from, to)` pairs.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        Self {
            mapping: pairs.into_iter().collect(),
        }
    }

    /// Fold typographic apostrophes and quotes into their ASCII forms.
    pub fn typographic_quotes() -> Self {
        Self::new([
            ('\u{2018}', '\''),
            ('\u{2019}', '\''),
            ('\u{02BC}', '\''),
            ('\u{201C}', '"'),
            ('\u{201D}', '"'),
        ])
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| self.mapping.get(&c).copied().unwrap_or(c))
            .collect()
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
