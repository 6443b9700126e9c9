//! Fuzzy knowledge-base matching.

pub mod query;
pub mod result;
pub mod scorer;

pub use query::Query;
pub use result::{MatchErrorKind, MatchResult};
pub use scorer::{ScoreBreakdown, SimilarityScorer, keyword_overlap};
