//! Knowledge-base entries as supplied and as indexed.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::corpus::tfidf::TermVector;

/// A question/answer pair from the knowledge-base snapshot.
///
/// The `id` may be a string or a number in the snapshot; numbers are kept
/// in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Identifier assigned by the owner of the knowledge base.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    /// The question as stored.
    pub question: String,
    /// The answer spoken back when the question matches.
    pub answer: String,
}

impl KnowledgeEntry {
    /// Create a new entry.
    pub fn new<Q: Into<String>, A: Into<String>>(question: Q, answer: A) -> Self {
        KnowledgeEntry {
            id: None,
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Set the identifier.
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Reason the entry cannot be indexed, if any.
    pub(crate) fn defect(&self) -> Option<&'static str> {
        if self.question.trim().is_empty() {
            Some("missing question")
        } else if self.answer.trim().is_empty() {
            Some("missing answer")
        } else {
            None
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id)),
        Some(Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "id must be a string or a number, got {other}"
        ))),
    }
}

/// An entry after normalization and tf-idf weighting. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedEntry {
    /// Snapshot id, or the entry's position in the snapshot when absent.
    pub id: String,
    /// The original question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Normalized question text.
    pub normalized_question: String,
    /// Stemmed keywords of the question.
    pub keywords: BTreeSet<String>,
    /// Term weights (raw count × idf).
    pub term_vector: TermVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_may_be_string_or_number() {
        let entry: KnowledgeEntry =
            serde_json::from_str(r#"{"id": 42, "question": "q", "answer": "a"}"#).unwrap();
        assert_eq!(entry.id.as_deref(), Some("42"));

        let entry: KnowledgeEntry =
            serde_json::from_str(r#"{"id": "kb-7", "question": "q", "answer": "a"}"#).unwrap();
        assert_eq!(entry.id.as_deref(), Some("kb-7"));

        let entry: KnowledgeEntry =
            serde_json::from_str(r#"{"question": "q", "answer": "a"}"#).unwrap();
        assert_eq!(entry.id, None);
    }

    #[test]
    fn test_rejects_non_scalar_id_and_missing_fields() {
        assert!(
            serde_json::from_str::<KnowledgeEntry>(r#"{"id": [1], "question": "q", "answer": "a"}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<KnowledgeEntry>(r#"{"question": "q"}"#).is_err());
        assert!(
            serde_json::from_str::<KnowledgeEntry>(r#"{"question": 5, "answer": "a"}"#).is_err()
        );
    }

    #[test]
    fn test_defect() {
        assert_eq!(KnowledgeEntry::new("Hours?", "9 to 5").defect(), None);
        assert_eq!(
            KnowledgeEntry::new("  ", "9 to 5").defect(),
            Some("missing question")
        );
        assert_eq!(KnowledgeEntry::new("Hours?", "").defect(), Some("missing answer"));
    }
}
