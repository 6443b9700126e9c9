use frontdesk::config::MatcherConfig;
use frontdesk::corpus::{IndexBuilder, KnowledgeEntry};
use frontdesk::error::{FrontdeskError, Result};
use serde_json::json;

#[test]
fn non_array_snapshots_are_rejected() -> Result<()> {
    let builder = IndexBuilder::new()?;

    for snapshot in [
        json!({"question": "What are your hours?", "answer": "9-5"}),
        json!("What are your hours?"),
        json!(42),
        json!(null),
    ] {
        let err = builder.build(&snapshot).unwrap_err();
        assert!(matches!(err, FrontdeskError::Initialization(_)), "{err}");
    }
    Ok(())
}

#[test]
fn malformed_entries_are_skipped() -> Result<()> {
    let builder = IndexBuilder::new()?;

    let index = builder.build(&json!([
        {"id": 1, "question": "What are your hours?", "answer": "9am-5pm"},
        {"id": 2, "question": "   ", "answer": "blank question"},
        {"id": 3, "question": "Blank answer?", "answer": ""},
        {"id": 4, "answer": "missing question"},
        "not an object",
        {"id": 5, "question": 17, "answer": "wrong type"},
        {"question": "Do you take cards?", "answer": "Yes"},
    ]))?;

    assert_eq!(index.len(), 2);
    assert_eq!(index.stats().valid_entries, 2);
    assert_eq!(index.stats().skipped_entries, 5);

    let ids: Vec<&str> = index.entries().iter().map(|e| e.id.as_str()).collect();
    // Entries without an id fall back to their position in the snapshot.
    assert_eq!(ids, vec!["1", "6"]);
    Ok(())
}

#[test]
fn threshold_follows_corpus_shape() -> Result<()> {
    let builder = IndexBuilder::new()?;

    let small = builder.build_from_entries(vec![KnowledgeEntry::new(
        "What are your hours?",
        "9am-5pm",
    )])?;
    assert!((small.threshold() - 0.30).abs() < 1e-9);

    let large: Vec<KnowledgeEntry> = (0..12)
        .map(|i| KnowledgeEntry::new(format!("Question number {i}?"), "answer"))
        .collect();
    let large = builder.build_from_entries(large)?;
    assert!((large.threshold() - 0.35).abs() < 1e-9);

    let verbose: Vec<KnowledgeEntry> = (0..12)
        .map(|i| {
            KnowledgeEntry::new(
                format!(
                    "Could you please tell me whether question number {i} is something \
                     your team can help me with when I come in next week?"
                ),
                "answer",
            )
        })
        .collect();
    let verbose = builder.build_from_entries(verbose)?;
    assert!(verbose.stats().average_question_chars > 80.0);
    assert!((verbose.threshold() - 0.27).abs() < 1e-9);
    Ok(())
}

#[test]
fn threshold_is_clamped_to_floor() -> Result<()> {
    let config = MatcherConfig {
        base_threshold: 0.2,
        ..MatcherConfig::default()
    };
    let builder = IndexBuilder::with_normalizer(
        std::sync::Arc::new(frontdesk::analysis::TextNormalizer::new()?),
        config,
    );

    let index = builder.build(&json!([]))?;

    assert!(index.is_empty());
    assert_eq!(index.stats().average_question_chars, 0.0);
    assert!((index.threshold() - 0.15).abs() < 1e-9);
    Ok(())
}

#[test]
fn knowledge_base_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("kb.json");
    std::fs::write(
        &path,
        r#"[{"id": "hours", "question": "What are your hours?", "answer": "9am-5pm"}]"#,
    )?;

    let index = IndexBuilder::new()?.build_from_path(&path)?;
    assert_eq!(index.entries()[0].id, "hours");
    assert!(index.entries()[0].keywords.contains("hour"));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "[{")?;
    let err = IndexBuilder::new()?.build_from_path(&broken).unwrap_err();
    assert!(matches!(err, FrontdeskError::Initialization(_)));
    Ok(())
}
