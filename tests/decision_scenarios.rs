use frontdesk::config::{DeskConfig, MatcherConfig};
use frontdesk::corpus::{IndexBuilder, KnowledgeEntry};
use frontdesk::desk::{FrontDesk, TurnDecision};
use frontdesk::error::Result;
use frontdesk::matcher::MatchErrorKind;
use serde_json::json;

fn salon_desk() -> Result<FrontDesk> {
    let desk = FrontDesk::new(&DeskConfig::default())?;
    desk.load_snapshot(&json!([
        {"id": 1, "question": "What are your hours?", "answer": "We are open 9am to 7pm, Monday to Saturday"},
        {"id": 2, "question": "How much is a haircut?", "answer": "A haircut is 45 dollars"},
        {"id": 3, "question": "Do you take walk-ins?", "answer": "Yes, whenever a stylist is free"},
        {"id": 4, "question": "Where are you located?", "answer": "123 Main Street, next to the bakery"},
        {"id": 5, "question": "Do you offer hair coloring?", "answer": "Yes, full color and highlights"},
    ]))?;
    Ok(desk)
}

#[test]
fn hours_scenario_scores_above_small_corpus_threshold() -> Result<()> {
    let desk = FrontDesk::new(&DeskConfig::default())?;
    let index = desk.load_snapshot(&json!([
        {"id": "1", "question": "What are your hours?", "answer": "9am-5pm"}
    ]))?;

    // One entry triggers the small-corpus reduction.
    assert!((index.threshold() - 0.30).abs() < 1e-9);

    // cosine 0.5 (only "are" is shared), dice 12/28, no shared keywords.
    let breakdown = desk.explain("when are you open")?;
    let expected = 0.40 * 0.5 + 0.35 * (12.0 / 28.0) + 0.25 * 0.0;
    assert!((breakdown[0].combined - expected).abs() < 1e-9);
    assert!((breakdown[0].combined - 0.35).abs() < 1e-9);

    let decision = desk.decide("when are you open");
    let result = decision.lookup().expect("lookup decision");
    assert_eq!(result.found, breakdown[0].combined > 0.30);
    assert!(result.found);
    assert_eq!(result.answer.as_deref(), Some("9am-5pm"));
    assert_eq!(result.matched_question.as_deref(), Some("What are your hours?"));
    Ok(())
}

#[test]
fn paraphrases_find_their_answers() -> Result<()> {
    let desk = salon_desk()?;

    for (utterance, id) in [
        ("what are your hours today", "1"),
        ("how much is a haircut", "2"),
        ("do you take walk ins", "3"),
        ("where are you located exactly", "4"),
        ("do you offer coloring", "5"),
    ] {
        let decision = desk.decide(utterance);
        let result = decision.lookup().expect("lookup decision");
        assert!(result.found, "{utterance}: {result:?}");
        assert_eq!(result.matched_id.as_deref(), Some(id), "{utterance}");
    }
    Ok(())
}

#[test]
fn closing_short_circuits_lookup() -> Result<()> {
    let desk = salon_desk()?;

    assert_eq!(desk.decide("No thanks"), TurnDecision::Closing);
    assert_eq!(desk.decide("That's all, thank you!"), TurnDecision::Closing);
    assert_eq!(desk.decide("bye"), TurnDecision::Closing);
    Ok(())
}

#[test]
fn empty_corpus_never_matches() -> Result<()> {
    let desk = FrontDesk::new(&DeskConfig::default())?;
    desk.load_snapshot(&json!([]))?;

    for utterance in ["what are your hours", "haircut price", ""] {
        let decision = desk.decide(utterance);
        let result = decision.lookup().expect("lookup decision");
        assert!(!result.found);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.error_kind, None);
    }
    Ok(())
}

#[test]
fn lookup_before_build_reports_not_initialized() -> Result<()> {
    let desk = FrontDesk::new(&DeskConfig::default())?;

    let decision = desk.decide("what are your hours");
    let result = decision.lookup().expect("lookup decision");
    assert!(!result.found);
    assert_eq!(result.error_kind, Some(MatchErrorKind::NotInitialized));
    Ok(())
}

#[test]
fn unrelated_query_reports_low_confidence() -> Result<()> {
    let desk = FrontDesk::new(&DeskConfig::default())?;
    desk.load_snapshot(&json!([
        {"id": 1, "question": "What are your hours?", "answer": "9am-5pm"}
    ]))?;

    // Only the "ar" bigram is shared with "whatareyourhours".
    let decision = desk.decide("parking");
    let result = decision.lookup().expect("lookup decision");
    assert!(!result.found);
    assert!((result.confidence - 0.35 * 2.0 / 21.0).abs() < 1e-9);

    let decision = desk.decide("zzz");
    let result = decision.lookup().expect("lookup decision");
    assert!(!result.found);
    assert_eq!(result.confidence, 0.0);
    Ok(())
}

#[test]
fn decisions_are_deterministic() -> Result<()> {
    let desk = salon_desk()?;
    let utterances = [
        "what time do you open on saturday",
        "is parking free",
        "how much for a haircut and color",
        "thanks that's everything",
    ];

    let first: Vec<TurnDecision> = utterances.iter().map(|u| desk.decide(u)).collect();
    for _ in 0..3 {
        let again: Vec<TurnDecision> = utterances.iter().map(|u| desk.decide(u)).collect();
        assert_eq!(first, again);
    }
    assert_eq!(first, desk.decide_batch(&utterances[..]));
    Ok(())
}

#[test]
fn raising_the_threshold_never_creates_matches() -> Result<()> {
    let entries = vec![
        KnowledgeEntry::new("What are your hours?", "9am-5pm"),
        KnowledgeEntry::new("How much is a haircut?", "45 dollars"),
        KnowledgeEntry::new("Do you take walk-ins?", "Yes"),
    ];
    let queries = [
        "when are you open",
        "haircut price",
        "walk in",
        "is there parking",
        "what are your hours",
    ];

    let mut previous: Option<Vec<bool>> = None;
    for base_threshold in [0.2, 0.35, 0.5, 0.7, 0.9] {
        let config = MatcherConfig {
            base_threshold,
            min_threshold: 0.1,
            ..MatcherConfig::default()
        };
        let mut desk_config = DeskConfig::default();
        desk_config.matcher = config;
        let desk = FrontDesk::new(&desk_config)?;
        desk.install_index(desk.builder().build_from_entries(entries.clone())?);

        let found: Vec<bool> = queries
            .iter()
            .map(|q| desk.decide(q).lookup().is_some_and(|r| r.found))
            .collect();

        if let Some(previous) = &previous {
            for (was, now) in previous.iter().zip(&found) {
                assert!(*was || !*now, "a higher threshold produced a new match");
            }
        }
        previous = Some(found);
    }
    Ok(())
}

#[test]
fn shared_builder_and_desk_agree() -> Result<()> {
    let builder = IndexBuilder::new()?;
    let index = builder.build_from_entries(vec![KnowledgeEntry::new(
        "Do you sell gift cards?",
        "Yes, at the front desk",
    )])?;

    let desk = FrontDesk::new(&DeskConfig::default())?;
    desk.install_index(index);

    let decision = desk.decide("gift cards");
    assert!(decision.lookup().is_some_and(|r| r.found));
    Ok(())
}
