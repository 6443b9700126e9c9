use frontdesk::error::Result;
use frontdesk::intent::{ClosingIntentClassifier, IntentClassifier, TurnIntent};

#[test]
fn closing_utterances() -> Result<()> {
    let classifier = ClosingIntentClassifier::new()?;

    for utterance in [
        "Thats it!",
        "That's it, thanks",
        "that’s all",
        "No thanks",
        "nope",
        "bye",
        "Goodbye!",
        "ok bye",
        "thanks so much for your help",
        "I'm done",
        "no, I'm finished",
        "great, perfect",
        "have a nice day",
    ] {
        assert!(classifier.is_closing(utterance), "{utterance}");
        assert_eq!(classifier.predict(utterance)?, TurnIntent::Closing);
    }
    Ok(())
}

#[test]
fn questions_are_not_closing() -> Result<()> {
    let classifier = ClosingIntentClassifier::new()?;

    for utterance in [
        "What are your hours?",
        "How much is a haircut",
        "Do you take walk-ins?",
        "No, I wanted to ask whether you are open on Sunday afternoons for coloring appointments",
        "thanks, but how much does a haircut cost?",
        "my appointment was abandoned",
        "",
    ] {
        assert!(!classifier.is_closing(utterance), "{utterance}");
        assert_eq!(classifier.predict(utterance)?, TurnIntent::Question);
    }
    Ok(())
}

#[test]
fn closure_phrases_match_whole_words() -> Result<()> {
    let classifier = ClosingIntentClassifier::new()?;

    assert_eq!(classifier.closure_phrase("Okay, that's all!")?, Some("that's all"));
    assert_eq!(classifier.closure_phrase("is the salon undone")?, None);
    Ok(())
}

#[test]
fn rules_explain_the_decision() -> Result<()> {
    let classifier = ClosingIntentClassifier::new()?;

    let rules = classifier.matched_rules("ok bye")?;
    assert!(rules.contains(&"farewell_short"));

    let signals = classifier.signals("thanks, but how much does a haircut cost?")?;
    assert!(signals.has_thanks);
    assert!(!signals.is_statement);
    assert!(classifier.matched_rules("What are your hours?")?.is_empty());
    Ok(())
}

#[test]
fn plain_negations_close_short_statements() -> Result<()> {
    let classifier = ClosingIntentClassifier::new()?;

    for utterance in ["not right now", "not today", "I'm not interested", "never", "nothing"] {
        let signals = classifier.signals(utterance)?;
        assert!(signals.has_negative, "{utterance}");
        assert!(classifier.is_closing(utterance), "{utterance}");
    }

    // Negation alone does not close a long statement or a question.
    let long = "I would not want a short haircut for my daughter this time";
    assert!(classifier.signals(long)?.has_negative);
    assert!(!classifier.is_closing(long));
    assert!(!classifier.is_closing("Is nobody at the front desk?"));
    Ok(())
}
