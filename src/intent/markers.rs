//! Word lists used by the closing-intent classifier.
//!
//! All entries are in phrase-normalized form: lowercase, apostrophes kept,
//! single spaces. They are matched at word boundaries.

/// Phrases that end the conversation on their own.
pub const CLOSURE_PHRASES: &[&str] = &[
    "that's it",
    "thats it",
    "that is it",
    "that's all",
    "thats all",
    "that is all",
    "that's everything",
    "thats everything",
    "nothing else",
    "no more",
    "all done",
    "all set",
    "i'm done",
    "im done",
    "finished",
    "done",
    "that'll be all",
    "that will be all",
    "no thanks",
    "no thank you",
];

pub const FAREWELL_MARKERS: &[&str] = &[
    "bye",
    "goodbye",
    "good bye",
    "farewell",
    "see you",
    "see ya",
    "take care",
    "good night",
    "goodnight",
    "have a good day",
    "have a nice day",
    "have a great day",
    "talk to you later",
    "catch you later",
];

pub const THANKS_MARKERS: &[&str] = &[
    "thank",
    "thanks",
    "thankyou",
    "thx",
    "cheers",
    "appreciate it",
    "much appreciated",
];

pub const NEGATIVE_MARKERS: &[&str] = &[
    "no",
    "nope",
    "nah",
    "not",
    "never",
    "nothing",
    "none",
    "nobody",
    "never mind",
    "nevermind",
];

pub const COMPLETE_MARKERS: &[&str] = &["done", "finished"];

/// Phrase-normalized tokens joined and padded with spaces, so that a
/// phrase occurs at word boundaries iff `" {phrase} "` is a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseText {
    padded: String,
}

impl PhraseText {
    pub fn new(tokens: &[String]) -> Self {
        PhraseText {
            padded: format!(" {} ", tokens.join(" ")),
        }
    }

    /// Check if `phrase` occurs as whole words.
    pub fn contains(&self, phrase: &str) -> bool {
        self.padded.contains(&format!(" {phrase} "))
    }

    /// First phrase of `phrases` that occurs as whole words.
    pub fn find_any(&self, phrases: &[&'static str]) -> Option<&'static str> {
        phrases.iter().copied().find(|phrase| self.contains(phrase))
    }

    /// Check if any phrase of `phrases` occurs as whole words.
    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|phrase| self.contains(phrase))
    }
}
