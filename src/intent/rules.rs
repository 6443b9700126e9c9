//! The closing rules, one named predicate per line.

use crate::intent::signals::ClosingSignals;

/// A closing rule over extracted signals.
pub type ClosingRule = fn(&ClosingSignals) -> bool;

/// Every rule; the utterance is closing if any of them holds.
pub const CLOSING_RULES: &[(&str, ClosingRule)] = &[
    ("farewell_short", |s| s.has_farewell && s.is_short),
    ("thanks_short_statement", |s| {
        s.has_thanks && s.is_short && s.is_statement
    }),
    ("negative_short_statement", |s| {
        s.has_negative && s.is_short && s.is_statement
    }),
    ("complete_short_statement", |s| {
        s.has_complete && s.is_short && s.is_statement
    }),
    ("thanks_not_negative_statement", |s| {
        s.has_thanks && s.sentiment >= -1 && s.is_statement
    }),
    ("negative_thanks_short", |s| {
        s.has_negative && s.has_thanks && s.is_short
    }),
    ("negative_complete_short", |s| {
        s.has_negative && s.has_complete && s.is_short
    }),
    ("courtesy_short_statement", |s| {
        (s.has_thanks || s.has_farewell) && s.is_short && s.is_statement
    }),
    ("positive_short_statement", |s| {
        s.sentiment > 1 && s.is_short && s.is_statement
    }),
];

/// Names of the rules that hold for `signals`.
pub fn matching_rules(signals: &ClosingSignals) -> Vec<&'static str> {
    CLOSING_RULES
        .iter()
        .filter(|(_, rule)| rule(signals))
        .map(|(name, _)| *name)
        .collect()
}

/// Check if any rule holds for `signals`.
pub fn any_rule_matches(signals: &ClosingSignals) -> bool {
    CLOSING_RULES.iter().any(|(_, rule)| rule(signals))
}
