//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{FrontdeskArgs, OutputFormat};
use crate::corpus::IndexStats;
use crate::desk::TurnDecision;
use crate::error::Result;
use crate::matcher::ScoreBreakdown;
use crate::turn::TurnReply;

/// Types that know how to print themselves for a human reader.
pub trait HumanOutput {
    fn print_human(&self, verbosity: u8);
}

/// Result structure for a single decision.
#[derive(Debug, Serialize)]
pub struct DecisionOutput {
    pub utterance: String,
    #[serde(flatten)]
    pub decision: TurnDecision,
}

/// Result structure for score explanations.
#[derive(Debug, Serialize)]
pub struct ExplainOutput {
    pub utterance: String,
    pub closing: bool,
    pub closing_rules: Vec<&'static str>,
    pub threshold: f64,
    pub entries: Vec<ScoreBreakdown>,
}

/// Result structure for batch decisions.
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    pub decisions: Vec<DecisionOutput>,
    pub duration_ms: u64,
}

/// One indexed entry, as listed by `inspect --entries`.
#[derive(Debug, Serialize)]
pub struct EntrySummary {
    pub id: String,
    pub question: String,
    pub keywords: Vec<String>,
}

/// Result structure for index inspection.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub stats: IndexStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<EntrySummary>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FrontdeskArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args.verbosity());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(result: &T, args: &FrontdeskArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn print_decision(decision: &TurnDecision, verbosity: u8) {
    match decision {
        TurnDecision::Closing => println!("closing"),
        TurnDecision::Lookup(result) => {
            if let Some(error) = result.error_kind {
                println!("error: {error}");
            } else if result.found {
                println!(
                    "match ({:.3}): {}",
                    result.confidence,
                    result.answer.as_deref().unwrap_or_default()
                );
                if verbosity > 1
                    && let Some(question) = &result.matched_question
                {
                    println!("  matched question: {question}");
                }
            } else {
                println!("no match (best {:.3})", result.confidence);
            }
        }
    }
}

impl HumanOutput for DecisionOutput {
    fn print_human(&self, verbosity: u8) {
        print_decision(&self.decision, verbosity);
    }
}

impl HumanOutput for ExplainOutput {
    fn print_human(&self, _verbosity: u8) {
        println!("Utterance: {}", self.utterance);
        if self.closing {
            println!("Closing intent: yes");
        } else if !self.closing_rules.is_empty() {
            println!("Closing rules: {}", self.closing_rules.join(", "));
        }
        println!("Threshold: {:.3}", self.threshold);
        println!();
        println!(
            "{:>8} {:>8} {:>8} {:>8}  Question",
            "combined", "cosine", "string", "keyword"
        );
        println!("{}", "─".repeat(60));
        for entry in &self.entries {
            let marker = if entry.combined > self.threshold { "*" } else { " " };
            println!(
                "{:>8.3} {:>8.3} {:>8.3} {:>8.3} {marker}{}",
                entry.combined, entry.cosine, entry.string, entry.keyword, entry.question
            );
        }
    }
}

impl HumanOutput for BatchOutput {
    fn print_human(&self, verbosity: u8) {
        for output in &self.decisions {
            print!("{}\t", output.utterance);
            print_decision(&output.decision, verbosity);
        }
        if verbosity > 1 {
            println!();
            println!(
                "{} utterances in {}ms",
                self.decisions.len(),
                self.duration_ms
            );
        }
    }
}

impl HumanOutput for InspectOutput {
    fn print_human(&self, _verbosity: u8) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Entries: {}", self.stats.valid_entries);
        println!("Skipped entries: {}", self.stats.skipped_entries);
        println!(
            "Average question length: {:.1} chars",
            self.stats.average_question_chars
        );
        println!("Vocabulary size: {}", self.stats.vocabulary_size);
        println!("Threshold: {:.3}", self.stats.threshold);

        if let Some(entries) = &self.entries {
            println!();
            for entry in entries {
                println!("[{}] {}", entry.id, entry.question);
                println!("    keywords: {}", entry.keywords.join(", "));
            }
        }
    }
}

impl HumanOutput for TurnReply {
    fn print_human(&self, _verbosity: u8) {
        println!("{}", self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchResult;

    #[test]
    fn test_decision_output_flattens_decision() {
        let output = DecisionOutput {
            utterance: "bye".to_string(),
            decision: TurnDecision::Closing,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["utterance"], "bye");
        assert_eq!(json["decision"], "closing");

        let output = DecisionOutput {
            utterance: "parking?".to_string(),
            decision: TurnDecision::Lookup(MatchResult::not_found(0.1)),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["decision"], "lookup");
        assert_eq!(json["found"], false);
    }
}
