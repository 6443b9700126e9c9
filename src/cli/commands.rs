//! Command implementations for the frontdesk CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{DeskConfig, load_config};
use crate::desk::FrontDesk;
use crate::error::{FrontdeskError, Result};
use crate::turn::{EscalationSink, JsonLinesEscalationSink, MemoryEscalationSink, TurnHandler};

/// Execute a CLI command.
pub fn execute_command(args: FrontdeskArgs, config: &DeskConfig) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args, config, &args),
        Command::Explain(explain_args) => explain(explain_args, config, &args),
        Command::Batch(batch_args) => batch(batch_args, config, &args),
        Command::Inspect(inspect_args) => inspect(inspect_args, config, &args),
        Command::Chat(chat_args) => chat(chat_args, config, &args),
    }
}

/// Load the configuration named on the command line and apply the
/// verbosity flags to its logging section.
pub fn resolve_config(args: &FrontdeskArgs) -> Result<DeskConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }
    Ok(config)
}

/// Create a desk and install the knowledge base at `path`.
fn open_desk(path: &Path, config: &DeskConfig) -> Result<FrontDesk> {
    let desk = FrontDesk::new(config)?;
    let index = desk.builder().build_from_path(path)?;
    desk.install_index(index);
    Ok(desk)
}

fn ask(args: &AskArgs, config: &DeskConfig, cli_args: &FrontdeskArgs) -> Result<()> {
    let desk = open_desk(&args.knowledge_base, config)?;

    let output = DecisionOutput {
        utterance: args.utterance.clone(),
        decision: desk.decide(&args.utterance),
    };

    output_result("Decision", &output, cli_args)
}

fn explain(args: &ExplainArgs, config: &DeskConfig, cli_args: &FrontdeskArgs) -> Result<()> {
    let desk = open_desk(&args.knowledge_base, config)?;
    let classifier = desk.closing_classifier();

    let mut entries = desk.explain(&args.utterance)?;
    if let Some(top) = args.top {
        entries.sort_by(|a, b| b.combined.total_cmp(&a.combined));
        entries.truncate(top);
    }

    let threshold = desk.index().map(|index| index.threshold()).unwrap_or_default();
    let output = ExplainOutput {
        utterance: args.utterance.clone(),
        closing: classifier.is_closing(&args.utterance),
        closing_rules: classifier.matched_rules(&args.utterance)?,
        threshold,
        entries,
    };

    output_result("Score breakdown", &output, cli_args)
}

fn batch(args: &BatchArgs, config: &DeskConfig, cli_args: &FrontdeskArgs) -> Result<()> {
    let desk = open_desk(&args.knowledge_base, config)?;

    let contents = std::fs::read_to_string(&args.utterances_file)?;
    let utterances: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let start_time = Instant::now();
    let decisions = desk.decide_batch(&utterances);
    let duration = start_time.elapsed();
    info!(utterances = utterances.len(), duration_ms = duration.as_millis() as u64, "batch decided");

    let output = BatchOutput {
        decisions: utterances
            .iter()
            .zip(decisions)
            .map(|(utterance, decision)| DecisionOutput {
                utterance: utterance.to_string(),
                decision,
            })
            .collect(),
        duration_ms: duration.as_millis() as u64,
    };

    output_result("Batch decisions", &output, cli_args)
}

fn inspect(args: &InspectArgs, config: &DeskConfig, cli_args: &FrontdeskArgs) -> Result<()> {
    let desk = open_desk(&args.knowledge_base, config)?;
    let index = desk
        .index()
        .ok_or_else(|| FrontdeskError::initialization("knowledge index was not installed"))?;

    let entries = args.entries.then(|| {
        index
            .entries()
            .iter()
            .map(|entry| EntrySummary {
                id: entry.id.clone(),
                question: entry.question.clone(),
                keywords: entry.keywords.iter().cloned().collect(),
            })
            .collect()
    });

    let output = InspectOutput {
        stats: index.stats().clone(),
        entries,
    };

    output_result("Knowledge index", &output, cli_args)
}

fn chat(args: &ChatArgs, config: &DeskConfig, cli_args: &FrontdeskArgs) -> Result<()> {
    let desk = open_desk(&args.knowledge_base, config)?;

    let sink: Arc<dyn EscalationSink> = match &args.escalations {
        Some(path) => Arc::new(JsonLinesEscalationSink::open(path)?),
        None => Arc::new(MemoryEscalationSink::new()),
    };
    let handler = TurnHandler::new(config.replies.clone(), sink);
    let json = cli_args.output_format == OutputFormat::Json;

    if !json {
        println!("{}", handler.greeting());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }

        let reply = handler.handle(&desk, &args.caller_id, utterance);
        if json {
            output_json(&reply, cli_args)?;
        } else {
            reply.print_human(cli_args.verbosity());
        }
        stdout.flush()?;

        if reply.end_session {
            break;
        }
    }

    Ok(())
}
