//! Command line argument parsing for the frontdesk CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// frontdesk - per-turn decisions for a voice front desk
#[derive(Parser, Debug, Clone)]
#[command(name = "frontdesk")]
#[command(about = "Closing-intent detection and knowledge-base matching for a voice front desk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FrontdeskArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "FRONTDESK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FrontdeskArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level implied by the verbosity flags, if they override the config.
    pub fn log_level_override(&self) -> Option<&'static str> {
        match self.verbosity() {
            0 => Some("error"),
            1 => None,
            2 => Some("info"),
            _ => Some("debug"),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decide a single utterance
    Ask(AskArgs),

    /// Show per-entry score components for an utterance
    Explain(ExplainArgs),

    /// Decide every line of a file
    Batch(BatchArgs),

    /// Show knowledge index statistics
    Inspect(InspectArgs),

    /// Hold a conversation on stdin/stdout
    Chat(ChatArgs),
}

/// Arguments for a single decision
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// Knowledge base snapshot (JSON array)
    #[arg(value_name = "KB")]
    pub knowledge_base: PathBuf,

    /// The caller's utterance
    #[arg(value_name = "UTTERANCE")]
    pub utterance: String,
}

/// Arguments for score explanation
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Knowledge base snapshot (JSON array)
    #[arg(value_name = "KB")]
    pub knowledge_base: PathBuf,

    /// The caller's utterance
    #[arg(value_name = "UTTERANCE")]
    pub utterance: String,

    /// Only show the best N entries
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for batch decisions
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Knowledge base snapshot (JSON array)
    #[arg(value_name = "KB")]
    pub knowledge_base: PathBuf,

    /// File with one utterance per line
    #[arg(value_name = "UTTERANCES_FILE")]
    pub utterances_file: PathBuf,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Knowledge base snapshot (JSON array)
    #[arg(value_name = "KB")]
    pub knowledge_base: PathBuf,

    /// Also list the indexed entries
    #[arg(short, long)]
    pub entries: bool,
}

/// Arguments for an interactive conversation
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Knowledge base snapshot (JSON array)
    #[arg(value_name = "KB")]
    pub knowledge_base: PathBuf,

    /// Caller identifier attached to escalations
    #[arg(long, default_value = "unknown")]
    pub caller_id: String,

    /// Append escalated questions to this JSON-lines file
    #[arg(long, value_name = "FILE")]
    pub escalations: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
