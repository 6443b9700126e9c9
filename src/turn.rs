//! Turning decisions into spoken replies and escalations.
//!
//! The [`TurnHandler`] sits between the decision facade and the voice
//! session: it picks the text to speak, tells the session whether to hang
//! up, and hands unanswered questions to an [`EscalationSink`] as
//! [`PendingRequest`]s for a human supervisor.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::RepliesConfig;
use crate::desk::{FrontDesk, TurnDecision};
use crate::error::{FrontdeskError, Result};

/// Lifecycle state of an escalated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Waiting for a supervisor's answer.
    Pending,
}

/// A question the knowledge base could not answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub id: Uuid,
    pub question: String,
    pub caller_id: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl PendingRequest {
    /// Create a pending request stamped with the current time.
    pub fn new<Q: Into<String>, C: Into<String>>(question: Q, caller_id: C) -> Self {
        PendingRequest {
            id: Uuid::new_v4(),
            question: question.into(),
            caller_id: caller_id.into(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// Receives escalated questions.
pub trait EscalationSink: Send + Sync {
    /// Record a pending request.
    fn record(&self, request: &PendingRequest) -> Result<()>;

    /// Get the name of this sink.
    fn name(&self) -> &str;
}

/// Keeps escalations in memory.
#[derive(Debug, Default)]
pub struct MemoryEscalationSink {
    requests: Mutex<Vec<PendingRequest>>,
}

impl MemoryEscalationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests recorded so far.
    pub fn requests(&self) -> Vec<PendingRequest> {
        self.requests.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.lock().is_empty()
    }
}

impl EscalationSink for MemoryEscalationSink {
    fn record(&self, request: &PendingRequest) -> Result<()> {
        self.requests.lock().push(request.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Appends escalations to a file, one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesEscalationSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesEscalationSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                FrontdeskError::escalation(format!(
                    "failed to open escalation log {}: {e}",
                    path.display()
                ))
            })?;

        Ok(JsonLinesEscalationSink {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EscalationSink for JsonLinesEscalationSink {
    fn record(&self, request: &PendingRequest) -> Result<()> {
        let mut line = serde_json::to_string(request)?;
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "jsonl"
    }
}

/// What to say back for one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReply {
    /// Text to speak.
    pub text: String,
    /// Whether the session should end after speaking.
    pub end_session: bool,
    /// The decision the reply was built from.
    pub decision: TurnDecision,
    /// The escalation created for this turn, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation: Option<PendingRequest>,
}

/// Maps decisions to replies and records escalations.
pub struct TurnHandler {
    replies: RepliesConfig,
    sink: Arc<dyn EscalationSink>,
}

impl std::fmt::Debug for TurnHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnHandler")
            .field("replies", &self.replies)
            .field("sink", &self.sink.name())
            .finish()
    }
}

impl TurnHandler {
    pub fn new(replies: RepliesConfig, sink: Arc<dyn EscalationSink>) -> Self {
        TurnHandler { replies, sink }
    }

    /// Text spoken when the session starts.
    pub fn greeting(&self) -> &str {
        &self.replies.greeting
    }

    /// Decide one utterance and build the reply.
    ///
    /// Escalation failures are logged; they never fail the turn.
    pub fn handle(&self, desk: &FrontDesk, caller_id: &str, utterance: &str) -> TurnReply {
        match desk.decide(utterance) {
            TurnDecision::Closing => {
                info!(caller_id, "caller is closing the conversation");
                TurnReply {
                    text: self.replies.farewell.clone(),
                    end_session: true,
                    decision: TurnDecision::Closing,
                    escalation: None,
                }
            }
            TurnDecision::Lookup(result) if result.found => {
                let answer = result.answer.as_deref().unwrap_or_default();
                TurnReply {
                    text: self.answer_text(answer),
                    end_session: false,
                    decision: TurnDecision::Lookup(result),
                    escalation: None,
                }
            }
            TurnDecision::Lookup(result) => {
                let request = PendingRequest::new(utterance, caller_id);
                let escalation = match self.sink.record(&request) {
                    Ok(()) => {
                        info!(caller_id, request_id = %request.id, "pending request created");
                        Some(request)
                    }
                    Err(e) => {
                        error!(caller_id, error = %e, sink = self.sink.name(), "failed to record pending request");
                        None
                    }
                };

                TurnReply {
                    text: self.replies.escalation.clone(),
                    end_session: false,
                    decision: TurnDecision::Lookup(result),
                    escalation,
                }
            }
        }
    }

    fn answer_text(&self, answer: &str) -> String {
        let answer = answer.trim_end().trim_end_matches('.');
        format!("{answer}. {}", self.replies.answer_suffix)
    }
}
