//! Error types for the frontdesk library.
//!
//! Build-time failures (a malformed knowledge-base snapshot, a bad config file)
//! are represented by [`FrontdeskError`] and propagate to whoever owns the
//! worker process. Per-turn failures never do: the matcher converts them into
//! a [`MatchErrorKind`](crate::matcher::MatchErrorKind) on the result instead.
//!
//! # Examples
//!
//! ```
//! use frontdesk::error::{FrontdeskError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(FrontdeskError::initialization("knowledge base is not a list"))
//! }
//!
//! assert!(matches!(load(), Err(FrontdeskError::Initialization(_))));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for frontdesk operations.
#[derive(Error, Debug)]
pub enum FrontdeskError {
    /// The knowledge-base snapshot could not be turned into an index.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// The escalation collaborator refused a pending request.
    #[error("Escalation error: {0}")]
    Escalation(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FrontdeskError.
pub type Result<T> = std::result::Result<T, FrontdeskError>;

impl FrontdeskError {
    /// Create a new initialization error.
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        FrontdeskError::Initialization(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FrontdeskError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FrontdeskError::Config(msg.into())
    }

    /// Create a new escalation error.
    pub fn escalation<S: Into<String>>(msg: S) -> Self {
        FrontdeskError::Escalation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FrontdeskError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FrontdeskError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
