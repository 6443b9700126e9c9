//! Desk configuration loading from TOML files and environment variables.
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields the stock behaviour:
//!
//! ```toml
//! [matcher]
//! base_threshold = 0.35
//! min_threshold = 0.15
//!
//! [matcher.weights]
//! cosine = 0.40
//! string = 0.35
//! keyword = 0.25
//!
//! [closing]
//! short_utterance_max_tokens = 7
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FrontdeskError, Result};

/// Tolerance when checking that the score weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Top-level desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Knowledge-base matching settings.
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Closing-intent settings.
    #[serde(default)]
    pub closing: ClosingConfig,

    /// Spoken reply texts.
    #[serde(default)]
    pub replies: RepliesConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Matching threshold and score blending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Threshold before corpus-dependent adjustments.
    #[serde(default = "default_base_threshold")]
    pub base_threshold: f64,

    /// Lower bound the adjusted threshold is clamped to.
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f64,

    /// Corpora with fewer valid entries than this get the small-corpus penalty.
    #[serde(default = "default_small_corpus_size")]
    pub small_corpus_size: usize,

    /// Subtracted for small corpora or verbose questions.
    #[serde(default = "default_small_corpus_penalty")]
    pub small_corpus_penalty: f64,

    /// Average question length (chars) above which questions count as verbose.
    #[serde(default = "default_verbose_question_chars")]
    pub verbose_question_chars: f64,

    /// Average question length (chars) above which the extra penalty applies.
    #[serde(default = "default_very_verbose_question_chars")]
    pub very_verbose_question_chars: f64,

    /// Extra penalty for very verbose questions.
    #[serde(default = "default_very_verbose_penalty")]
    pub very_verbose_penalty: f64,

    /// Blend weights of the combined score.
    #[serde(default)]
    pub weights: ScoreWeights,
}

/// Blend weights of the three similarity signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the tf-idf cosine similarity.
    #[serde(default = "default_cosine_weight")]
    pub cosine: f64,

    /// Weight of the bigram string similarity.
    #[serde(default = "default_string_weight")]
    pub string: f64,

    /// Weight of the keyword overlap.
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,
}

/// Closing-intent classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingConfig {
    /// Utterances with at most this many words count as short.
    #[serde(default = "default_short_utterance_max_tokens")]
    pub short_utterance_max_tokens: usize,
}

/// Texts spoken back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepliesConfig {
    /// Spoken when the session starts.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Spoken when the caller is closing the conversation.
    #[serde(default = "default_farewell")]
    pub farewell: String,

    /// Appended to a found answer.
    #[serde(default = "default_answer_suffix")]
    pub answer_suffix: String,

    /// Spoken when the question is escalated.
    #[serde(default = "default_escalation")]
    pub escalation: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "frontdesk=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_base_threshold() -> f64 {
    0.35
}

fn default_min_threshold() -> f64 {
    0.15
}

fn default_small_corpus_size() -> usize {
    10
}

fn default_small_corpus_penalty() -> f64 {
    0.05
}

fn default_verbose_question_chars() -> f64 {
    50.0
}

fn default_very_verbose_question_chars() -> f64 {
    80.0
}

fn default_very_verbose_penalty() -> f64 {
    0.03
}

fn default_cosine_weight() -> f64 {
    0.40
}

fn default_string_weight() -> f64 {
    0.35
}

fn default_keyword_weight() -> f64 {
    0.25
}

fn default_short_utterance_max_tokens() -> usize {
    7
}

fn default_greeting() -> String {
    "Hello! How can I help you today?".to_string()
}

fn default_farewell() -> String {
    "Thank you for calling!".to_string()
}

fn default_answer_suffix() -> String {
    "Is there anything else you'd like to know?".to_string()
}

fn default_escalation() -> String {
    "Let me check with my supervisor and get back to you. Is there anything else I can help you with?"
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            base_threshold: default_base_threshold(),
            min_threshold: default_min_threshold(),
            small_corpus_size: default_small_corpus_size(),
            small_corpus_penalty: default_small_corpus_penalty(),
            verbose_question_chars: default_verbose_question_chars(),
            very_verbose_question_chars: default_very_verbose_question_chars(),
            very_verbose_penalty: default_very_verbose_penalty(),
            weights: ScoreWeights::default(),
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cosine: default_cosine_weight(),
            string: default_string_weight(),
            keyword: default_keyword_weight(),
        }
    }
}

impl ScoreWeights {
    /// Combine the three signals into one score.
    pub fn combine(&self, cosine: f64, string: f64, keyword: f64) -> f64 {
        cosine * self.cosine + string * self.string + keyword * self.keyword
    }

    fn sum(&self) -> f64 {
        self.cosine + self.string + self.keyword
    }
}

impl Default for ClosingConfig {
    fn default() -> Self {
        Self {
            short_utterance_max_tokens: default_short_utterance_max_tokens(),
        }
    }
}

impl Default for RepliesConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            farewell: default_farewell(),
            answer_suffix: default_answer_suffix(),
            escalation: default_escalation(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl MatcherConfig {
    /// Check that thresholds and weights are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("base_threshold", self.base_threshold),
            ("min_threshold", self.min_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FrontdeskError::config(format!(
                    "matcher.{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.min_threshold > self.base_threshold {
            return Err(FrontdeskError::config(format!(
                "matcher.min_threshold ({}) exceeds matcher.base_threshold ({})",
                self.min_threshold, self.base_threshold
            )));
        }

        for (name, value) in [
            ("small_corpus_penalty", self.small_corpus_penalty),
            ("very_verbose_penalty", self.very_verbose_penalty),
            ("weights.cosine", self.weights.cosine),
            ("weights.string", self.weights.string),
            ("weights.keyword", self.weights.keyword),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FrontdeskError::config(format!(
                    "matcher.{name} must be non-negative, got {value}"
                )));
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(FrontdeskError::config(format!(
                "matcher.weights must sum to 1, got {sum}"
            )));
        }

        Ok(())
    }
}

impl DeskConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: DeskConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;

        if self.closing.short_utterance_max_tokens == 0 {
            return Err(FrontdeskError::config(
                "closing.short_utterance_max_tokens must be at least 1",
            ));
        }

        Ok(())
    }
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `FRONTDESK_LOG_LEVEL` overrides `logging.level`
/// - `FRONTDESK_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config(path: Option<&Path>) -> Result<DeskConfig> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => DeskConfig::from_toml_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %p.display(), "config file not found, using defaults");
                DeskConfig::default()
            }
            Err(e) => return Err(e.into()),
        },
        None => DeskConfig::default(),
    };

    if let Ok(level) = std::env::var("FRONTDESK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("FRONTDESK_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
