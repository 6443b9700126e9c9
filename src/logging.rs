//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{FrontdeskError, Result};

/// Install a global `fmt` subscriber for `config`.
///
/// Logs go to stderr so that command output on stdout stays parseable. An
/// unparsable level falls back to `info`.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    installed.map_err(|e| FrontdeskError::other(format!("failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_cleanly() {
        let config = LoggingConfig {
            level: "not a [valid filter".to_string(),
            json: false,
        };

        // Whichever call installs first wins; the other reports an error.
        let first = init_tracing(&config);
        let second = init_tracing(&LoggingConfig::default());
        assert!(first.is_err() || second.is_err());
    }
}
