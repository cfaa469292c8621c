//! Runtime configuration read from the environment.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VOCAB_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),

    #[error("invalid RUST_LOG filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// `tracing` filter directive, from `RUST_LOG`.
    pub log_filter: String,
    /// Seed for deck shuffles and prompt order. Random when unset.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Load from the process environment (after `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let log_filter = lookup("RUST_LOG").unwrap_or(defaults.log_filter);
        parse_filter(&log_filter)?;
        let seed = match lookup("VOCAB_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw))?,
            ),
            None => None,
        };
        Ok(Self { log_filter, seed })
    }

    /// The log filter as a `tracing_subscriber` layer.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        parse_filter(&self.log_filter)
    }
}

fn parse_filter(filter: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(filter).map_err(|e| ConfigError::InvalidLogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}
