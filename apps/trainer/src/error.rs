//! Errors returned by trainer commands.

use serde::{Serialize, Serializer};
use thiserror::Error;
use vocab_core::VocabError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("State violation: {0}")]
    StateViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommandError {
    /// Machine-readable error category.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::NotFound(_) => "not_found",
            CommandError::StateViolation(_) => "state_violation",
            CommandError::InvalidInput(_) => "invalid_input",
            CommandError::Internal(_) => "internal",
        }
    }
}

/// Error body sent back to the caller.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl Serialize for CommandError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}

impl From<VocabError> for CommandError {
    fn from(e: VocabError) -> Self {
        match e {
            VocabError::DeckNotFound { .. } => CommandError::NotFound(e.to_string()),
            VocabError::GameCompleted
            | VocabError::GameNotCompleted
            | VocabError::WalkthroughFinished => CommandError::StateViolation(e.to_string()),
            VocabError::Corpus(_) => CommandError::InvalidInput(e.to_string()),
        }
    }
}

/// Result type alias for command handlers.
pub type Result<T> = std::result::Result<T, CommandError>;
