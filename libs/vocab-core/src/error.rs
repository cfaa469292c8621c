//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors surfaced by registry lookups and session state machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    #[error("deck not found: {name}")]
    DeckNotFound { name: String },

    #[error("matching game already completed")]
    GameCompleted,

    #[error("matching game not completed yet")]
    GameNotCompleted,

    #[error("no more sentences in walkthrough")]
    WalkthroughFinished,

    #[error("invalid corpus: {0}")]
    Corpus(#[from] CorpusError),
}

/// Structural problems found while building a corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("expected {expected} entries for {field}, found {found}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("sentence {sentence} has no tokens")]
    EmptySentence { sentence: usize },

    #[error("token {word} of sentence {sentence} has {found} choices, expected 3")]
    ChoiceCount {
        sentence: usize,
        word: usize,
        found: usize,
    },

    #[error("token {word} of sentence {sentence} lists the correct answer {found} times among its choices")]
    CorrectChoice {
        sentence: usize,
        word: usize,
        found: usize,
    },
}
