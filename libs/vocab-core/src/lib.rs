//! Core vocabulary trainer library.
//!
//! Provides:
//! - Vocabulary cards and decks with per-card study metadata
//! - A deck registry seeded with the built-in decks
//! - Built-in corpora for the quiz modes
//! - Session state machines for the matching game and the sentence walkthrough

pub mod corpus;
pub mod deck;
pub mod error;
pub mod registry;
pub mod session;
pub mod types;

pub use corpus::{MatchingCorpus, SentenceCorpus};
pub use deck::{Deck, DeckOrder, DeckSummary};
pub use error::{CorpusError, Result, VocabError};
pub use registry::DeckRegistry;
pub use session::matching::{AnswerOutcome, GameProgress, GameState, GameSummary, MatchingGame, Prompt};
pub use session::sentence::{Advance, SentenceView, SentenceWalkthrough, WalkthroughState};
pub use types::{Card, CardId};
