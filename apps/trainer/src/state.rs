//! Application state shared by every command.

use crate::config::TrainerConfig;
use crate::error::{CommandError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;
use vocab_core::{DeckOrder, DeckRegistry, MatchingGame, SentenceWalkthrough};

/// Opaque handle to a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(Uuid);

impl SessionHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A deck being browsed, with the order it had when it was opened.
#[derive(Debug, Clone)]
pub struct DeckDisplay {
    pub deck: String,
    pub original_order: DeckOrder,
}

/// Live sessions by handle.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub games: HashMap<SessionHandle, MatchingGame>,
    pub walkthroughs: HashMap<SessionHandle, SentenceWalkthrough>,
    pub displays: HashMap<SessionHandle, DeckDisplay>,
}

impl SessionStore {
    pub fn game_mut(&mut self, handle: SessionHandle) -> Result<&mut MatchingGame> {
        self.games
            .get_mut(&handle)
            .ok_or_else(|| missing("matching game", handle))
    }

    pub fn walkthrough_mut(&mut self, handle: SessionHandle) -> Result<&mut SentenceWalkthrough> {
        self.walkthroughs
            .get_mut(&handle)
            .ok_or_else(|| missing("walkthrough", handle))
    }

    pub fn display(&self, handle: SessionHandle) -> Result<&DeckDisplay> {
        self.displays
            .get(&handle)
            .ok_or_else(|| missing("deck display", handle))
    }

    /// Order saved by a display already open on `deck`, if any.
    pub fn open_order(&self, deck: &str) -> Option<&DeckOrder> {
        self.displays
            .values()
            .find(|d| d.deck == deck)
            .map(|d| &d.original_order)
    }

    pub fn is_deck_open(&self, deck: &str) -> bool {
        self.displays.values().any(|d| d.deck == deck)
    }

    /// Drop a session of any kind. Returns whether one existed.
    pub fn remove(&mut self, handle: SessionHandle) -> bool {
        self.games.remove(&handle).is_some()
            || self.walkthroughs.remove(&handle).is_some()
            || self.displays.remove(&handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len() + self.walkthroughs.len() + self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn missing(kind: &str, handle: SessionHandle) -> CommandError {
    CommandError::NotFound(format!("{kind} session {handle}"))
}

/// Global application state.
///
/// Locks are always taken in the order sessions, registry, rng.
pub struct AppState {
    pub registry: Arc<Mutex<DeckRegistry>>,
    sessions: Mutex<SessionStore>,
    rng: Mutex<SmallRng>,
}

impl AppState {
    pub fn new(registry: DeckRegistry, config: &TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            registry: Arc::new(Mutex::new(registry)),
            sessions: Mutex::new(SessionStore::default()),
            rng: Mutex::new(rng),
        }
    }

    /// State over the built-in decks.
    pub fn builtin(config: &TrainerConfig) -> Self {
        Self::new(DeckRegistry::builtin(), config)
    }

    pub fn registry(&self) -> Result<MutexGuard<'_, DeckRegistry>> {
        self.registry.lock().map_err(|_| poisoned("registry"))
    }

    pub fn sessions(&self) -> Result<MutexGuard<'_, SessionStore>> {
        self.sessions.lock().map_err(|_| poisoned("sessions"))
    }

    pub fn rng(&self) -> Result<MutexGuard<'_, SmallRng>> {
        self.rng.lock().map_err(|_| poisoned("rng"))
    }

    /// Seed for a new session, drawn from the shared source.
    pub fn next_seed(&self) -> Result<u64> {
        Ok(self.rng()?.gen())
    }
}

fn poisoned(what: &str) -> CommandError {
    CommandError::Internal(format!("{what} lock poisoned"))
}
