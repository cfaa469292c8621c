//! Registry of all decks known to the trainer.
//!
//! The registry is built once at startup and handed to whatever drives the
//! UI. Favorite status lives on the cards themselves, so there is no
//! separate favorites index to keep in sync.

use crate::corpus;
use crate::deck::{Deck, DeckSummary};
use crate::error::{Result, VocabError};
use crate::types::{Card, CardId};

#[derive(Debug, Clone, Default)]
pub struct DeckRegistry {
    decks: Vec<Deck>,
}

impl DeckRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with the built-in decks.
    pub fn builtin() -> Self {
        let decks = corpus::builtin_decks();
        tracing::info!(decks = decks.len(), "loaded built-in decks");
        Self { decks }
    }

    /// Append a deck. Names are not checked for uniqueness; lookups return
    /// the first match.
    pub fn add_deck(&mut self, deck: Deck) {
        self.decks.push(deck);
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Look up a deck by its identifier (exact, case-sensitive).
    pub fn get_deck(&self, name: &str) -> Result<&Deck> {
        self.decks
            .iter()
            .find(|d| d.language() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn get_deck_mut(&mut self, name: &str) -> Result<&mut Deck> {
        self.decks
            .iter_mut()
            .find(|d| d.language() == name)
            .ok_or_else(|| not_found(name))
    }

    /// Every favorite card, in deck order then card order.
    pub fn favorite_cards(&self) -> Vec<&Card> {
        self.decks
            .iter()
            .flat_map(|d| d.cards())
            .filter(|c| c.is_favorite())
            .collect()
    }

    /// Find a card in any deck.
    pub fn find_card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.decks.iter_mut().find_map(|deck| deck.card_mut(id))
    }

    pub fn summaries(&self) -> Vec<DeckSummary> {
        self.decks.iter().map(Deck::summary).collect()
    }
}

fn not_found(name: &str) -> VocabError {
    VocabError::DeckNotFound {
        name: name.to_string(),
    }
}
