//! Decks: named, ordered collections of cards.

use crate::types::{Card, CardId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered collection of cards plus deck metadata.
///
/// Card order is the display order. Mutation goes through the deck so a
/// caller never holds an alias to the live sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    language: String,
    cards: Vec<Card>,
    deck_name: String,
    difficulty_rating: i32,
    active: bool,
}

/// Owned copy of a deck's card order, taken with [`Deck::snapshot_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOrder(Vec<CardId>);

impl DeckOrder {
    pub fn ids(&self) -> &[CardId] {
        &self.0
    }
}

/// Deck with card counts, for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    pub language: String,
    pub deck_name: String,
    pub card_count: usize,
    pub favorite_count: usize,
    pub difficulty_rating: i32,
    pub active: bool,
}

impl Deck {
    /// Create an empty, active deck named "Default" with difficulty 1.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            cards: Vec::new(),
            deck_name: "Default".to_string(),
            difficulty_rating: 1,
            active: true,
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the card with the given id. Absent ids are a no-op.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let position = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(position))
    }

    /// Shuffle with the thread-local random source.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle with a caller-provided random source.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::debug!(deck = %self.language, cards = self.cards.len(), "shuffled deck");
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// Replace the card sequence wholesale.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn snapshot_order(&self) -> DeckOrder {
        DeckOrder(self.cards.iter().map(Card::id).collect())
    }

    /// Reorder the live cards to match a snapshot.
    ///
    /// Cards added after the snapshot move to the end in their current
    /// relative order; snapshot ids that are gone are ignored. Card state is
    /// kept, only positions change.
    pub fn restore_order(&mut self, order: &DeckOrder) {
        let positions: HashMap<CardId, usize> = order
            .0
            .iter()
            .enumerate()
            .map(|(pos, id)| (*id, pos))
            .collect();

        // sort_by_key is stable, so unknown cards keep their relative order
        self.cards
            .sort_by_key(|c| positions.get(&c.id()).copied().unwrap_or(usize::MAX));
        tracing::debug!(deck = %self.language, cards = self.cards.len(), "restored deck order");
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn set_deck_name(&mut self, deck_name: impl Into<String>) {
        self.deck_name = deck_name.into();
    }

    pub fn difficulty_rating(&self) -> i32 {
        self.difficulty_rating
    }

    pub fn set_difficulty_rating(&mut self, difficulty_rating: i32) {
        self.difficulty_rating = difficulty_rating;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            language: self.language.clone(),
            deck_name: self.deck_name.clone(),
            card_count: self.cards.len(),
            favorite_count: self.cards.iter().filter(|c| c.is_favorite()).count(),
            difficulty_rating: self.difficulty_rating,
            active: self.active,
        }
    }
}
