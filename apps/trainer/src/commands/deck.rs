//! Deck browsing and card metadata commands.

use crate::error::{CommandError, Result};
use crate::state::{AppState, DeckDisplay, SessionHandle};
use serde::Serialize;
use vocab_core::{Card, CardId, Deck, DeckSummary};

/// A deck with its cards in display order.
#[derive(Debug, Clone, Serialize)]
pub struct DeckView {
    #[serde(flatten)]
    pub summary: DeckSummary,
    pub cards: Vec<Card>,
}

impl From<&Deck> for DeckView {
    fn from(deck: &Deck) -> Self {
        Self {
            summary: deck.summary(),
            cards: deck.cards().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplaySession {
    pub handle: SessionHandle,
    pub deck: DeckView,
}

/// List all decks.
pub fn list_decks(state: &AppState) -> Result<Vec<DeckSummary>> {
    Ok(state.registry()?.summaries())
}

/// Get a deck and its cards.
pub fn get_deck(state: &AppState, name: &str) -> Result<DeckView> {
    let registry = state.registry()?;
    let view = DeckView::from(registry.get_deck(name)?);
    Ok(view)
}

/// Favorite cards across every deck.
pub fn list_favorites(state: &AppState) -> Result<Vec<Card>> {
    let registry = state.registry()?;
    let favorites: Vec<Card> = registry.favorite_cards().into_iter().cloned().collect();
    Ok(favorites)
}

pub fn toggle_favorite(state: &AppState, card_id: CardId) -> Result<Card> {
    update_card(state, card_id, |card| {
        card.toggle_favorite();
    })
}

pub fn flip_card(state: &AppState, card_id: CardId) -> Result<Card> {
    update_card(state, card_id, |card| {
        card.flip();
    })
}

pub fn set_difficulty(state: &AppState, card_id: CardId, difficulty: i32) -> Result<Card> {
    update_card(state, card_id, |card| card.set_difficulty(difficulty))
}

fn update_card(state: &AppState, card_id: CardId, apply: impl FnOnce(&mut Card)) -> Result<Card> {
    let mut registry = state.registry()?;
    let card = registry
        .find_card_mut(card_id)
        .ok_or_else(|| CommandError::NotFound(format!("card {card_id}")))?;
    apply(&mut *card);
    Ok(card.clone())
}

/// Start browsing a deck. The current order is saved and put back by
/// [`close_deck`], however often the deck is shuffled in between.
///
/// Displays open on the same deck share the order saved by the first one.
pub fn open_deck(state: &AppState, name: &str) -> Result<DisplaySession> {
    let mut sessions = state.sessions()?;
    let registry = state.registry()?;
    let deck = registry.get_deck(name)?;

    let original_order = match sessions.open_order(name) {
        Some(order) => order.clone(),
        None => deck.snapshot_order(),
    };
    let handle = SessionHandle::new();
    sessions.displays.insert(
        handle,
        DeckDisplay {
            deck: name.to_string(),
            original_order,
        },
    );
    tracing::debug!(%handle, deck = name, "opened deck");

    Ok(DisplaySession {
        handle,
        deck: deck.into(),
    })
}

pub fn shuffle_deck(state: &AppState, handle: SessionHandle) -> Result<DeckView> {
    let sessions = state.sessions()?;
    let session = sessions.display(handle)?;
    let mut registry = state.registry()?;
    let deck = registry.get_deck_mut(&session.deck)?;
    deck.shuffle_with(&mut *state.rng()?);
    Ok(DeckView::from(&*deck))
}

/// Stop browsing. Closing the last display on a deck puts the deck back in
/// its opening order.
pub fn close_deck(state: &AppState, handle: SessionHandle) -> Result<DeckView> {
    let mut sessions = state.sessions()?;
    let closed = sessions
        .displays
        .remove(&handle)
        .ok_or_else(|| CommandError::NotFound(format!("deck display session {handle}")))?;

    let mut registry = state.registry()?;
    let deck = registry.get_deck_mut(&closed.deck)?;
    if !sessions.is_deck_open(&closed.deck) {
        deck.restore_order(&closed.original_order);
    }
    tracing::debug!(%handle, deck = %closed.deck, "closed deck");
    Ok(DeckView::from(&*deck))
}
