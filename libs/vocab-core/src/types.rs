//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a card, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One vocabulary item with its study metadata.
///
/// Two cards built from the same word are still distinct: identity is the
/// [`CardId`], never the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    word: String,
    conjugates: Vec<String>,
    translation: String,
    flipped: bool,
    difficulty: i32,
    favorite: bool,
}

impl Card {
    /// Create an unflipped, non-favorite card with difficulty 1.
    pub fn new(
        word: impl Into<String>,
        conjugates: Vec<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(),
            word: word.into(),
            conjugates,
            translation: translation.into(),
            flipped: false,
            difficulty: 1,
            favorite: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    pub fn conjugates(&self) -> &[String] {
        &self.conjugates
    }

    pub fn set_conjugates(&mut self, conjugates: Vec<String>) {
        self.conjugates = conjugates;
    }

    /// Conjugated forms joined for display.
    pub fn display_conjugates(&self, separator: &str) -> String {
        self.conjugates.join(separator)
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn set_translation(&mut self, translation: impl Into<String>) {
        self.translation = translation.into();
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    /// Toggle the flip state, returning the new value.
    pub fn flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Values are stored as given; no range check is applied.
    pub fn set_difficulty(&mut self, difficulty: i32) {
        self.difficulty = difficulty;
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    /// Toggle the favorite mark, returning the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hablar() -> Card {
        Card::new(
            "Hablar",
            vec!["Hablo".into(), "Hablas".into(), "Habla".into()],
            "To Speak",
        )
    }

    #[test]
    fn new_card_has_defaults() {
        let card = hablar();
        assert_eq!(card.word(), "Hablar");
        assert_eq!(card.translation(), "To Speak");
        assert!(!card.is_flipped());
        assert!(!card.is_favorite());
        assert_eq!(card.difficulty(), 1);
    }

    #[test]
    fn flip_toggles() {
        let mut card = hablar();
        assert!(card.flip());
        assert!(card.is_flipped());
        assert!(!card.flip());
        assert!(!card.is_flipped());
    }

    #[test]
    fn favorite_toggles() {
        let mut card = hablar();
        assert!(card.toggle_favorite());
        assert!(!card.toggle_favorite());
        card.set_favorite(true);
        assert!(card.is_favorite());
    }

    #[test]
    fn same_content_distinct_identity() {
        let a = hablar();
        let b = hablar();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn setters_accept_unvalidated_input() {
        let mut card = hablar();
        card.set_word("");
        card.set_translation("");
        card.set_conjugates(vec![]);
        card.set_difficulty(-3);
        assert_eq!(card.word(), "");
        assert!(card.conjugates().is_empty());
        assert_eq!(card.difficulty(), -3);
    }

    #[test]
    fn conjugates_join_for_display() {
        assert_eq!(hablar().display_conjugates(", "), "Hablo, Hablas, Habla");
    }
}
