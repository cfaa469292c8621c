//! Deck browsing command tests.

mod common;

use common::TestContext;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_list_decks() {
    let ctx = TestContext::new();
    let decks = ctx.ok(json!({"command": "list_decks"}));
    let names: Vec<&str> = decks
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["language"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["SpanishDeck1", "SpanishDeck2", "SpanishDeck3", "SpanishDeck4", "LatinDeck"]
    );
    assert_eq!(decks[0]["card_count"], 20);
    assert_eq!(decks[0]["deck_name"], "Default");
}

#[test]
fn test_get_deck_first_card() {
    let ctx = TestContext::new();
    let deck = ctx.ok(json!({"command": "get_deck", "args": {"name": "SpanishDeck1"}}));
    let first = &deck["cards"][0];
    assert_eq!(first["word"], "Hablar");
    assert_eq!(first["conjugates"], json!(["Hablo", "Hablas", "Habla"]));
    assert_eq!(first["translation"], "To Speak");
    assert_eq!(first["favorite"], false);
}

#[test]
fn test_get_unknown_deck() {
    let ctx = TestContext::new();
    let kind = ctx.err_kind(json!({"command": "get_deck", "args": {"name": "KlingonDeck"}}));
    assert_eq!(kind, "not_found");
}

#[test]
fn test_favorites_follow_toggles() {
    let ctx = TestContext::new();
    let latin = ctx.ok(json!({"command": "get_deck", "args": {"name": "LatinDeck"}}));
    let spanish = ctx.ok(json!({"command": "get_deck", "args": {"name": "SpanishDeck4"}}));
    let amo = latin["cards"][0]["id"].clone();
    let casa = spanish["cards"][0]["id"].clone();

    // toggle in reverse deck order; favorites still come back deck-first
    ctx.ok(json!({"command": "toggle_favorite", "args": {"card_id": amo}}));
    let card = ctx.ok(json!({"command": "toggle_favorite", "args": {"card_id": casa}}));
    assert_eq!(card["favorite"], true);

    let favorites = ctx.ok(json!({"command": "list_favorites"}));
    let words: Vec<&str> = favorites
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["Casa", "Amo"]);

    ctx.ok(json!({"command": "toggle_favorite", "args": {"card_id": casa}}));
    let favorites = ctx.ok(json!({"command": "list_favorites"}));
    assert_eq!(favorites.as_array().unwrap().len(), 1);
}

#[test]
fn test_flip_and_difficulty() {
    let ctx = TestContext::new();
    let deck = ctx.ok(json!({"command": "get_deck", "args": {"name": "SpanishDeck2"}}));
    let id = deck["cards"][1]["id"].clone();

    let card = ctx.ok(json!({"command": "flip_card", "args": {"card_id": id}}));
    assert_eq!(card["flipped"], true);

    let card = ctx.ok(json!({"command": "set_difficulty", "args": {"card_id": id, "difficulty": -2}}));
    assert_eq!(card["difficulty"], -2);
    assert_eq!(card["flipped"], true);
}

#[test]
fn test_unknown_card() {
    let ctx = TestContext::new();
    let kind = ctx.err_kind(json!({
        "command": "flip_card",
        "args": {"card_id": "00000000-0000-0000-0000-000000000000"}
    }));
    assert_eq!(kind, "not_found");
}

#[test]
fn test_shuffle_then_close_restores_order() {
    let ctx = TestContext::new();
    let original = ctx.deck_words("SpanishDeck3");

    let session = ctx.ok(json!({"command": "open_deck", "args": {"name": "SpanishDeck3"}}));
    let handle = session["handle"].clone();

    let shuffled = ctx.ok(json!({"command": "shuffle_deck", "args": {"handle": handle}}));
    let mut shuffled_words: Vec<String> = shuffled["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["word"].as_str().unwrap().to_string())
        .collect();
    assert_ne!(shuffled_words, original);
    assert_eq!(ctx.deck_words("SpanishDeck3"), shuffled_words);

    // favorite a card while shuffled; it must survive the restore
    let id = shuffled["cards"][0]["id"].clone();
    ctx.ok(json!({"command": "toggle_favorite", "args": {"card_id": id}}));

    ctx.ok(json!({"command": "close_deck", "args": {"handle": handle}}));
    assert_eq!(ctx.deck_words("SpanishDeck3"), original);

    let mut sorted = original.clone();
    sorted.sort();
    shuffled_words.sort();
    assert_eq!(shuffled_words, sorted);

    let favorites = ctx.ok(json!({"command": "list_favorites"}));
    assert_eq!(favorites.as_array().unwrap().len(), 1);

    let kind = ctx.err_kind(json!({"command": "shuffle_deck", "args": {"handle": handle}}));
    assert_eq!(kind, "not_found");
}

#[test]
fn test_end_session_closes_display() {
    let ctx = TestContext::new();
    let original = ctx.deck_words("LatinDeck");
    let session = ctx.ok(json!({"command": "open_deck", "args": {"name": "LatinDeck"}}));
    let handle = session["handle"].clone();

    ctx.ok(json!({"command": "shuffle_deck", "args": {"handle": handle}}));
    ctx.ok(json!({"command": "end_session", "args": {"handle": handle}}));
    assert_eq!(ctx.deck_words("LatinDeck"), original);
}

#[test]
fn test_overlapping_displays_restore_original_order() {
    let ctx = TestContext::new();
    let original = ctx.deck_words("SpanishDeck1");
    assert_eq!(&original[..3], &["Hablar", "Comer", "Beber"]);

    let first = ctx.ok(json!({"command": "open_deck", "args": {"name": "SpanishDeck1"}}));
    let first = first["handle"].clone();
    ctx.ok(json!({"command": "shuffle_deck", "args": {"handle": first}}));
    let shuffled = ctx.deck_words("SpanishDeck1");
    assert_ne!(shuffled, original);

    let second = ctx.ok(json!({"command": "open_deck", "args": {"name": "SpanishDeck1"}}));
    let second = second["handle"].clone();

    // the deck stays as browsed while another display is still open
    ctx.ok(json!({"command": "close_deck", "args": {"handle": first}}));
    assert_eq!(ctx.deck_words("SpanishDeck1"), shuffled);

    ctx.ok(json!({"command": "close_deck", "args": {"handle": second}}));
    assert_eq!(ctx.deck_words("SpanishDeck1"), original);
}

#[test]
fn test_close_unknown_display() {
    let ctx = TestContext::new();
    let kind = ctx.err_kind(json!({
        "command": "close_deck",
        "args": {"handle": "00000000-0000-0000-0000-000000000000"}
    }));
    assert_eq!(kind, "not_found");
}
