//! Commands exposed to the UI layer.
//!
//! A UI sends one [`Request`] per user action and renders the [`Reply`].

pub mod deck;
pub mod study;

pub use deck::{
    close_deck, flip_card, get_deck, list_decks, list_favorites, open_deck, set_difficulty,
    shuffle_deck, toggle_favorite, DeckView, DisplaySession,
};
pub use study::{
    advance_sentence, current_prompt, current_sentence, end_session, game_summary,
    start_matching_game, start_walkthrough, submit_answer, AnswerResponse, GameStarted,
    SummaryResponse, WalkthroughStarted,
};

use crate::error::{CommandError, Result};
use crate::state::{AppState, SessionHandle};
use serde::{Deserialize, Serialize};
use vocab_core::CardId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Request {
    ListDecks,
    GetDeck { name: String },
    ListFavorites,
    ToggleFavorite { card_id: CardId },
    FlipCard { card_id: CardId },
    SetDifficulty { card_id: CardId, difficulty: i32 },
    OpenDeck { name: String },
    ShuffleDeck { handle: SessionHandle },
    CloseDeck { handle: SessionHandle },
    StartMatchingGame,
    CurrentPrompt { handle: SessionHandle },
    SubmitAnswer { handle: SessionHandle, choice: String },
    GameSummary { handle: SessionHandle },
    StartWalkthrough,
    CurrentSentence { handle: SessionHandle },
    AdvanceSentence { handle: SessionHandle },
    EndSession { handle: SessionHandle },
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reply {
    Ok { data: serde_json::Value },
    Error { error: CommandError },
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Ok { .. })
    }
}

impl From<CommandError> for Reply {
    fn from(error: CommandError) -> Self {
        Reply::Error { error }
    }
}

/// Run a request against the application state.
pub fn dispatch(state: &AppState, request: Request) -> Reply {
    match request {
        Request::ListDecks => respond(list_decks(state)),
        Request::GetDeck { name } => respond(get_deck(state, &name)),
        Request::ListFavorites => respond(list_favorites(state)),
        Request::ToggleFavorite { card_id } => respond(toggle_favorite(state, card_id)),
        Request::FlipCard { card_id } => respond(flip_card(state, card_id)),
        Request::SetDifficulty {
            card_id,
            difficulty,
        } => respond(set_difficulty(state, card_id, difficulty)),
        Request::OpenDeck { name } => respond(open_deck(state, &name)),
        Request::ShuffleDeck { handle } => respond(shuffle_deck(state, handle)),
        Request::CloseDeck { handle } => respond(close_deck(state, handle)),
        Request::StartMatchingGame => respond(start_matching_game(state)),
        Request::CurrentPrompt { handle } => respond(current_prompt(state, handle)),
        Request::SubmitAnswer { handle, choice } => respond(submit_answer(state, handle, &choice)),
        Request::GameSummary { handle } => respond(game_summary(state, handle)),
        Request::StartWalkthrough => respond(start_walkthrough(state)),
        Request::CurrentSentence { handle } => respond(current_sentence(state, handle)),
        Request::AdvanceSentence { handle } => respond(advance_sentence(state, handle)),
        Request::EndSession { handle } => respond(end_session(state, handle)),
    }
}

fn respond<T: Serialize>(result: Result<T>) -> Reply {
    let value = result.and_then(|data| {
        serde_json::to_value(data).map_err(|e| CommandError::Internal(e.to_string()))
    });
    match value {
        Ok(data) => Reply::Ok { data },
        Err(error) => {
            tracing::warn!(kind = error.kind(), "{error}");
            Reply::Error { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_and_struct_requests() {
        let request: Request = serde_json::from_str(r#"{"command":"list_decks"}"#).unwrap();
        assert_eq!(request, Request::ListDecks);

        let request: Request =
            serde_json::from_str(r#"{"command":"get_deck","args":{"name":"LatinDeck"}}"#).unwrap();
        assert_eq!(
            request,
            Request::GetDeck {
                name: "LatinDeck".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_command() {
        let result = serde_json::from_str::<Request>(r#"{"command":"delete_everything"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn error_reply_shape() {
        let reply = Reply::from(CommandError::NotFound("deck X".to_string()));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["error"], "not_found");
    }
}
