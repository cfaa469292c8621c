//! Matching game and sentence walkthrough commands.

use crate::error::{CommandError, Result};
use crate::state::{AppState, SessionHandle};
use serde::Serialize;
use vocab_core::{
    Advance, AnswerOutcome, GameProgress, GameSummary, MatchingCorpus, MatchingGame, Prompt,
    SentenceCorpus, SentenceView, SentenceWalkthrough,
};

#[derive(Debug, Clone, Serialize)]
pub struct GameStarted {
    pub handle: SessionHandle,
    pub progress: GameProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub outcome: AnswerOutcome,
    pub progress: GameProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: GameSummary,
    /// Human-readable report.
    pub report: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalkthroughStarted {
    pub handle: SessionHandle,
    pub sentence_count: usize,
}

/// Start a matching game over the built-in corpus.
pub fn start_matching_game(state: &AppState) -> Result<GameStarted> {
    start_matching_game_with(state, MatchingCorpus::builtin())
}

pub fn start_matching_game_with(state: &AppState, corpus: MatchingCorpus) -> Result<GameStarted> {
    let mut sessions = state.sessions()?;
    let game = MatchingGame::start_seeded(corpus, state.next_seed()?);
    let progress = game.progress();

    let handle = SessionHandle::new();
    sessions.games.insert(handle, game);
    tracing::info!(%handle, tokens = progress.total_tokens, "started matching game");

    Ok(GameStarted { handle, progress })
}

/// The prompt to display. Choice order changes per call.
pub fn current_prompt(state: &AppState, handle: SessionHandle) -> Result<Prompt> {
    let mut sessions = state.sessions()?;
    let prompt = sessions.game_mut(handle)?.current_prompt()?;
    Ok(prompt)
}

pub fn submit_answer(state: &AppState, handle: SessionHandle, choice: &str) -> Result<AnswerResponse> {
    let mut sessions = state.sessions()?;
    let game = sessions.game_mut(handle)?;
    let outcome = game.submit_answer(choice)?;
    tracing::debug!(%handle, correct = outcome.correct, "answer submitted");
    Ok(AnswerResponse {
        outcome,
        progress: game.progress(),
    })
}

pub fn game_summary(state: &AppState, handle: SessionHandle) -> Result<SummaryResponse> {
    let mut sessions = state.sessions()?;
    let summary = sessions.game_mut(handle)?.summary()?;
    Ok(SummaryResponse {
        report: summary.to_string(),
        summary,
    })
}

/// Start the built-in sentence walkthrough.
pub fn start_walkthrough(state: &AppState) -> Result<WalkthroughStarted> {
    start_walkthrough_with(state, SentenceCorpus::builtin())
}

pub fn start_walkthrough_with(state: &AppState, corpus: SentenceCorpus) -> Result<WalkthroughStarted> {
    let mut sessions = state.sessions()?;
    let walkthrough = SentenceWalkthrough::start(corpus);
    let sentence_count = walkthrough.len();

    let handle = SessionHandle::new();
    sessions.walkthroughs.insert(handle, walkthrough);
    tracing::info!(%handle, sentences = sentence_count, "started walkthrough");

    Ok(WalkthroughStarted {
        handle,
        sentence_count,
    })
}

pub fn current_sentence(state: &AppState, handle: SessionHandle) -> Result<SentenceView> {
    let mut sessions = state.sessions()?;
    let sentence = sessions.walkthrough_mut(handle)?.current()?;
    Ok(sentence)
}

pub fn advance_sentence(state: &AppState, handle: SessionHandle) -> Result<Advance> {
    let mut sessions = state.sessions()?;
    let advance = sessions.walkthrough_mut(handle)?.advance();
    Ok(advance)
}

/// Discard a session of any kind.
///
/// Deck displays are closed first so the deck gets its order back.
pub fn end_session(state: &AppState, handle: SessionHandle) -> Result<()> {
    let is_display = state.sessions()?.displays.contains_key(&handle);
    if is_display {
        super::deck::close_deck(state, handle)?;
        return Ok(());
    }

    if state.sessions()?.remove(handle) {
        tracing::debug!(%handle, "ended session");
        Ok(())
    } else {
        Err(CommandError::NotFound(format!("session {handle}")))
    }
}
