//! Multiple-choice word matching game.
//!
//! Each source-language token of each sentence is shown with three candidate
//! translations. Every submitted answer is scored and the cursor moves on;
//! there is no retry. Once the last token of the last sentence is answered
//! the game is completed and a summary is available.

use crate::corpus::MatchingCorpus;
use crate::error::{Result, VocabError};
use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    Completed,
}

/// The token to translate and its candidate answers, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub source_token: String,
    pub choices: [String; 3],
    pub sentence_index: usize,
    pub word_index: usize,
}

/// Result of a single submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub expected: String,
    /// Whether this answer finished the game.
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    pub sentence_index: usize,
    pub word_index: usize,
    pub total_sentences: usize,
    pub answered: usize,
    pub total_tokens: usize,
}

/// End-of-game report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub elapsed_millis: i64,
    /// Source tokens answered wrong, in answer order.
    pub incorrect_words: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Completed!")?;
        writeln!(f, "Correct Answers: {}", self.correct_count)?;
        writeln!(f, "Incorrect Answers: {}", self.incorrect_count)?;
        writeln!(f, "Total Time Taken: {} seconds", self.elapsed_millis / 1000)?;
        if !self.incorrect_words.is_empty() {
            writeln!(f, "Incorrect Words: {}", self.incorrect_words.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MatchingGame {
    corpus: MatchingCorpus,
    sentence_index: usize,
    word_index: usize,
    correct_count: usize,
    incorrect_count: usize,
    incorrect_words: Vec<String>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    rng: SmallRng,
}

impl MatchingGame {
    /// Start a game; choice order is drawn from entropy.
    pub fn start(corpus: MatchingCorpus) -> Self {
        Self::with_rng(corpus, SmallRng::from_entropy())
    }

    /// Start a game with reproducible choice order.
    pub fn start_seeded(corpus: MatchingCorpus, seed: u64) -> Self {
        Self::with_rng(corpus, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(corpus: MatchingCorpus, rng: SmallRng) -> Self {
        let started_at = Utc::now();
        // An empty corpus has nothing to answer.
        let ended_at = corpus.is_empty().then_some(started_at);
        Self {
            corpus,
            sentence_index: 0,
            word_index: 0,
            correct_count: 0,
            incorrect_count: 0,
            incorrect_words: Vec::new(),
            started_at,
            ended_at,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        if self.sentence_index >= self.corpus.len() {
            GameState::Completed
        } else {
            GameState::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == GameState::Completed
    }

    /// The current token with its choices shuffled.
    ///
    /// Choice order is redrawn on every call; callers should fetch once per
    /// prompt and keep the result for display.
    pub fn current_prompt(&mut self) -> Result<Prompt> {
        let (s, w) = (self.sentence_index, self.word_index);
        let source_token = self.corpus.token(s, w).ok_or(VocabError::GameCompleted)?;
        let mut choices = self
            .corpus
            .choices(s, w)
            .ok_or(VocabError::GameCompleted)?
            .clone();
        choices.shuffle(&mut self.rng);

        Ok(Prompt {
            source_token: source_token.to_string(),
            choices,
            sentence_index: s,
            word_index: w,
        })
    }

    /// Score an answer against the current token and advance.
    ///
    /// Matching is exact string equality. A wrong answer logs the source
    /// token, not the answer given.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome> {
        let (s, w) = (self.sentence_index, self.word_index);
        let expected = self
            .corpus
            .translation(s, w)
            .ok_or(VocabError::GameCompleted)?
            .to_string();
        let correct = selected == expected;

        if correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
            if let Some(token) = self.corpus.token(s, w) {
                self.incorrect_words.push(token.to_string());
            }
        }

        self.word_index += 1;
        if self.word_index >= self.corpus.sentence_len(s) {
            self.word_index = 0;
            self.sentence_index += 1;
        }

        let completed = self.is_completed();
        if completed {
            self.ended_at = Some(Utc::now());
            tracing::info!(
                correct = self.correct_count,
                incorrect = self.incorrect_count,
                "matching game completed"
            );
        }

        Ok(AnswerOutcome {
            correct,
            expected,
            completed,
        })
    }

    pub fn progress(&self) -> GameProgress {
        GameProgress {
            sentence_index: self.sentence_index,
            word_index: self.word_index,
            total_sentences: self.corpus.len(),
            answered: self.correct_count + self.incorrect_count,
            total_tokens: self.corpus.total_tokens(),
        }
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    pub fn incorrect_words(&self) -> &[String] {
        &self.incorrect_words
    }

    /// Final report; only available once the game is completed.
    pub fn summary(&self) -> Result<GameSummary> {
        let ended_at = self.ended_at.ok_or(VocabError::GameNotCompleted)?;
        Ok(GameSummary {
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            elapsed_millis: (ended_at - self.started_at).num_milliseconds().max(0),
            incorrect_words: self.incorrect_words.clone(),
            started_at: self.started_at,
            ended_at,
        })
    }
}
