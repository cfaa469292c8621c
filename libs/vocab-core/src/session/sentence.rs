//! Guided sentence walkthrough: show one English sentence and its
//! source-language tokens at a time. Nothing is scored.

use crate::corpus::SentenceCorpus;
use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkthroughState {
    Active,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceView {
    pub index: usize,
    pub english: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct SentenceWalkthrough {
    corpus: SentenceCorpus,
    index: usize,
}

impl SentenceWalkthrough {
    /// Start at the first sentence. An empty corpus is finished immediately.
    pub fn start(corpus: SentenceCorpus) -> Self {
        Self { corpus, index: 0 }
    }

    pub fn state(&self) -> WalkthroughState {
        if self.index < self.corpus.len() {
            WalkthroughState::Active
        } else {
            WalkthroughState::Finished
        }
    }

    pub fn current(&self) -> Result<SentenceView> {
        let (english, tokens) = self
            .corpus
            .get(self.index)
            .ok_or(VocabError::WalkthroughFinished)?;
        Ok(SentenceView {
            index: self.index,
            english: english.to_string(),
            tokens: tokens.to_vec(),
        })
    }

    /// Move to the next sentence. Advancing past the end reports
    /// `finished` and keeps reporting it on later calls.
    pub fn advance(&mut self) -> Advance {
        if self.index < self.corpus.len() {
            self.index += 1;
            if self.index == self.corpus.len() {
                tracing::info!(sentences = self.corpus.len(), "walkthrough finished");
            }
        }
        Advance {
            finished: self.state() == WalkthroughState::Finished,
        }
    }

    /// Index of the sentence on display; equals `len()` once finished.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}
