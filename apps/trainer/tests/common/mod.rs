//! Common test utilities for trainer integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use vocab_trainer::commands::{dispatch, Reply, Request};
use vocab_trainer::config::TrainerConfig;
use vocab_trainer::state::AppState;

/// Fresh application state over the built-in decks with a fixed seed.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let config = TrainerConfig {
            seed: Some(1234),
            ..TrainerConfig::default()
        };
        Self {
            state: AppState::builtin(&config),
        }
    }

    /// Dispatch a request given as JSON and return the reply as JSON.
    pub fn call(&self, request: Value) -> Value {
        let request: Request = serde_json::from_value(request).expect("valid request");
        let reply: Reply = dispatch(&self.state, request);
        serde_json::to_value(&reply).expect("serializable reply")
    }

    /// Dispatch and return `data`, panicking on an error reply.
    pub fn ok(&self, request: Value) -> Value {
        let reply = self.call(request.clone());
        assert_eq!(reply["status"], "ok", "request {request} failed: {reply}");
        reply["data"].clone()
    }

    /// Dispatch and return the error kind, panicking on success.
    pub fn err_kind(&self, request: Value) -> String {
        let reply = self.call(request.clone());
        assert_eq!(reply["status"], "error", "request {request} succeeded: {reply}");
        reply["error"]["error"].as_str().unwrap_or_default().to_string()
    }

    pub fn deck_words(&self, name: &str) -> Vec<String> {
        let deck = self.ok(json!({"command": "get_deck", "args": {"name": name}}));
        deck["cards"]
            .as_array()
            .expect("cards array")
            .iter()
            .map(|c| c["word"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
