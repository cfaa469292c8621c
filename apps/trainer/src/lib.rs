pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{dispatch, Reply, Request};
use crate::config::TrainerConfig;
use crate::error::CommandError;
use crate::state::AppState;

pub use crate::state::SessionHandle;

/// Serve JSON requests on stdin, one per line, replying on stdout.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = TrainerConfig::from_env()?;

    // stdout carries replies, so logs go to stderr
    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(seeded = config.seed.is_some(), "starting vocab trainer");
    let state = AppState::builtin(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&state, stdin.lock(), stdout.lock())?;

    tracing::info!("input closed, shutting down");
    Ok(())
}

/// Answer every request line from `input` with one reply line on `output`.
/// Blank lines are skipped; malformed requests get an `invalid_input` reply.
pub fn serve<R: BufRead, W: Write>(state: &AppState, input: R, mut output: W) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                tracing::debug!(?request, "dispatching");
                dispatch(state, request)
            }
            Err(e) => Reply::from(CommandError::InvalidInput(e.to_string())),
        };

        serde_json::to_writer(&mut output, &reply)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
    Ok(())
}
