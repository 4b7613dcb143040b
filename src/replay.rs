//! Headless replay of a scripted sequence of game events.
//!
//! A script is a list of tokens: a digit `0`-`8` activates that cell and
//! `@k` selects history entry `k`. Ignored events are recorded in the
//! report, never treated as failures.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{Board, GameController, GameEvent, Status};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// One scripted event and what the controller did with it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ReplayStep {
    /// The dispatched event.
    event: GameEvent,
    /// Human-readable outcome.
    outcome: String,
    /// Whether the event was absorbed without effect.
    ignored: bool,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ReplayReport {
    /// Every event in script order.
    steps: Vec<ReplayStep>,
    /// Displayed step at the end.
    step: usize,
    /// Displayed board at the end.
    board: Board,
    /// Status line for the displayed board.
    status: Status,
    /// History entry labels.
    history: Vec<String>,
}

impl ReplayReport {
    /// Renders the report as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("{:>3}. {:<12} {}\n", i + 1, step.event.to_string(), step.outcome));
        }
        if !self.steps.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        out.push_str(&self.status.to_string());
        out.push_str("\n\n");
        for (i, label) in self.history.iter().enumerate() {
            let marker = if i == self.step { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, i + 1, label));
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Applies `events` to a fresh game and reports the result.
#[instrument(skip(events), fields(event_count = events.len()))]
pub fn replay(events: &[GameEvent]) -> ReplayReport {
    let mut game = GameController::new();
    let steps = events
        .iter()
        .map(|event| {
            let outcome = game.dispatch(*event);
            debug!(%event, %outcome, "Replayed event");
            ReplayStep {
                event: *event,
                outcome: outcome.to_string(),
                ignored: outcome.is_ignored(),
            }
        })
        .collect();

    info!(step = game.step(), status = %game.status(), "Replay finished");

    ReplayReport {
        steps,
        step: game.step(),
        board: *game.current().board(),
        status: game.status(),
        history: game.history().labels(),
    }
}

/// A replay script token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid replay token '{}': expected a cell index like 4 or a history step like @2", token)]
pub struct ReplayTokenError {
    /// The offending token.
    pub token: String,
}

/// Script token wrapper so clap can parse events directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptEvent(pub GameEvent);

impl FromStr for ScriptEvent {
    type Err = ReplayTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let error = || ReplayTokenError {
            token: token.to_string(),
        };
        let event = match token.strip_prefix('@') {
            Some(step) => GameEvent::HistorySelected {
                step: step.parse().map_err(|_| error())?,
            },
            None => GameEvent::CellActivated {
                index: token.parse().map_err(|_| error())?,
            },
        };
        Ok(ScriptEvent(event))
    }
}
