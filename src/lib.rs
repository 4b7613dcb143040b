//! Rewind Games library - terminal tic-tac-toe with a rewindable history.
//!
//! The game rules, history and controller live in [`rewind_tictactoe`];
//! this crate adds the presentation layer around them.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with display and logging settings
//! - **TUI**: ratatui board, status line and history list driven by key and
//!   mouse input
//! - **Replay**: headless playback of scripted events with a text or JSON
//!   report
//!
//! # Example
//!
//! ```
//! use rewind_games::replay;
//! use rewind_tictactoe::GameEvent;
//!
//! let events: Vec<GameEvent> = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .map(|index| GameEvent::CellActivated { index })
//!     .collect();
//! let report = replay(&events);
//! assert_eq!(report.status().to_string(), "winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigSource, UiConfig};

// Crate-level exports - Replay
pub use replay::{ReplayReport, ReplayStep, ReplayTokenError, ScriptEvent, replay};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    GameController, GameEvent, History, Mark, MoveOutcome, Position, RewindOutcome, Snapshot,
    Square, Status,
};
