//! Pure tic-tac-toe logic with a browsable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: [`check_winner`] scans the eight lines in a fixed order
//! - **History**: immutable [`Snapshot`]s collected in a [`History`]
//! - **Controller**: [`GameController`] owns the history and step pointer,
//!   applies moves and rewinds, and absorbs illegal input
//! - **Status**: [`Status`] derives the status line from the displayed snapshot
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, GameEvent, Mark, Status};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.dispatch(GameEvent::CellActivated { index });
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.dispatch(GameEvent::HistorySelected { step: 0 });
//! assert_eq!(game.status().to_string(), "next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod event;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use controller::GameController;
pub use event::{EventOutcome, GameEvent, IgnoreReason, MoveOutcome, RewindOutcome};
pub use history::{History, Snapshot, step_label};
pub use position::Position;
pub use rules::check_winner;
pub use status::Status;
pub use types::{Board, Mark, Square};
