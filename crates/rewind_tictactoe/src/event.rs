//! Input events and the outcomes the controller reports for them.
//!
//! Events are what the view emits; outcomes are what the controller did with
//! them. An ignored event is a normal outcome, never an error.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An event emitted by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A board cell was activated.
    #[display("cell {}", index)]
    CellActivated {
        /// Board index (0-8).
        index: usize,
    },
    /// A history entry was selected.
    #[display("history {}", step)]
    HistorySelected {
        /// History index to display.
        step: usize,
    },
}

/// Why an event left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The index does not name a board cell.
    #[display("index {} is not on the board", _0)]
    OffBoard(usize),

    /// The square is already occupied in the displayed snapshot.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("{} has already won", _0)]
    AlreadyWon(Mark),

    /// The step is past the end of the history.
    #[display("step {} is outside a history of {} snapshots", step, len)]
    UnknownStep {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },
}

/// Result of [`GameController::apply_move`](crate::GameController::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// A mark was placed and a snapshot appended.
    #[display("{} placed at {} (step {})", mark, position, step)]
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Step now displayed.
        step: usize,
    },
    /// Nothing changed.
    #[display("move ignored: {}", _0)]
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True when the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Result of [`GameController::rewind`](crate::GameController::rewind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RewindOutcome {
    /// The step pointer moved (possibly to where it already was).
    #[display("rewound from step {} to {}", from, to)]
    Rewound {
        /// Step displayed before.
        from: usize,
        /// Step displayed now.
        to: usize,
    },
    /// Nothing changed.
    #[display("rewind ignored: {}", _0)]
    Ignored(IgnoreReason),
}

/// Result of dispatching a [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::From)]
pub enum EventOutcome {
    /// Outcome of a cell activation.
    Move(MoveOutcome),
    /// Outcome of a history selection.
    Rewind(RewindOutcome),
}

impl EventOutcome {
    /// True when the event was absorbed without changing anything.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            EventOutcome::Move(MoveOutcome::Ignored(_))
                | EventOutcome::Rewind(RewindOutcome::Ignored(_))
        )
    }
}
