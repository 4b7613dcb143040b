//! The game controller: sole owner of the history and the step pointer.
//!
//! Illegal input is absorbed. Every operation returns an outcome value that
//! names what happened, and an ignored outcome leaves the state untouched.

use crate::event::{EventOutcome, GameEvent, IgnoreReason, MoveOutcome, RewindOutcome};
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{History, Mark, Position, Snapshot, Status};
use tracing::{debug, instrument, warn};

/// Owns one game session.
///
/// The displayed snapshot is `history[step]`. The mark to move is derived
/// from the parity of `step`, so rewinding also rewinds the turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameController {
    pub(crate) history: History,
    pub(crate) step: usize,
}

impl GameController {
    /// Creates a session at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// All snapshots recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Mark that moves next on the displayed snapshot.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Winner on the displayed snapshot.
    pub fn winner(&self) -> Option<Mark> {
        self.current().winner()
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> Status {
        Status::of(self.current(), self.next_mark())
    }

    /// Places the next mark at board `index` (0-8).
    ///
    /// Ignored when the index is off the board, the square is occupied, or
    /// the displayed snapshot already has a winner. Otherwise any snapshots
    /// after the displayed one are discarded, the new snapshot is appended,
    /// and the step pointer moves to it.
    #[instrument(skip(self), fields(step = self.step, history_len = self.history.len()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Move off the board ignored");
            return MoveOutcome::Ignored(IgnoreReason::OffBoard(index));
        };

        let current = *self.current();
        if let Some(winner) = current.winner() {
            debug!(%winner, "Move on a won board ignored");
            return MoveOutcome::Ignored(IgnoreReason::AlreadyWon(winner));
        }
        if !current.board().is_empty(position) {
            debug!(%position, "Move on occupied square ignored");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let mark = self.next_mark();
        let discarded = self.history.last_step() - self.step;
        if discarded > 0 {
            debug!(discarded, "Overwriting redo branch");
        }
        self.step = self.history.branch(self.step, current.with_mark(position, mark));

        self.assert_invariants();
        debug!(%mark, %position, step = self.step, "Move applied");

        MoveOutcome::Placed {
            mark,
            position,
            step: self.step,
        }
    }

    /// Displays the snapshot at `step`.
    ///
    /// Ignored when `step` is past the end of the history. The history itself
    /// is kept; later snapshots are only dropped by the next move.
    #[instrument(skip(self), fields(from = self.step, history_len = self.history.len()))]
    pub fn rewind(&mut self, step: usize) -> RewindOutcome {
        let len = self.history.len();
        if step >= len {
            debug!("Rewind past history ignored");
            return RewindOutcome::Ignored(IgnoreReason::UnknownStep { step, len });
        }

        let from = self.step;
        self.step = step;
        debug!(next = %self.next_mark(), "Rewound");

        RewindOutcome::Rewound { from, to: step }
    }

    /// Routes a view event to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> EventOutcome {
        match event {
            GameEvent::CellActivated { index } => self.apply_move(index).into(),
            GameEvent::HistorySelected { step } => self.rewind(step).into(),
        }
    }

    /// Checks the history invariants in debug builds.
    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "History invariant violated");
            }
            debug_assert!(violations.is_empty(), "History invariants violated");
        }
    }
}
