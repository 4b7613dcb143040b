//! Status line derived from the displayed snapshot.

use crate::{Mark, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The snapshot has a complete line.
    #[display("winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; `Mark` moves next.
    #[display("next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Derives the status of `snapshot` when `next` is the mark to move.
    #[instrument(level = "trace", skip(snapshot))]
    pub fn of(snapshot: &Snapshot, next: Mark) -> Self {
        match snapshot.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(next),
        }
    }

    /// Winner, if the status reports one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Winner(mark) => Some(*mark),
            Status::NextPlayer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_next_player_text() {
        let status = Status::of(&Snapshot::empty(), Mark::O);
        assert_eq!(status.to_string(), "next player: O");
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_winner_overrides_next_player() {
        let snapshot = Snapshot::empty()
            .with_mark(Position::TopRight, Mark::O)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        let status = Status::of(&snapshot, Mark::X);
        assert_eq!(status, Status::Winner(Mark::O));
        assert_eq!(status.to_string(), "winner: O");
    }
}
