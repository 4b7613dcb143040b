//! Snapshot succession invariant: each snapshot is one legal move on from the previous.

use super::Invariant;
use crate::{GameController, Mark, Position, Snapshot, Square};
use strum::IntoEnumIterator;

/// Invariant: snapshot `n + 1` equals snapshot `n` plus exactly one newly
/// occupied square holding the mark for step `n`.
///
/// Earlier squares never change, so marks alternate X, O, X, ... down the
/// whole history.
pub struct SnapshotsAdvanceByOne;

fn advances_by_one(before: &Snapshot, after: &Snapshot, mark: Mark) -> bool {
    let mut added = 0;
    for pos in Position::iter() {
        match (before.square(pos), after.square(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(m)) if m == mark => added += 1,
            _ => return false,
        }
    }
    added == 1
}

impl Invariant<GameController> for SnapshotsAdvanceByOne {
    fn holds(game: &GameController) -> bool {
        let snapshots: Vec<&Snapshot> = game.history().iter().collect();
        snapshots
            .windows(2)
            .enumerate()
            .all(|(n, pair)| advances_by_one(pair[0], pair[1], Mark::for_step(n)))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, alternating X and O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_holds() {
        assert!(SnapshotsAdvanceByOne::holds(&GameController::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = GameController::new();
        for index in [4, 0, 8, 2, 6] {
            game.apply_move(index);
        }
        assert_eq!(game.history().len(), 6);
        assert!(SnapshotsAdvanceByOne::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut game = GameController::new();
        game.apply_move(0);
        let forged = game.current().with_mark(Position::Center, Mark::X);
        game.history.snapshots.push(forged);
        assert!(!SnapshotsAdvanceByOne::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = GameController::new();
        let forged = Snapshot::empty()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::X);
        game.history.snapshots.push(forged);
        assert!(!SnapshotsAdvanceByOne::holds(&game));
    }
}
