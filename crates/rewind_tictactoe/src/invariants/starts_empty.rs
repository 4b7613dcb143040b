//! Starting snapshot invariant.

use super::Invariant;
use crate::{GameController, Snapshot};

/// Invariant: snapshot 0 is the empty board.
pub struct StartsEmpty;

impl Invariant<GameController> for StartsEmpty {
    fn holds(game: &GameController) -> bool {
        game.history().get(0) == Some(&Snapshot::empty())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_holds_for_new_game() {
        assert!(StartsEmpty::holds(&GameController::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut game = GameController::new();
        game.history.snapshots[0] = Snapshot::empty().with_mark(Position::Center, Mark::X);
        assert!(!StartsEmpty::holds(&game));
    }
}
