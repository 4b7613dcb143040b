//! Step pointer invariant: the displayed step exists.

use super::Invariant;
use crate::GameController;

/// Invariant: `0 <= step < history.len()`.
pub struct StepInBounds;

impl Invariant<GameController> for StepInBounds {
    fn holds(game: &GameController) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer selects an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameController::new();
        game.apply_move(0);
        game.apply_move(1);
        assert!(StepInBounds::holds(&game));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut game = GameController::new();
        game.step = 1;
        assert!(!StepInBounds::holds(&game));
    }
}
