//! Immutable board snapshots and the append-only history they form.

use crate::rules::check_winner;
use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A board captured at one point in the game.
///
/// Snapshots are never edited; a move yields a new snapshot via
/// [`Snapshot::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
}

impl Snapshot {
    /// The empty starting board.
    pub fn empty() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the captured board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns a copy of this snapshot with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut board = self.board;
        board.set(pos, Square::Occupied(mark));
        Self { board }
    }

    /// Winner on this snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(&self.board)
    }
}

impl From<Board> for Snapshot {
    fn from(board: Board) -> Self {
        Self { board }
    }
}

/// Ordered snapshots of one game session.
///
/// Index 0 is always the empty board and index `n` is the board after `n`
/// moves. The history is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
        }
    }

    /// Number of snapshots (moves played on the longest branch plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the last snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Iterates snapshots from the game start.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Labels for every entry, in order.
    pub fn labels(&self) -> Vec<String> {
        (0..self.len()).map(step_label).collect()
    }

    /// Drops every snapshot after `step` and appends `next`.
    ///
    /// Returns the index of the appended snapshot.
    pub(crate) fn branch(&mut self, step: usize, next: Snapshot) -> usize {
        self.snapshots.truncate(step + 1);
        self.snapshots.push(next);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for History {
    type Output = Snapshot;

    fn index(&self, step: usize) -> &Snapshot {
        &self.snapshots[step]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Label of the history entry for `step`.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], Snapshot::empty());
        assert_eq!(history[0].board().occupied(), 0);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let start = Snapshot::empty();
        let next = start.with_mark(Position::Center, Mark::X);
        assert_eq!(start.square(Position::Center), Square::Empty);
        assert_eq!(next.square(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_branch_truncates_future() {
        let mut history = History::new();
        let a = history[0].with_mark(Position::TopLeft, Mark::X);
        history.branch(0, a);
        let b = a.with_mark(Position::Center, Mark::O);
        history.branch(1, b);
        assert_eq!(history.len(), 3);

        let c = history[0].with_mark(Position::BottomRight, Mark::X);
        assert_eq!(history.branch(0, c), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history[1], c);
    }

    #[test]
    fn test_labels() {
        assert_eq!(step_label(0), "Go to game start");
        assert_eq!(step_label(3), "Go to move #3");
        assert_eq!(History::new().labels(), vec!["Go to game start".to_string()]);
    }
}
