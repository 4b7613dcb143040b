//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from history
//! storage so the controller, the status line and the invariants all read
//! the same verdict.

pub mod win;

pub use win::check_winner;
