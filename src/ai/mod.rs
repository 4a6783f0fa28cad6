//! Move selection for the automated opponent.

mod heuristic;

pub use heuristic::HeuristicSelector;

use crate::board::Board;
use crate::types::{Position, Side};

/// Seam between the game loop and the opponent's move choice.
pub trait MoveSelector: Send + Sync {
    /// Picks a move for `side`.
    /// Caller contract: `board` must have at least one legal move for `side`.
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position>;
}
