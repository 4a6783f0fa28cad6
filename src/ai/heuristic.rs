use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::MoveSelector;
use crate::board::Board;
use crate::types::{Position, Side};

/// Two-tier opponent: take a corner whenever one is available, otherwise
/// play the move that maximizes own disc count one ply ahead. No deeper
/// lookahead, no positional weight table.
pub struct HeuristicSelector {
    rng: SmallRng,
}

impl HeuristicSelector {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic selector for tests and reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for HeuristicSelector {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        let mut moves = board.legal_moves(side);
        debug_assert!(
            !moves.is_empty(),
            "select_move() requires at least one legal move"
        );

        // Shuffling first removes positional bias among equally ranked
        // moves; a tie among several legal corners comes out uniform.
        moves.shuffle(&mut self.rng);

        if let Some(&corner) = moves.iter().find(|pos| pos.is_corner()) {
            return Some(corner);
        }

        let mut best: Option<Position> = None;
        let mut best_count = 0;
        for &mv in &moves {
            let mut lookahead = *board;
            let flipped = lookahead.apply(side, mv.col, mv.row);
            debug_assert!(!flipped.is_empty(), "enumerated move must apply cleanly");

            // Strictly-greater keeps the earliest of tied moves in
            // shuffled order.
            let count = lookahead.score().of(side);
            if count > best_count {
                best = Some(mv);
                best_count = count;
            }
        }

        best
    }
}
