use serde::Serialize;

/// One of the two players. Behavior differences between the human and the
/// automated side are a branch in `game`, not polymorphism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Numeric code used in serialized snapshots: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Side::Black => 1,
            Side::White => 2,
        }
    }
}

/// A board coordinate, `(col, row)` with both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// A disc placed on a corner can never be captured.
    pub fn is_corner(self) -> bool {
        (self.col == 0 || self.col == 7) && (self.row == 0 || self.row == 7)
    }
}

/// Disc counts per side, recomputed from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    pub fn of(self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells (`index = row * 8 + col`), 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the opponent of the last mover had to pass.
    /// - `false` after a normal turn change or at game over.
    pub is_pass: bool,
    /// Positions flipped by the last move; empty before the first move.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Winner code (1=black, 2=white) or 0 for a draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
