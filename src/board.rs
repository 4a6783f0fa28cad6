use crate::types::{Position, Score, Side};

pub const BOARD_SIZE: usize = 8;
const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Snapshot encoding: 0=empty, 1=black, 2=white.
    fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// Reversi board: an 8x8 grid of cells addressed by `(col, row)`.
///
/// `Copy`, so AI lookahead works on throwaway copies that share no state
/// with the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Creates the initial board:
    /// black on (3,3) and (4,4), white on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; NUM_CELLS],
        };
        board.put(3, 3, Cell::Black);
        board.put(3, 4, Cell::White);
        board.put(4, 3, Cell::White);
        board.put(4, 4, Cell::Black);
        board
    }

    pub fn cell(&self, col: u8, row: u8) -> Cell {
        debug_assert!(on_board(col as i32, row as i32));
        self.cells[index(col, row)]
    }

    /// Returns the opposing discs that placing `side` at `(col, row)` would
    /// capture. An empty result means the move is illegal: the target is
    /// off-board, occupied, or flips nothing.
    ///
    /// Takes `&self`; probing legality never changes the board.
    pub fn captures_for(&self, side: Side, col: u8, row: u8) -> Vec<Position> {
        if !on_board(col as i32, row as i32) || self.cell(col, row) != Cell::Empty {
            return Vec::new();
        }

        let own = Cell::from(side);
        let opp = Cell::from(side.opponent());
        let mut captured = Vec::new();

        for (dc, dr) in DIRECTIONS {
            let mut c = col as i32 + dc;
            let mut r = row as i32 + dr;
            let mut run = Vec::new();

            // Phase one: walk over the opposing run.
            while on_board(c, r) && self.at(c, r) == opp {
                run.push(Position::new(c as u8, r as u8));
                c += dc;
                r += dr;
            }

            // Phase two: the run counts only if it ends on an own disc.
            // Off-board or an empty cell closes the direction without captures.
            if !run.is_empty() && on_board(c, r) && self.at(c, r) == own {
                captured.append(&mut run);
            }
        }

        captured
    }

    /// Returns every legal move for `side`, probing all 64 cells in
    /// row-major order. Stable: each legal cell appears exactly once.
    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if !self.captures_for(side, col, row).is_empty() {
                    moves.push(Position::new(col, row));
                }
            }
        }
        moves
    }

    /// Places a disc for `side` and flips the captured discs.
    /// Returns the flipped positions; an empty result means the move was
    /// illegal and the board is unchanged.
    ///
    /// The only mutator of board contents after the initial layout.
    pub fn apply(&mut self, side: Side, col: u8, row: u8) -> Vec<Position> {
        let captured = self.captures_for(side, col, row);
        if captured.is_empty() {
            return captured;
        }

        let own = Cell::from(side);
        self.put(col, row, own);
        for pos in &captured {
            self.put(pos.col, pos.row, own);
        }

        captured
    }

    /// Live disc counts, recomputed from the grid.
    pub fn score(&self) -> Score {
        let mut black = 0;
        let mut white = 0;
        for cell in self.cells {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        Score { black, white }
    }

    pub fn empty_count(&self) -> u8 {
        let score = self.score();
        NUM_CELLS as u8 - score.black - score.white
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// The game is over when the board is full or neither side has a legal
    /// move. The second condition stands on its own: a board that is not
    /// full but leaves both sides stuck is terminal, not a stall.
    pub fn is_terminal(&self) -> bool {
        self.is_full()
            || (self.legal_moves(Side::Black).is_empty()
                && self.legal_moves(Side::White).is_empty())
    }

    /// Converts the grid to row-major `[u8; 64]` (0=empty, 1=black, 2=white).
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut out = [0u8; NUM_CELLS];
        for (cell, slot) in self.cells.iter().zip(out.iter_mut()) {
            *slot = cell.code();
        }
        out
    }

    fn at(&self, col: i32, row: i32) -> Cell {
        debug_assert!(on_board(col, row));
        self.cells[index(col as u8, row as u8)]
    }

    fn put(&mut self, col: u8, row: u8, cell: Cell) {
        self.cells[index(col, row)] = cell;
    }

    #[cfg(test)]
    pub(crate) fn from_cells(black: &[(u8, u8)], white: &[(u8, u8)]) -> Self {
        let mut board = Self {
            cells: [Cell::Empty; NUM_CELLS],
        };
        for &(col, row) in black {
            board.put(col, row, Cell::Black);
        }
        for &(col, row) in white {
            board.put(col, row, Cell::White);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn index(col: u8, row: u8) -> usize {
    row as usize * BOARD_SIZE + col as usize
}

fn on_board(col: i32, row: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row)
}
