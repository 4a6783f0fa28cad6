use crate::ai::{HeuristicSelector, MoveSelector};
use crate::board::Board;
use crate::types::{GameResult, GameState, Position, Side};

/// One game session: the live board, whose turn it is, and which side is
/// automated.
///
/// Turn resolution is built in: after every accepted move the turn skips an
/// opponent with no reply (forced pass) and the game ends when neither side
/// can move. While the game is running, the current side always has at
/// least one legal move.
pub struct GameInstance {
    board: Board,
    current: Side,
    human: Side,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<Position>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    /// Fresh game with the default heuristic opponent. Black moves first;
    /// which side the human plays is decided before the game starts.
    pub fn new(human_side: Side) -> Self {
        Self::with_selector(human_side, Box::new(HeuristicSelector::new()))
    }

    pub fn with_selector(human_side: Side, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current: Side::Black,
            human: human_side,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            selector,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_game_over && self.current == self.human
    }

    /// Legal moves for the side to act, queried by the presentation layer
    /// to validate clicks or to gate the computer's turn.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current)
    }

    /// Plays the human's move at `(col, row)`.
    pub fn place(&mut self, col: u8, row: u8) -> Result<(), String> {
        if self.is_game_over {
            return Err("game is already over".to_string());
        }
        if self.current != self.human {
            return Err("it is not the player's turn".to_string());
        }

        self.apply_move(self.current, col, row)
    }

    /// Lets the selector pick and play the computer's move, returning it.
    /// The selection is checked against the legal set before it is applied.
    pub fn ai_move(&mut self) -> Result<Position, String> {
        if self.is_game_over {
            return Err("game is already over".to_string());
        }
        if self.current == self.human {
            return Err("it is not the computer's turn".to_string());
        }

        let legal = self.board.legal_moves(self.current);
        if legal.is_empty() {
            return Err("computer has no legal moves".to_string());
        }

        let selected = self
            .selector
            .select_move(&self.board, self.current)
            .ok_or_else(|| "selector returned no move".to_string())?;

        if !legal.contains(&selected) {
            return Err("selector chose an illegal move".to_string());
        }

        self.apply_move(self.current, selected.col, selected.row)?;
        Ok(selected)
    }

    pub fn to_game_state(&self) -> GameState {
        let score = self.board.score();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current.code(),
            black_count: score.black,
            white_count: score.white,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let score = self.board.score();
        GameResult {
            winner: if score.black > score.white {
                Side::Black.code()
            } else if score.white > score.black {
                Side::White.code()
            } else {
                0
            },
            black_count: score.black,
            white_count: score.white,
        }
    }

    fn apply_move(&mut self, side: Side, col: u8, row: u8) -> Result<(), String> {
        let flipped = self.board.apply(side, col, row);
        if flipped.is_empty() {
            return Err("illegal move".to_string());
        }
        self.flipped = flipped;

        let opponent = side.opponent();
        if !self.board.legal_moves(opponent).is_empty() {
            self.current = opponent;
            self.is_pass = false;
        } else if !self.board.legal_moves(side).is_empty() {
            // Forced pass: the opponent is stuck, the mover goes again.
            self.current = side;
            self.is_pass = true;
        } else {
            // Neither side can move; a full board always lands here too.
            self.is_game_over = true;
            self.is_pass = false;
        }

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current: Side) {
        self.board = board;
        self.current = current;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMoveSelector {
        mv: Position,
    }

    impl MoveSelector for FixedMoveSelector {
        fn select_move(&mut self, _board: &Board, _side: Side) -> Option<Position> {
            Some(self.mv)
        }
    }

    fn human_black() -> GameInstance {
        GameInstance::new(Side::Black)
    }

    #[test]
    fn initial_state_is_correct() {
        let game = human_black();
        let state = game.to_game_state();

        assert_eq!(state.current_player, Side::Black.code());
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert!(game.is_human_turn());
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn t02_illegal_player_move_returns_error() {
        let mut game = human_black();
        let before = *game.board();

        let err = game.place(0, 0).unwrap_err();

        assert!(err.contains("illegal move"));
        assert_eq!(*game.board(), before);
        assert_eq!(game.current_side(), Side::Black);
    }

    #[test]
    fn place_out_of_turn_returns_error() {
        let mut game = GameInstance::new(Side::White);

        let err = game.place(2, 4).unwrap_err();

        assert!(err.contains("not the player's turn"));
    }

    #[test]
    fn accepted_move_passes_turn_and_records_flips() {
        let mut game = human_black();

        game.place(2, 4).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.current_player, Side::White.code());
        assert!(!state.is_pass);
        assert_eq!(state.flipped, vec![Position::new(3, 4)]);
        assert_eq!(state.black_count, 4);
        assert_eq!(state.white_count, 1);
    }

    #[test]
    fn t03_stuck_opponent_is_passed_over() {
        let mut game = human_black();
        game.set_board_for_test(
            Board::from_cells(&[(0, 0)], &[(1, 0), (3, 0)]),
            Side::Black,
        );

        // Black's move captures (1,0); white is left with no reply while
        // black can still flank (3,0).
        game.place(2, 0).unwrap();

        assert_eq!(game.current_side(), Side::Black);
        assert!(game.to_game_state().is_pass);
        assert!(!game.is_game_over());
        assert!(!game.legal_moves().is_empty());
    }

    #[test]
    fn t04_move_leaving_both_sides_stuck_ends_game() {
        let mut game = human_black();
        game.set_board_for_test(
            Board::from_cells(&[(0, 0), (1, 0), (2, 0)], &[(3, 0)]),
            Side::Black,
        );

        game.place(4, 0).unwrap();
        let state = game.to_game_state();

        // No white discs remain: nobody can flip anything, so the game is
        // over with 59 empty cells left.
        assert!(state.is_game_over);
        assert!(!state.is_pass);
        assert_eq!(game.to_game_result().winner, Side::Black.code());
        assert_eq!(game.to_game_result().black_count, 5);
        assert_eq!(game.to_game_result().white_count, 0);
    }

    #[test]
    fn t05_full_board_after_move_sets_game_over() {
        let mut game = GameInstance::new(Side::Black);
        let white: Vec<(u8, u8)> = (0..8u8)
            .flat_map(|col| (0..8u8).map(move |row| (col, row)))
            .filter(|&cell| cell != (0, 0) && cell != (1, 0))
            .collect();
        game.set_board_for_test(Board::from_cells(&[(1, 0)], &white), Side::White);

        // (0,0) is white's only move and fills the board.
        let chosen = game.ai_move().unwrap();
        let state = game.to_game_state();

        assert_eq!(chosen, Position::new(0, 0));
        assert!(state.is_game_over);
        assert_eq!(state.black_count, 0);
        assert_eq!(state.white_count, 64);
        assert_eq!(state.flipped, vec![Position::new(1, 0)]);
        assert_eq!(game.to_game_result().winner, Side::White.code());
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut game = human_black();
        game.set_board_for_test(
            Board::from_cells(&[(0, 0), (1, 0), (2, 0)], &[(3, 0)]),
            Side::Black,
        );
        game.place(4, 0).unwrap();

        assert!(game.place(5, 0).unwrap_err().contains("already over"));
        assert!(game.ai_move().unwrap_err().contains("already over"));
    }

    #[test]
    fn ai_move_on_human_turn_returns_error() {
        let mut game = human_black();

        let err = game.ai_move().unwrap_err();

        assert!(err.contains("not the computer's turn"));
    }

    #[test]
    fn ai_move_without_legal_options_returns_error() {
        let mut game = GameInstance::new(Side::Black);
        game.set_board_for_test(Board::from_cells(&[(0, 0)], &[]), Side::White);

        let err = game.ai_move().unwrap_err();

        assert!(err.contains("no legal moves"));
    }

    #[test]
    fn illegal_selector_choice_is_rejected() {
        let mut game = GameInstance::with_selector(
            Side::Black,
            Box::new(FixedMoveSelector {
                mv: Position::new(0, 0),
            }),
        );
        game.set_board_for_test(Board::new(), Side::White);

        let err = game.ai_move().unwrap_err();

        assert!(err.contains("illegal move"));
    }

    #[test]
    fn drawn_game_reports_no_winner() {
        let game = human_black();

        assert_eq!(game.to_game_result().winner, 0);
    }
}
