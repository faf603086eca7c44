use crate::error::{ConfigError, MoveError};

use super::{Board, Dimensions, Player, WinLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A game in progress: the board, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    outcome: Option<GameOutcome>,
    win_line: Option<WinLine>,
    moves: Vec<usize>,
}

impl GameState {
    /// Create initial game state on a standard board, Red to move
    pub fn initial() -> Self {
        Self::with_board(Board::new(), Player::Red)
    }

    /// Create an empty game of the given size with `first` to move
    pub fn new(dims: Dimensions, first: Player) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::with_dimensions(dims)?, first))
    }

    fn with_board(board: Board, first: Player) -> Self {
        GameState {
            board,
            first_player: first,
            current_player: first,
            outcome: None,
            win_line: None,
            moves: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The four cells that ended the game, if it was won
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns played so far, oldest first
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably, returns the row the piece landed in
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.apply(column, self.current_player)?;
        self.moves.push(column);

        if let Some(line) = self.board.detect_win() {
            self.outcome = Some(GameOutcome::Winner(line.player));
            self.win_line = Some(line);
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(row)
    }

    /// Start over on an empty board with the same first player
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.first_player;
        self.outcome = None;
        self.win_line = None;
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        assert_eq!(new_state.moves(), &[3]);
        // Original untouched
        assert_eq!(state.board().piece_count(), 0);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        let line = state.win_line().unwrap();
        assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        // Column pairs stacked in blocks of two never line up four.
        let mut state = GameState::new(Dimensions { rows: 4, cols: 4 }, Player::Red).unwrap();
        let pattern = [0, 1, 0, 1, 1, 0, 1, 0, 2, 3, 2, 3, 3, 2, 3, 2];

        for &col in &pattern {
            state.apply_move_mut(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.win_line().is_none());
    }

    #[test]
    fn test_column_full_is_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(2).unwrap();
        }
        assert_eq!(state.apply_move_mut(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(state.move_count(), 6);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new(Dimensions::default(), Player::Yellow).unwrap();
        state.apply_move_mut(0).unwrap();
        state.apply_move_mut(1).unwrap();
        state.reset();
        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().piece_count(), 0);
        assert!(state.moves().is_empty());
        assert!(!state.is_terminal());
    }
}
