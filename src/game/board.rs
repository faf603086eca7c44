use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, MoveError, ParseBoardError};

use super::player::Player;
use super::win::{detect_win, WinLine};

/// Standard board height.
pub const ROWS: usize = 6;
/// Standard board width.
pub const COLS: usize = 7;
/// Smallest side length that still admits a four-cell window in every orientation.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    /// Single-character form used by the text board format
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            '.' => Some(Cell::Empty),
            'R' | 'r' => Some(Cell::Red),
            'Y' | 'y' => Some(Cell::Yellow),
            _ => None,
        }
    }
}

/// Board size, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl Dimensions {
    /// Create validated dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let dims = Dimensions { rows, cols };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be >= {MIN_DIMENSION} (got {})",
                self.rows
            )));
        }
        if self.cols < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be >= {MIN_DIMENSION} (got {})",
                self.cols
            )));
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A `rows x cols` grid, row 0 at the top. Pieces always rest on the
/// bottom of their column or on another piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty standard 6x7 board
    pub fn new() -> Self {
        Self::empty(Dimensions::default())
    }

    /// Create an empty board of the given size
    pub fn with_dimensions(dims: Dimensions) -> Result<Self, ConfigError> {
        dims.validate()?;
        Ok(Self::empty(dims))
    }

    fn empty(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dims.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = row * self.dims.cols + col;
        self.cells[idx] = cell;
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols() {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Lowest empty row in a column, where the next piece would land
    pub fn drop_row(&self, column: usize) -> Result<usize, MoveError> {
        if column >= self.cols() {
            return Err(MoveError::InvalidColumn {
                column,
                cols: self.cols(),
            });
        }

        (0..self.rows())
            .rev()
            .find(|&row| self.get(row, column) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(column))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn apply(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.drop_row(column)?;
        self.set(row, column, player.to_cell());
        Ok(row)
    }

    /// Take back the piece placed by the matching `apply`.
    pub fn undo(&mut self, row: usize, column: usize) {
        debug_assert!(
            self.get(row, column) != Cell::Empty,
            "undo of empty cell ({row}, {column})"
        );
        debug_assert!(
            row == 0 || self.get(row - 1, column) == Cell::Empty,
            "undo of ({row}, {column}) is not the top piece of its column"
        );
        self.set(row, column, Cell::Empty);
    }

    /// Non-full columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols())
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols()).all(|col| self.is_column_full(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// First four-in-a-row on the board, in scan order
    pub fn detect_win(&self) -> Option<WinLine> {
        detect_win(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the text form written by `Display`. Blank lines and spaces are
    /// ignored; `.` is empty, `R`/`Y` are pieces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid: Vec<Vec<Cell>> = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = grid.len();
            let cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, glyph)| {
                    Cell::from_glyph(glyph).ok_or(ParseBoardError::UnknownCell { glyph, row, col })
                })
                .collect::<Result<Vec<_>, _>>()?;
            grid.push(cells);
        }

        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let dims = Dimensions::new(rows, cols)
            .map_err(|e| ParseBoardError::Dimensions(e.to_string()))?;

        let mut board = Board::empty(dims);
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != cols {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found: cells.len(),
                    expected: cols,
                });
            }
            for (col, &cell) in cells.iter().enumerate() {
                board.set(row, col, cell);
            }
        }

        for col in 0..cols {
            for row in 0..rows - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(ParseBoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every column's pieces form one bottom-aligned run.
    fn assert_no_floating(board: &Board) {
        for col in 0..board.cols() {
            let mut seen_piece = false;
            for row in 0..board.rows() {
                let occupied = board.get(row, col) != Cell::Empty;
                assert!(
                    !seen_piece || occupied,
                    "gap below a piece at row {row}, column {col}"
                );
                seen_piece |= occupied;
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.rows(), ROWS);
        assert_eq!(board.cols(), COLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_apply() {
        let mut board = Board::new();

        // First piece in column 3 lands on the bottom
        let row = board.apply(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        // Second piece stacks on top of it
        let row = board.apply(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_row_does_not_mutate() {
        let mut board = Board::new();
        board.apply(2, Player::Red).unwrap();
        let before = board.clone();
        assert_eq!(board.drop_row(2), Ok(4));
        assert_eq!(board, before);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.apply(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_row(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.apply(0, Player::Yellow), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.apply(7, Player::Red),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.apply(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.piece_count(), ROWS * COLS);
    }

    #[test]
    fn test_apply_undo_roundtrip() {
        let mut board: Board = "
            . . . . . . .
            . . . . . . .
            . . . Y . . .
            . . . R . . .
            . . Y R . . .
            R Y R Y R . Y
        "
        .parse()
        .unwrap();

        for col in board.legal_columns() {
            for player in [Player::Red, Player::Yellow] {
                let before = board.clone();
                let row = board.apply(col, player).unwrap();
                assert_ne!(board, before);
                board.undo(row, col);
                assert_eq!(board, before, "column {col} did not round-trip");
            }
        }
    }

    #[test]
    fn test_no_floating_pieces_after_moves() {
        let mut board = Board::new();
        let moves = [3, 3, 2, 4, 4, 4, 0, 6, 6, 3, 1, 1, 5, 3, 3, 2];
        let mut player = Player::Red;
        for &col in &moves {
            board.apply(col, player).unwrap();
            player = player.other();
            assert_no_floating(&board);
        }
        assert_eq!(board.piece_count(), moves.len());
    }

    #[test]
    fn test_custom_dimensions() {
        let dims = Dimensions::new(4, 9).unwrap();
        let mut board = Board::with_dimensions(dims).unwrap();
        assert_eq!(board.legal_columns().len(), 9);
        for _ in 0..4 {
            board.apply(8, Player::Yellow).unwrap();
        }
        assert!(board.is_column_full(8));
        assert_eq!(board.get(0, 8), Cell::Yellow);
    }

    #[test]
    fn test_dimensions_rejects_small_boards() {
        assert!(Dimensions::new(3, 7).is_err());
        assert!(Dimensions::new(6, 3).is_err());
        assert!(Board::with_dimensions(Dimensions { rows: 2, cols: 2 }).is_err());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.apply(1, Player::Red).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let mut board = Board::new();
        board.apply(0, Player::Red).unwrap();
        board.apply(0, Player::Yellow).unwrap();
        board.apply(6, Player::Red).unwrap();

        let text = board.to_string();
        assert!(text.ends_with("R . . . . . R\n"));
        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_rejects_floating_piece() {
        let err = "
            . . . .
            . R . .
            . . . .
            . . . .
        "
        .parse::<Board>()
        .unwrap_err();
        assert_eq!(err, ParseBoardError::FloatingPiece { row: 1, col: 1 });
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "....\n....\n...\n....".parse::<Board>(),
            Err(ParseBoardError::RaggedRow { row: 2, .. })
        ));
        assert!(matches!(
            "....\n....\n....\n..X.".parse::<Board>(),
            Err(ParseBoardError::UnknownCell { glyph: 'X', .. })
        ));
        assert!(matches!(
            "...\n...\n...".parse::<Board>(),
            Err(ParseBoardError::Dimensions(_))
        ));
    }
}
