use std::path::PathBuf;

use crate::game::{Dimensions, Player};

/// Errors raised when a move cannot be played on a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("it is not {}'s turn", .0.name())]
    OutOfTurn(Player),
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal columns left to play")]
    NoLegalMoves,

    #[error("engine is configured for a {engine} board but was given a {board} board")]
    DimensionMismatch { engine: Dimensions, board: Dimensions },

    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell '{glyph}' at row {row}, column {col}")]
    UnknownCell { glyph: char, row: usize, col: usize },

    #[error("piece at row {row}, column {col} is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },

    #[error("invalid dimensions: {0}")]
    Dimensions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::OutOfTurn(Player::Yellow).to_string(),
            "it is not Yellow's turn"
        );
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::DimensionMismatch {
            engine: Dimensions::default(),
            board: Dimensions { rows: 5, cols: 5 },
        };
        assert_eq!(
            err.to_string(),
            "engine is configured for a 6x7 board but was given a 5x5 board"
        );

        let err: EngineError = MoveError::ColumnFull(0).into();
        assert_eq!(err.to_string(), "invalid move: column 0 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }

    #[test]
    fn test_parse_board_error_display() {
        let err = ParseBoardError::FloatingPiece { row: 2, col: 4 };
        assert_eq!(
            err.to_string(),
            "piece at row 2, column 4 is floating above an empty cell"
        );
    }
}
