use thiserror::Error;

use crate::board::Position;

/// Every recoverable failure the library reports.
///
/// Out-of-bounds positions are deliberately absent: they are a caller
/// contract violation and `Board::get`/`Board::set` panic on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The position is not the anchor of a playable group, or the game is over.
    #[error("invalid move: no playable group is anchored at {0}")]
    InvalidMove(Position),
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("column {column} has {found} cells, expected {expected}")]
    RaggedColumn {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} characters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedTile { ch: char, row: usize, col: usize },
    #[error("board text contains no rows")]
    EmptyBoardText,
}

pub type Result<T> = core::result::Result<T, GameError>;
