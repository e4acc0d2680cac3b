use crate::board::{Board, Color};
use crate::error::{GameError, Result};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row of the board, listed top row first, so the
/// text reads the same way the board is displayed. The last slice is the
/// gravity floor (`y = 0`). The board's width is the length of the rows and
/// its height is the number of rows.
///
/// Valid characters for cells are:
/// - 'R': `Color::Red`
/// - 'Y': `Color::Yellow`
/// - 'B': `Color::Blue`
/// - 'G': `Color::Green`
/// - 'P': `Color::Purple`
/// - '.': `Color::Empty`
///
/// # Errors
/// * `GameError::EmptyBoardText` if `s` is empty.
/// * `GameError::RaggedRow` if a row's length differs from the first row's.
/// * `GameError::UnrecognizedTile` for any other character.
/// * `GameError::InvalidDimensions` if the rows are empty strings.
///
/// # Examples
/// ```
/// use samegame::utils::board_from_str_array;
/// use samegame::board::{Color, Position};
///
/// let board = board_from_str_array(&[
///     "R..", // y = 1
///     "GYB", // y = 0
/// ]).unwrap();
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.height(), 2);
/// assert_eq!(board.get(Position::new(0, 1)), Color::Red);
/// assert_eq!(board.get(Position::new(0, 0)), Color::Green);
/// assert_eq!(board.get(Position::new(2, 1)), Color::Empty);
///
/// assert!(board_from_str_array(&["RXB"]).is_err());
/// assert!(board_from_str_array(&["RR", "R"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board> {
    let height = s.len();
    let width = s.first().ok_or(GameError::EmptyBoardText)?.chars().count();

    let mut columns = vec![vec![Color::Empty; height]; width];

    for (row, row_str) in s.iter().enumerate() {
        let found = row_str.chars().count();
        if found != width {
            return Err(GameError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        // Text rows run top to bottom, the grid counts y upwards.
        let y = height - 1 - row;
        for (col, ch) in row_str.chars().enumerate() {
            columns[col][y] =
                Color::from_char(ch).ok_or(GameError::UnrecognizedTile { ch, row, col })?;
        }
    }

    Board::from_columns(columns)
}
