//! The tile grid and its two-phase gravity.
//!
//! This module defines:
//! - `Color`: the fixed five-color palette plus the `Empty` sentinel.
//! - `Position`: an `(x, y)` coordinate with `y = 0` on the gravity floor.
//! - `Board`: a rectangular, column-major grid of `Color`s with cell access,
//!   emptiness checks, and the downward/leftward collapse used after every move.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, Result};

/// Represents the color of a single cell on the board.
///
/// `Empty` marks a cleared cell. Freshly generated boards never contain it;
/// it only appears once groups start being removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Represents a cleared cell.
    Empty,
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
}

impl Color {
    /// Every playable color, in palette order.
    pub const PALETTE: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Purple,
    ];

    /// Draws a uniformly random non-empty color.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }

    /// Returns the numeric code of the color: `0` for `Empty`, `1..=5` for the palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use samegame::board::Color;
    /// assert_eq!(Color::Empty.code(), 0);
    /// assert_eq!(Color::Red.code(), 1);
    /// assert_eq!(Color::Purple.code(), 5);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            Color::Empty => 0,
            Color::Red => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
            Color::Green => 4,
            Color::Purple => 5,
        }
    }

    /// Converts the color to its one-letter glyph.
    ///
    /// This is the format read by `utils::board_from_str_array` and written by
    /// the plain `Display` of `Board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use samegame::board::Color;
    /// assert_eq!(Color::Red.to_char(), 'R');
    /// assert_eq!(Color::Empty.to_char(), '.');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Purple => 'P',
        }
    }

    /// Inverse of `to_char`. Returns `None` for any other character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Color::Empty),
            'R' => Some(Color::Red),
            'Y' => Some(Color::Yellow),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'P' => Some(Color::Purple),
            _ => None,
        }
    }

    /// Returns the ANSI background color code for terminal output.
    fn to_ansi_color_code(self) -> &'static str {
        match self {
            Color::Empty => "40",
            Color::Red => "41",
            Color::Green => "42",
            Color::Yellow => "43",
            Color::Blue => "44",
            Color::Purple => "45",
        }
    }
}

/// A cell coordinate. `x` counts columns from the left, `y` counts rows up
/// from the floor.
///
/// The derived ordering compares `x` first and then `y`, which is exactly the
/// column-major scan order used to pick group anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the game board as a `width` x `height` grid of `Color`s.
///
/// Cells are stored column by column, bottom to top, so `columns[x][y]` is the
/// cell at `Position { x, y }`. Every cell always holds exactly one `Color`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    columns: Vec<Vec<Color>>,
}

impl Board {
    /// Creates a board with every cell set to `Color::Empty`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDimensions` if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use samegame::board::{Board, Color, Position};
    /// let board = Board::new_empty(4, 3).unwrap();
    /// assert_eq!(board.get(Position::new(3, 2)), Color::Empty);
    /// assert!(board.is_empty());
    /// ```
    pub fn new_empty(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Board {
            width,
            height,
            columns: vec![vec![Color::Empty; height]; width],
        })
    }

    /// Creates a board where every cell is an independent uniform draw from
    /// `Color::PALETTE`.
    ///
    /// Cells are filled column by column (x outer, y inner), so the same
    /// generator state always yields the same board.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDimensions` if either dimension is zero.
    pub fn new_random(width: usize, height: usize, rng: &mut impl Rng) -> Result<Self> {
        check_dimensions(width, height)?;
        let columns = (0..width)
            .map(|_| (0..height).map(|_| Color::random(rng)).collect())
            .collect();
        Ok(Board {
            width,
            height,
            columns,
        })
    }

    /// Creates a board from explicit columns, each listed bottom to top.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDimensions` for zero columns or zero-height
    /// columns, and `GameError::RaggedColumn` if the columns differ in length.
    pub fn from_columns(columns: Vec<Vec<Color>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != height)
        {
            return Err(GameError::RaggedColumn {
                column,
                expected: height,
                found,
            });
        }
        Ok(Board {
            width,
            height,
            columns,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns the color at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board.
    pub fn get(&self, pos: Position) -> Color {
        self.check_bounds(pos);
        self.columns[pos.x][pos.y]
    }

    /// Overwrites the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board.
    pub fn set(&mut self, pos: Position, color: Color) {
        self.check_bounds(pos);
        self.columns[pos.x][pos.y] = color;
    }

    /// Returns column `x`, bottom cell first.
    ///
    /// # Panics
    /// Panics if `x >= width`.
    pub fn column(&self, x: usize) -> &[Color] {
        &self.columns[x]
    }

    /// Iterates over all columns from left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Returns `true` iff every cell is `Color::Empty`.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().flatten().all(|c| c.is_empty())
    }

    /// Counts the non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.columns.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Runs both gravity phases: `collapse_down` then `collapse_columns_left`.
    pub fn collapse(&mut self) {
        self.collapse_down();
        self.collapse_columns_left();
    }

    /// Lets tiles fall toward `y = 0` within each column.
    ///
    /// Non-empty tiles keep their relative vertical order; the vacated cells at
    /// the top of the column become `Color::Empty`.
    pub fn collapse_down(&mut self) {
        for column in &mut self.columns {
            let mut write_y = 0;
            for read_y in 0..column.len() {
                let color = column[read_y];
                if !color.is_empty() {
                    column[write_y] = color;
                    write_y += 1;
                }
            }
            column[write_y..].fill(Color::Empty);
        }
    }

    /// Packs non-empty columns to the left.
    ///
    /// The new layout is a stable partition of the current columns: every
    /// column holding at least one tile, in its original left-to-right order,
    /// followed by every fully empty column, also in its original order.
    pub fn collapse_columns_left(&mut self) {
        let (filled, empty): (Vec<_>, Vec<_>) = std::mem::take(&mut self.columns)
            .into_iter()
            .partition(|column| column.iter().any(|c| !c.is_empty()));
        self.columns = filled;
        self.columns.extend(empty);
    }

    /// Renders the board with ANSI background colors and axis labels.
    ///
    /// Rows are printed top to bottom, each prefixed by its `y` index; the
    /// header line lists the `x` index of every column.
    pub fn to_ansi_string(&self) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..self.width {
            output.push_str(&format!("{:<2}", x));
        }
        output.push('\n');

        for y in (0..self.height).rev() {
            output.push_str(&format!("{:<3}", y));
            for x in 0..self.width {
                let color_code = self.columns[x][y].to_ansi_color_code();
                output.push_str(&format!("\x1b[1;{};m  \x1b[m", color_code));
            }
            if y > 0 {
                output.push('\n');
            }
        }

        output
    }

    fn check_bounds(&self, pos: Position) {
        assert!(
            self.contains(pos),
            "position {} is outside the {}x{} board",
            pos,
            self.width,
            self.height
        );
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl fmt::Display for Board {
    /// Formats the board as glyphs inside a border, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "*".repeat(self.width * 2 + 3);
        writeln!(f, "{}", border)?;
        for y in (0..self.height).rev() {
            write!(f, "| ")?;
            for x in 0..self.width {
                write!(f, "{} ", self.columns[x][y].to_char())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", border)
    }
}
