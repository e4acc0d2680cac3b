//! Connected-group discovery and the derived move index.
//!
//! `scan` walks the board once, records every same-color adjacency between a
//! tile and its upper or right neighbor, and then collects the connected
//! components of that relation with an explicit stack. Each component becomes
//! one `MoveSet` entry keyed by its anchor: the member that comes first in
//! column-major scan order.
use std::collections::BTreeMap;

use crate::board::{Board, Color, Position};
use crate::error::{GameError, Result};

/// A maximal set of at least two connected, same-colored tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    // Sorted in scan order; the first element is the anchor.
    tiles: Vec<Position>,
}

impl Group {
    /// The position used as this group's move identifier.
    pub fn anchor(&self) -> Position {
        self.tiles[0]
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// All member positions, anchor first, in scan order.
    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false` for groups produced by `scan`.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.tiles.binary_search(&pos).is_ok()
    }
}

/// The playable groups of a board, keyed by anchor.
///
/// Only anchors are valid move identifiers. A tile that belongs to a group
/// but is not its anchor is not a key, and isolated tiles appear nowhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    groups: BTreeMap<Position, Group>,
}

impl MoveSet {
    /// Returns `true` iff `pos` is the anchor of a group.
    pub fn contains(&self, pos: Position) -> bool {
        self.groups.contains_key(&pos)
    }

    /// Looks up the group anchored exactly at `pos`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidMove` if `pos` is not an anchor, including
    /// when it is a non-anchor member of some group.
    pub fn group_of(&self, pos: Position) -> Result<&Group> {
        self.groups.get(&pos).ok_or(GameError::InvalidMove(pos))
    }

    /// Anchors in scan order.
    pub fn anchors(&self) -> impl Iterator<Item = Position> + '_ {
        self.groups.keys().copied()
    }

    /// Groups in anchor scan order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// An empty move set means the board is terminal.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Finds every playable group on `board`.
///
/// Runs in time linear in the number of cells: each cell checks its upper
/// and right neighbors once, and the traversal marks a cell visited before
/// pushing it so no cell's edges are expanded twice.
///
/// # Examples
/// ```
/// use samegame::board::Position;
/// use samegame::groups::scan;
/// use samegame::utils::board_from_str_array;
///
/// let board = board_from_str_array(&[
///     "GR",
///     "RR",
/// ]).unwrap();
/// let moves = scan(&board);
/// assert_eq!(moves.len(), 1);
/// assert_eq!(moves.group_of(Position::new(0, 0)).unwrap().len(), 3);
/// ```
pub fn scan(board: &Board) -> MoveSet {
    let width = board.width();
    let height = board.height();
    let cell_count = width * height;
    // Cell index `x * height + y` increases in scan order.
    let position_of = |cell: usize| Position::new(cell / height, cell % height);

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); cell_count];
    for x in 0..width {
        let column = board.column(x);
        for y in 0..height {
            let color = column[y];
            if color.is_empty() {
                continue;
            }
            let here = x * height + y;
            if y + 1 < height && column[y + 1] == color {
                adjacency[here].push(here + 1);
                adjacency[here + 1].push(here);
            }
            if x + 1 < width && board.column(x + 1)[y] == color {
                adjacency[here].push(here + height);
                adjacency[here + height].push(here);
            }
        }
    }

    let mut visited = vec![false; cell_count];
    let mut groups = BTreeMap::new();
    let mut stack = Vec::new();

    for start in 0..cell_count {
        if visited[start] || adjacency[start].is_empty() {
            continue;
        }

        visited[start] = true;
        stack.push(start);
        let mut tiles = Vec::new();

        while let Some(cell) = stack.pop() {
            tiles.push(position_of(cell));
            for &next in &adjacency[cell] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        // `start` is the first member reached in scan order, so it sorts first.
        tiles.sort_unstable();
        let anchor = position_of(start);
        let color = board.get(anchor);
        groups.insert(anchor, Group { color, tiles });
    }

    log::trace!(
        "scanned {}x{} board: {} playable groups",
        width,
        height,
        groups.len()
    );

    MoveSet { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_scan_simple_pair() {
        let board = board_from_str_array(&["...", "RR."]).unwrap();
        let moves = scan(&board);
        assert_eq!(moves.len(), 1);
        let group = moves.group_of(pos(0, 0)).unwrap();
        assert_eq!(group.tiles(), &[pos(0, 0), pos(1, 0)]);
        assert_eq!(group.color(), Color::Red);
        assert_eq!(group.anchor(), pos(0, 0));
    }

    #[test]
    fn test_scan_isolated_tiles_excluded() {
        let board = board_from_str_array(&["RB", "BR"]).unwrap();
        let moves = scan(&board);
        assert!(moves.is_empty());
        assert_eq!(moves.group_of(pos(0, 0)), Err(GameError::InvalidMove(pos(0, 0))));
    }

    #[test]
    fn test_scan_empty_board() {
        let board = Board::new_empty(4, 4).unwrap();
        assert!(scan(&board).is_empty());
    }

    #[test]
    fn test_scan_diagonal_does_not_connect() {
        let board = board_from_str_array(&[".R", "R."]).unwrap();
        assert!(scan(&board).is_empty());
    }

    #[test]
    fn test_scan_complex_shapes() {
        // y=2: R R .
        // y=1: R B R
        // y=0: . R R
        let board = board_from_str_array(&["RR.", "RBR", ".RR"]).unwrap();
        let moves = scan(&board);
        assert_eq!(moves.len(), 2);

        let anchors: Vec<Position> = moves.anchors().collect();
        assert_eq!(anchors, vec![pos(0, 1), pos(1, 0)]);

        let upper_left = moves.group_of(pos(0, 1)).unwrap();
        assert_eq!(upper_left.tiles(), &[pos(0, 1), pos(0, 2), pos(1, 2)]);

        let lower_right = moves.group_of(pos(1, 0)).unwrap();
        assert_eq!(lower_right.tiles(), &[pos(1, 0), pos(2, 0), pos(2, 1)]);

        // The single blue tile is not playable.
        assert!(!moves.contains(pos(1, 1)));
    }

    #[test]
    fn test_scan_u_shape_is_one_group() {
        // The two arms only meet through the bottom row.
        let board = board_from_str_array(&["R.R", "RGR", "RRR"]).unwrap();
        let moves = scan(&board);
        assert_eq!(moves.len(), 1);
        let group = moves.group_of(pos(0, 0)).unwrap();
        assert_eq!(group.len(), 7);
        assert!(group.contains(pos(2, 2)));
        assert!(!group.contains(pos(1, 1)));
    }

    #[test]
    fn test_scan_anchor_is_first_in_scan_order() {
        // The group's lowest tile in column 0 sits at y=1, and column 1
        // contributes a tile at y=0. Column order wins: anchor is (0, 1).
        let board = board_from_str_array(&["..", "GG", "BG"]).unwrap();
        let moves = scan(&board);
        let anchors: Vec<Position> = moves.anchors().collect();
        assert_eq!(anchors, vec![pos(0, 1)]);
        assert_eq!(moves.group_of(pos(0, 1)).unwrap().len(), 3);
    }

    #[test]
    fn test_group_of_rejects_non_anchor_member() {
        let board = board_from_str_array(&["RRR"]).unwrap();
        let moves = scan(&board);
        assert!(moves.contains(pos(0, 0)));
        assert!(moves.group_of(pos(0, 0)).unwrap().contains(pos(1, 0)));
        assert!(!moves.contains(pos(1, 0)));
        assert_eq!(moves.group_of(pos(1, 0)), Err(GameError::InvalidMove(pos(1, 0))));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let board = board_from_str_array(&["RRG.B", "YGGBB", "YPPPB"]).unwrap();
        let first = scan(&board);
        let second = scan(&board.clone());
        assert_eq!(first, second);
        let anchors: Vec<Position> = first.anchors().collect();
        assert_eq!(anchors, vec![pos(0, 0), pos(0, 2), pos(1, 0), pos(1, 1), pos(3, 1)]);
    }
}
