//! Property checks for collapse, group discovery, and move application over
//! randomly generated boards.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use proptest::prelude::*;
use samegame::board::{Board, Color, Position};
use samegame::engine::{group_reward, GameEngine, TERMINAL_BONUS};
use samegame::groups::scan;

const BY_CODE: [Color; 6] = [
    Color::Empty,
    Color::Red,
    Color::Yellow,
    Color::Blue,
    Color::Green,
    Color::Purple,
];

/// Boards up to 6x6 whose cells draw their color code from `codes`.
/// Including code 0 yields unsettled, mid-game-looking boards.
fn board_strategy(codes: RangeInclusive<usize>) -> impl Strategy<Value = Board> {
    (1usize..=6, 1usize..=6).prop_flat_map(move |(width, height)| {
        prop::collection::vec(prop::collection::vec(codes.clone(), height), width).prop_map(
            |columns| {
                Board::from_columns(
                    columns
                        .into_iter()
                        .map(|column| column.into_iter().map(|code| BY_CODE[code]).collect())
                        .collect(),
                )
                .unwrap()
            },
        )
    })
}

fn neighbors(board: &Board, pos: Position) -> Vec<Position> {
    let mut out = Vec::new();
    if pos.x > 0 {
        out.push(Position::new(pos.x - 1, pos.y));
    }
    if pos.y > 0 {
        out.push(Position::new(pos.x, pos.y - 1));
    }
    if pos.x + 1 < board.width() {
        out.push(Position::new(pos.x + 1, pos.y));
    }
    if pos.y + 1 < board.height() {
        out.push(Position::new(pos.x, pos.y + 1));
    }
    out
}

fn all_positions(board: &Board) -> Vec<Position> {
    (0..board.width())
        .flat_map(|x| (0..board.height()).map(move |y| Position::new(x, y)))
        .collect()
}

proptest! {
    #[test]
    fn collapse_is_idempotent(board in board_strategy(0..=5)) {
        let mut once = board.clone();
        once.collapse();
        let mut twice = once.clone();
        twice.collapse();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn collapse_packs_without_changing_tiles(board in board_strategy(0..=3)) {
        let mut collapsed = board.clone();
        collapsed.collapse();
        prop_assert_eq!(collapsed.tile_count(), board.tile_count());

        // Expected layout: each column's tiles in order, non-empty columns first.
        let settled: Vec<Vec<Color>> = board
            .columns()
            .map(|column| column.iter().copied().filter(|c| !c.is_empty()).collect::<Vec<_>>())
            .filter(|tiles| !tiles.is_empty())
            .collect();

        for x in 0..collapsed.width() {
            let column = collapsed.column(x);
            let tiles: Vec<Color> = column.iter().copied().filter(|c| !c.is_empty()).collect();
            // No holes under a tile.
            prop_assert!(column[..tiles.len()].iter().all(|c| !c.is_empty()));
            match settled.get(x) {
                Some(expected) => prop_assert_eq!(&tiles, expected),
                None => prop_assert!(tiles.is_empty()),
            }
        }
    }

    #[test]
    fn scan_covers_exactly_the_paired_tiles(board in board_strategy(0..=4)) {
        let moves = scan(&board);
        let mut seen = HashSet::new();

        for group in moves.groups() {
            prop_assert!(group.len() >= 2);
            let anchor = group.anchor();
            prop_assert_eq!(Some(&anchor), group.tiles().iter().min());
            prop_assert!(moves.contains(anchor));
            prop_assert!(!group.color().is_empty());

            for &pos in group.tiles() {
                prop_assert_eq!(board.get(pos), group.color());
                prop_assert!(seen.insert(pos), "{} is in two groups", pos);
            }

            // Every member reaches the anchor through same-group neighbors.
            let mut reached = HashSet::from([anchor]);
            let mut stack = vec![anchor];
            while let Some(pos) = stack.pop() {
                for next in neighbors(&board, pos) {
                    if group.contains(next) && reached.insert(next) {
                        stack.push(next);
                    }
                }
            }
            prop_assert_eq!(reached.len(), group.len());
        }

        for pos in all_positions(&board) {
            let color = board.get(pos);
            let paired = !color.is_empty()
                && neighbors(&board, pos).into_iter().any(|n| board.get(n) == color);
            prop_assert_eq!(paired, seen.contains(&pos), "mismatch at {}", pos);
        }
    }

    #[test]
    fn scan_is_deterministic(board in board_strategy(0..=5)) {
        prop_assert_eq!(scan(&board), scan(&board.clone()));
    }

    #[test]
    fn random_play_keeps_invariants(
        board in board_strategy(1..=3),
        choices in prop::collection::vec(any::<usize>(), 40),
    ) {
        let mut engine = GameEngine::from_board(board);
        let mut total = 0;

        for choice in choices {
            let rescanned = scan(engine.board());
            prop_assert_eq!(&rescanned, engine.moves());
            prop_assert_eq!(engine.is_terminal(), rescanned.is_empty());
            if engine.is_terminal() {
                break;
            }

            let legal = engine.legal_moves();
            let anchor = legal[choice % legal.len()];
            let before = engine.board().tile_count();

            let outcome = engine.apply_move(anchor).unwrap();
            prop_assert_eq!(before, engine.board().tile_count() + outcome.cleared);

            let mut expected = group_reward(outcome.cleared);
            if outcome.terminal {
                expected += if engine.board().is_empty() { TERMINAL_BONUS } else { -TERMINAL_BONUS };
            }
            prop_assert_eq!(outcome.reward, expected);
            total += outcome.reward;
        }

        prop_assert_eq!(engine.total_reward(), total);
    }
}
