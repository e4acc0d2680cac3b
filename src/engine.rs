//! Game state machine for SameGame.
//!
//! `GameEngine` owns a `Board` and the `MoveSet` derived from it. Every
//! accepted move clears one group, collapses the board, rescans it, and
//! reports the reward for the move. The engine becomes terminal as soon as the
//! rescan finds no playable group, whether or not tiles remain.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Position};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::groups::{scan, MoveSet};

/// Added to the final move's reward when the board ends fully cleared, and
/// subtracted when tiles are left stranded.
pub const TERMINAL_BONUS: i64 = 1000;

/// The result of one accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of tiles removed by the move.
    pub cleared: usize,
    /// `(cleared - 2)^2`, plus or minus `TERMINAL_BONUS` if the move ended the game.
    pub reward: i64,
    /// Whether the engine is terminal after the move.
    pub terminal: bool,
}

/// Reward for clearing a group of `size` tiles, before any terminal bonus.
///
/// # Examples
/// ```
/// use samegame::engine::group_reward;
/// assert_eq!(group_reward(2), 0);
/// assert_eq!(group_reward(3), 1);
/// assert_eq!(group_reward(10), 64);
/// ```
pub fn group_reward(size: usize) -> i64 {
    let excess = size as i64 - 2;
    excess * excess
}

/// Manages the state of one SameGame session.
///
/// # Examples
/// ```
/// use samegame::engine::GameEngine;
///
/// let mut engine = GameEngine::new(15, 15, 420).unwrap();
/// let mut total = 0;
/// while let Some(&anchor) = engine.legal_moves().first() {
///     let outcome = engine.apply_move(anchor).unwrap();
///     total += outcome.reward;
///     if outcome.terminal {
///         break;
///     }
/// }
/// assert!(engine.is_terminal());
/// assert_eq!(total, engine.total_reward());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    moves: MoveSet,
    total_reward: i64,
    steps: u32,
    terminal: bool,
}

impl GameEngine {
    /// Creates a game on a `width` x `height` board filled from `seed`.
    ///
    /// The same seed always produces the same board within this crate; the
    /// generator is a `SmallRng` owned by this call, so separate engines never
    /// share random state.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::with_rng(width, height, &mut rng)
    }

    /// Creates a game whose board is filled from a caller-owned generator.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDimensions` if either dimension is zero.
    pub fn with_rng(width: usize, height: usize, rng: &mut impl Rng) -> Result<Self> {
        Ok(Self::from_board(Board::new_random(width, height, rng)?))
    }

    /// Creates a game from the size and seed in `config`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDimensions` if the configured size is zero.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.width, config.height, config.seed)
    }

    /// Creates a game with a specified initial board.
    ///
    /// If the board has no playable group the engine starts out terminal.
    pub fn from_board(board: Board) -> Self {
        let moves = scan(&board);
        let terminal = moves.is_empty();
        GameEngine {
            board,
            moves,
            total_reward: 0,
            steps: 0,
            terminal,
        }
    }

    /// Returns a read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the playable groups of the current board.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Returns the anchors of every playable group, in scan order.
    ///
    /// Empty exactly when the engine is terminal.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.moves.anchors().collect()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Sum of the rewards of all accepted moves, terminal bonus included.
    pub fn total_reward(&self) -> i64 {
        self.total_reward
    }

    /// Number of accepted moves so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Plays the group anchored at `anchor`.
    ///
    /// 1. The group is cleared from the board.
    /// 2. The board collapses down, then packs its columns left.
    /// 3. The board is rescanned for playable groups.
    /// 4. If none remain the engine turns terminal and the reward gains
    ///    `TERMINAL_BONUS` for an empty board or loses it otherwise.
    ///
    /// # Errors
    /// Returns `GameError::InvalidMove` if the engine is terminal or `anchor`
    /// is not the anchor of a current group. The engine is left unchanged.
    pub fn apply_move(&mut self, anchor: Position) -> Result<MoveOutcome> {
        if self.terminal {
            log::warn!("rejected move at {}: game is over", anchor);
            return Err(GameError::InvalidMove(anchor));
        }

        let group = self.moves.group_of(anchor).map_err(|err| {
            log::warn!("rejected move at {}: not a group anchor", anchor);
            err
        })?;
        for &pos in group.tiles() {
            self.board.set(pos, Color::Empty);
        }
        let cleared = group.len();

        self.board.collapse();
        self.moves = scan(&self.board);
        self.steps += 1;

        let mut reward = group_reward(cleared);
        log::debug!(
            "move {}: cleared {} tiles at {}, reward {}",
            self.steps,
            cleared,
            anchor,
            reward
        );

        if self.moves.is_empty() {
            self.terminal = true;
            if self.board.is_empty() {
                reward += TERMINAL_BONUS;
                log::info!("board cleared after {} moves", self.steps);
            } else {
                reward -= TERMINAL_BONUS;
                log::info!(
                    "no moves left after {} moves, {} tiles stranded",
                    self.steps,
                    self.board.tile_count()
                );
            }
        }

        self.total_reward += reward;

        Ok(MoveOutcome {
            cleared,
            reward,
            terminal: self.terminal,
        })
    }
}
