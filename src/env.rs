//! Step/reset/observe adapter for agent-training loops.
//!
//! `SameGameEnv` wraps a `GameEngine` behind the interface of a reinforcement
//! learning environment: actions are board positions, observations are the
//! color codes of every cell, and each step returns the move's reward and a
//! done flag.
use serde::Serialize;

use crate::board::{Board, Position};
use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::error::Result;

/// The color code of every cell, column-major: `cells[x][y]`, with `0` for
/// an empty cell and `1..=5` for the palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<u8>>,
}

impl Observation {
    pub fn from_board(board: &Board) -> Self {
        Observation {
            width: board.width(),
            height: board.height(),
            cells: board
                .columns()
                .map(|column| column.iter().map(|c| c.code()).collect())
                .collect(),
        }
    }
}

/// What one accepted action produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub action: Position,
    pub observation: Observation,
    pub reward: i64,
    pub done: bool,
}

pub struct SameGameEnv {
    config: GameConfig,
    engine: GameEngine,
}

impl SameGameEnv {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::from_config(&config)?;
        Ok(SameGameEnv { config, engine })
    }

    /// Starts a new episode on a board filled from `seed`.
    pub fn reset(&mut self, seed: u64) -> Result<Observation> {
        self.config = self.config.with_seed(seed);
        self.engine = GameEngine::from_config(&self.config)?;
        log::debug!("episode reset with seed {}", seed);
        Ok(self.observation())
    }

    /// Plays `action`, which must be one of `legal_actions()`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidMove` for any other position, or once the
    /// episode is done. The environment is unchanged in that case.
    pub fn step(&mut self, action: Position) -> Result<Step> {
        let outcome = self.engine.apply_move(action)?;
        Ok(Step {
            action,
            observation: self.observation(),
            reward: outcome.reward,
            done: outcome.terminal,
        })
    }

    pub fn observation(&self) -> Observation {
        Observation::from_board(self.engine.board())
    }

    pub fn legal_actions(&self) -> Vec<Position> {
        self.engine.legal_moves()
    }

    pub fn is_done(&self) -> bool {
        self.engine.is_terminal()
    }

    pub fn total_reward(&self) -> i64 {
        self.engine.total_reward()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Bordered text rendering of the current board.
    pub fn render(&self) -> String {
        self.engine.board().to_string()
    }
}
