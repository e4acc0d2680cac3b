//! # SameGame Library
//!
//! This library simulates the SameGame tile-matching puzzle as a turn-based
//! environment: a rectangular board of colored tiles, moves that remove a
//! connected group of same-colored tiles, two-phase gravity, and a reward per
//! move that suits agent-training loops.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `random_agent`: Plays uniformly random legal moves until the game ends,
//!   printing every move and its reward, or a JSON line per step.
//!
//! ## Modules
//! - `board`: The grid (`Board`), cell colors (`Color`), coordinates
//!   (`Position`), and the downward/leftward collapse.
//! - `groups`: Connected-group discovery (`scan`) and the anchor-keyed `MoveSet`.
//! - `engine`: Game state management (`GameEngine`), rewards, and terminal detection.
//! - `env`: A step/reset/observe wrapper around `GameEngine`.
//! - `config`: Board size and seed (`GameConfig`).
//! - `error`: The `GameError` type returned by fallible operations.
//! - `utils`: Utility functions, such as parsing boards from strings.

pub mod board;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod groups;
pub mod utils;
