use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

pub const DEFAULT_WIDTH: usize = 15;
pub const DEFAULT_HEIGHT: usize = 15;
pub const DEFAULT_SEED: u64 = 420;

/// Board size and fill seed for a new game.
///
/// Doubles as the `--width`/`--height`/`--seed` options of the binaries.
#[derive(Args, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed for the board fill
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Checks that the board has at least one cell.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Same size, different seed.
    pub fn with_seed(self, seed: u64) -> Self {
        GameConfig { seed, ..self }
    }
}
