//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Smallest board the glider preset fits on
pub const MIN_BOARD_SIZE: usize = 4;

/// How the initial board is populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitMode {
    /// Fixed five-cell glider near the top-left corner
    Glider,
    /// Each cell independently alive with probability 0.5
    Random,
}

/// Simulation parameters, immutable once captured at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Board side length (the board is size x size)
    pub size: usize,
    /// Number of generations to run
    pub generations: u64,
    /// Initial population mode
    pub mode: InitMode,
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_BOARD_SIZE {
            return Err(Error::Validation(format!(
                "board size must be at least {}x{}, got {}",
                MIN_BOARD_SIZE, MIN_BOARD_SIZE, self.size
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 10,
            generations: 20,
            mode: InitMode::Random,
        }
    }
}
