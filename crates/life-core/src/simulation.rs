//! Driver state for a bounded run of the automaton.

use crate::config::{InitMode, SimConfig};
use crate::error::Result;
use crate::grid::Grid;
use crate::rules::next_generation;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Owns the board across a run of a fixed number of generations
pub struct Simulation {
    grid: Grid,
    config: SimConfig,
    generation: u64,
}

impl Simulation {
    /// Validate the configuration and build the initial board.
    ///
    /// The caller supplies the random source so runs are reproducible under
    /// test; the CLI seeds it from wall-clock time.
    pub fn new(config: SimConfig, rng: &mut ChaCha8Rng) -> Result<Self> {
        config.validate()?;

        let grid = match config.mode {
            InitMode::Glider => Grid::glider(config.size),
            InitMode::Random => Grid::random(config.size, rng),
        };

        info!(
            size = config.size,
            generations = config.generations,
            mode = ?config.mode,
            population = grid.population(),
            "simulation initialized"
        );

        Ok(Self {
            grid,
            config,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the board wholesale with the next generation.
    pub fn advance(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "generation advanced"
        );
    }

    /// Whether the configured number of generations has been reached.
    pub fn is_done(&self) -> bool {
        self.generation >= self.config.generations
    }
}
