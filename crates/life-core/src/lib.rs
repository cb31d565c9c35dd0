//! Conway's Game of Life on a bounded square board.
//!
//! The board has clipped edges (no toroidal wrapping); each generation is
//! computed into a fresh board so a sweep never observes its own updates.

pub mod config;
pub mod error;
pub mod grid;
pub mod rules;
pub mod simulation;
pub mod types;

pub use config::{InitMode, SimConfig, MIN_BOARD_SIZE};
pub use error::{Error, Result};
pub use grid::Grid;
pub use rules::next_generation;
pub use simulation::Simulation;
pub use types::{Cell, Position};
