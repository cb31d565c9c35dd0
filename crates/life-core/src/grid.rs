//! 2D board of cells.

use crate::types::{Cell, Position};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Glider cells, anchored near the top-left corner
const GLIDER: [(usize, usize); 5] = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

/// A square board of cells with clipped edges (no wraparound)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead board of the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Board holding the fixed glider pattern
    pub fn glider(size: usize) -> Self {
        let mut grid = Self::new(size);
        for &(row, col) in &GLIDER {
            grid.set(Position::new(row, col), Cell::Alive);
        }
        grid
    }

    /// Board where each cell is independently alive with probability 0.5
    pub fn random(size: usize, rng: &mut ChaCha8Rng) -> Self {
        let mut grid = Self::new(size);
        for cell in &mut grid.cells {
            if rng.gen::<bool>() {
                *cell = Cell::Alive;
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.pos_to_index(pos)]
    }

    /// Set cell at position
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let index = self.pos_to_index(pos);
        self.cells[index] = cell;
    }

    /// Count of alive cells in the Moore neighborhood of `pos`.
    ///
    /// Positions outside the board contribute nothing, so corner cells see
    /// at most 3 neighbors and non-corner edge cells at most 5.
    pub fn live_neighbors(&self, pos: Position) -> u8 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(neighbor) = pos.offset(dr, dc, self.size) {
                    if self.get(neighbor).is_alive() {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Number of alive cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterator over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }
}
