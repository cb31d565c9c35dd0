//! Core type definitions for the board.

use serde::{Deserialize, Serialize};

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Alive,
    Dead,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// Row/column coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a row/column delta, returning `None` outside `[0, size)`.
    pub fn offset(&self, dr: i32, dc: i32, size: usize) -> Option<Position> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 0 || col < 0 || row >= size as i32 || col >= size as i32 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_inside_board() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.offset(-1, 1, 5), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_offset_clips_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 5), None);
        assert_eq!(corner.offset(0, -1, 5), None);

        let far = Position::new(4, 4);
        assert_eq!(far.offset(1, 0, 5), None);
        assert_eq!(far.offset(0, 1, 5), None);
    }
}
