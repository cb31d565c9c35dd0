//! Game of Life transition rule.

use crate::grid::Grid;
use crate::types::Cell;

/// Compute the next generation of `grid`.
///
/// Every neighbor count is taken against the input grid; results go into a
/// fresh output board of identical dimensions, so a sweep never observes
/// its own updates.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.size());
    for pos in grid.positions() {
        let neighbors = grid.live_neighbors(pos);
        let cell = match (grid.get(pos), neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        };
        next.set(pos, cell);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.positions()
            .filter(|&pos| grid.get(pos).is_alive())
            .map(|pos| (pos.row, pos.col))
            .collect()
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::new(5);
        grid.set(Position::new(2, 2), Cell::Alive);
        let next = next_generation(&grid);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            grid.set(Position::new(row, col), Cell::Alive);
        }
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_glider_first_step() {
        let next = next_generation(&Grid::glider(8));
        assert_eq!(
            alive_cells(&next),
            vec![(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]
        );
    }

    #[test]
    fn test_glider_translates_after_four_steps() {
        let mut grid = Grid::glider(8);
        for _ in 0..4 {
            grid = next_generation(&grid);
        }
        // Original shape shifted down-right by (1, 1)
        assert_eq!(
            alive_cells(&grid),
            vec![(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)]
        );
    }

    #[test]
    fn test_determinism() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let grid = Grid::random(12, &mut rng);
        assert_eq!(next_generation(&grid), next_generation(&grid));
    }

    proptest! {
        #[test]
        fn prop_shape_preserved(seed in any::<u64>(), size in 4usize..16) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = Grid::random(size, &mut rng);
            let next = next_generation(&grid);
            prop_assert_eq!(next.size(), size);
            prop_assert_eq!(next.positions().count(), size * size);
        }
    }
}
