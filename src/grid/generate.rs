//! Fixture grids for the demo, the comparison and the analysis runs.

use super::{Grid, Position, EMPTY, WALL};
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible runs, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parameters for [`random_grid`].
#[derive(Debug, Clone, Copy)]
pub struct RandomGridParams {
    pub rows: usize,
    pub cols: usize,
    /// Percentage of cells turned into walls.
    pub wall_density: u32,
    /// Percentage of the remaining cells given a weight in `2..=max_weight`.
    pub weight_density: u32,
    pub max_weight: u32,
}

/// Places walls and weights at random, never on a cell listed in `keep_open`.
pub fn random_grid(params: RandomGridParams, rng: &mut StdRng, keep_open: &[Position]) -> Result<Grid> {
    let mut grid = Grid::new(params.rows, params.cols)?;
    let num_walls = grid.cell_count() * params.wall_density.min(100) as usize / 100;

    // Place walls randomly, ensuring we don't block the kept cells
    let mut walls_placed = 0;
    let mut attempts = 0;
    while walls_placed < num_walls && attempts < num_walls * 3 {
        let pos = Position::new(rng.gen_range(0..params.rows), rng.gen_range(0..params.cols));
        if !keep_open.contains(&pos) && grid.is_open(pos) {
            grid.set(pos, WALL)?;
            walls_placed += 1;
        }
        attempts += 1;
    }

    // cell values are i32
    let max_weight = params.max_weight.min(i32::MAX as u32);
    if params.weight_density > 0 && max_weight >= 2 {
        let chance = f64::from(params.weight_density.min(100)) / 100.0;
        for row in 0..params.rows {
            for col in 0..params.cols {
                let pos = Position::new(row, col);
                if grid.is_open(pos) && rng.gen_bool(chance) {
                    grid.set(pos, rng.gen_range(2..=max_weight) as i32)?;
                }
            }
        }
    }

    Ok(grid)
}

/// Square grid with roughly `density` percent of its cells walled off in a
/// fixed scattered pattern, so runs are comparable without a seed. The two
/// corners stay open.
pub fn density_pattern(size: usize, density: u32) -> Result<Grid> {
    let mut grid = Grid::new(size, size)?;
    let corners = [Position::new(0, 0), Position::new(size - 1, size - 1)];
    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            let bucket = (row * 37 + col * 61 + row * col * 17) % 100;
            if bucket < density as usize && !corners.contains(&pos) {
                grid.set(pos, WALL)?;
            }
        }
    }
    Ok(grid)
}

/// `n` x `n` grid with walls where `(row + col) % 7 == 0`, plus an open top
/// row and right column so the far corner is always reachable.
pub fn corridor_grid(n: usize) -> Result<Grid> {
    let mut grid = Grid::new(n, n)?;
    for row in 0..n {
        for col in 0..n {
            let corner = (row, col) == (0, 0) || (row, col) == (n - 1, n - 1);
            if (row + col) % 7 == 0 && !corner {
                grid.set_cell(row, col, WALL)?;
            }
        }
    }
    for col in 0..n {
        grid.set_cell(0, col, EMPTY)?;
    }
    for row in 0..n {
        grid.set_cell(row, n - 1, EMPTY)?;
    }
    Ok(grid)
}

/// Two vertical walls at a third and two thirds of the width, gapped on the
/// middle row, and a horizontal wall at a third of the height gapped on the
/// first column. The corners are connected through all three gaps.
///
/// Below 4 x 4 the walls would seal a corner, so those grids stay open.
pub fn example_maze(rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    if rows < 4 || cols < 4 {
        return Ok(grid);
    }
    for row in 0..rows {
        if row != rows / 2 {
            grid.set_cell(row, cols / 3, WALL)?;
            grid.set_cell(row, 2 * cols / 3, WALL)?;
        }
    }
    for col in 1..cols {
        grid.set_cell(rows / 3, col, WALL)?;
    }
    Ok(grid)
}

/// Vertical walls in the given columns, open only on the listed rows.
pub fn gapped_walls(rows: usize, cols: usize, wall_cols: &[usize], gap_rows: &[usize]) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    for row in (0..rows).filter(|r| !gap_rows.contains(r)) {
        for &col in wall_cols {
            grid.set_cell(row, col, WALL)?;
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_grid_is_reproducible_and_keeps_endpoints_open() {
        let params = RandomGridParams {
            rows: 20,
            cols: 20,
            wall_density: 30,
            weight_density: 20,
            max_weight: 9,
        };
        let keep = [Position::new(0, 0), Position::new(19, 19)];
        let a = random_grid(params, &mut seeded_rng(Some(7)), &keep).unwrap();
        let b = random_grid(params, &mut seeded_rng(Some(7)), &keep).unwrap();
        assert_eq!(a, b);
        assert!(a.is_open(keep[0]));
        assert!(a.is_open(keep[1]));
        assert!(a.walls() > 0);
        assert!(a.walls() <= 400 * 30 / 100);
    }

    #[test]
    fn density_zero_has_no_walls() {
        let grid = density_pattern(30, 0).unwrap();
        assert_eq!(grid.walls(), 0);
    }

    #[test]
    fn density_pattern_tracks_requested_density() {
        for density in [10, 20, 30, 40] {
            let grid = density_pattern(30, density).unwrap();
            let expected = 900 * density as usize / 100;
            assert!(grid.walls().abs_diff(expected) <= 45, "density {}", density);
            assert!(grid.is_walkable(0, 0));
            assert!(grid.is_walkable(29, 29));
        }
    }

    #[test]
    fn corridor_keeps_border_open() {
        let grid = corridor_grid(10).unwrap();
        assert!((0..10).all(|c| grid.is_walkable(0, c)));
        assert!((0..10).all(|r| grid.is_walkable(r, 9)));
        assert!(!grid.is_walkable(1, 6));
    }

    #[test]
    fn example_maze_has_gaps() {
        let grid = example_maze(15, 15).unwrap();
        assert!(!grid.is_walkable(0, 5));
        assert!(grid.is_walkable(7, 5));
        assert!(grid.is_walkable(5, 0));
        assert!(!grid.is_walkable(5, 7));
    }

    #[test]
    fn tiny_example_maze_stays_open() {
        for (rows, cols) in [(1, 1), (2, 2), (3, 3), (2, 5), (3, 9), (9, 3)] {
            let grid = example_maze(rows, cols).unwrap();
            assert_eq!(grid.walls(), 0, "{}x{}", rows, cols);
        }
        let smallest = example_maze(4, 4).unwrap();
        assert_eq!(smallest.walls(), 7);
        assert!(smallest.is_walkable(0, 0));
        assert!(smallest.is_walkable(3, 3));
    }

    #[test]
    fn huge_max_weight_is_clamped_to_cell_range() {
        let params = RandomGridParams {
            rows: 6,
            cols: 6,
            wall_density: 0,
            weight_density: 100,
            max_weight: u32::MAX,
        };
        let grid = random_grid(params, &mut seeded_rng(Some(3)), &[]).unwrap();
        for row in 0..6 {
            for col in 0..6 {
                let value = grid.get_cell(row, col).unwrap();
                assert!(value >= 2, "({}, {}) = {}", row, col, value);
            }
        }
    }

    #[test]
    fn gapped_walls_leave_gap_rows() {
        let grid = gapped_walls(8, 8, &[3, 5], &[3, 4]).unwrap();
        assert!(!grid.is_walkable(0, 3));
        assert!(grid.is_walkable(3, 3));
        assert!(grid.is_walkable(4, 5));
        assert!(!grid.is_walkable(7, 5));
    }
}
