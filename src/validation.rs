//! Cross-checks the hand-written searches against the reference BFS and
//! Dijkstra from the `pathfinding` crate on random grids.

use crate::algorithms::common::{path_cost, Algorithm, PathFinder};
use crate::grid::generate::{random_grid, seeded_rng, RandomGridParams};
use crate::grid::{Grid, Position};
use crate::Result;
use pathfinding::prelude::{bfs, dijkstra};
use rand::Rng;

/// Whether `path` is a connected walk over open cells from `start` to `goal`.
pub fn is_valid_path(grid: &Grid, path: &[Position], start: Position, goal: Position) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|p| grid.is_open(*p))
        && path
            .windows(2)
            .all(|w| w[0].row.abs_diff(w[1].row) + w[0].col.abs_diff(w[1].col) == 1)
}

fn open_successors(grid: &Grid, pos: Position) -> Vec<Position> {
    grid.neighbors(pos).filter(|n| grid.is_open(*n)).collect()
}

/// Fewest cells on any path, from the `pathfinding` crate's BFS.
pub fn reference_length(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    bfs(&start, |p| open_successors(grid, *p), |p| *p == goal).map(|path| path.len())
}

/// Cheapest path cost, from the `pathfinding` crate's Dijkstra.
pub fn reference_cost(grid: &Grid, start: Position, goal: Position) -> Option<u64> {
    dijkstra(
        &start,
        |p| {
            open_successors(grid, *p)
                .into_iter()
                .map(|n| (n, u64::from(grid.cost_at(n))))
                .collect::<Vec<_>>()
        },
        |p| *p == goal,
    )
    .map(|(_, cost)| cost)
}

/// Checks all three algorithms on one grid. Returns whether the goal was
/// reachable, or a description of the first mismatch.
pub fn check_grid(grid: &Grid, start: Position, goal: Position) -> std::result::Result<bool, String> {
    let expected_len = reference_length(grid, start, goal);
    let expected_cost = reference_cost(grid, start, goal);

    let bfs_result = PathFinder::new(grid, Algorithm::Bfs).find_path(start, goal);
    let dijkstra_result = PathFinder::new(grid, Algorithm::Dijkstra).find_path(start, goal);
    let a_star_result = PathFinder::new(grid, Algorithm::AStar).find_path(start, goal);

    for (algorithm, result) in [
        (Algorithm::Bfs, &bfs_result),
        (Algorithm::Dijkstra, &dijkstra_result),
        (Algorithm::AStar, &a_star_result),
    ] {
        if result.found() != expected_len.is_some() {
            return Err(format!(
                "{} found={} but reference found={}",
                algorithm,
                result.found(),
                expected_len.is_some()
            ));
        }
        if let Some(path) = result.path.as_deref() {
            if !is_valid_path(grid, path, start, goal) {
                return Err(format!("{} returned a broken path {:?}", algorithm, path));
            }
        }
    }

    if bfs_result.path.as_ref().map(Vec::len) != expected_len {
        return Err(format!(
            "BFS length {:?} != reference {:?}",
            bfs_result.len(),
            expected_len
        ));
    }
    for (algorithm, result) in [(Algorithm::Dijkstra, &dijkstra_result), (Algorithm::AStar, &a_star_result)] {
        let cost = result.path.as_deref().map(|p| path_cost(grid, p));
        if cost != expected_cost {
            return Err(format!("{} cost {:?} != reference {:?}", algorithm, cost, expected_cost));
        }
    }
    if a_star_result.explored_nodes > dijkstra_result.explored_nodes {
        return Err(format!(
            "A* explored {} cells, Dijkstra only {}",
            a_star_result.explored_nodes, dijkstra_result.explored_nodes
        ));
    }

    Ok(expected_len.is_some())
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub samples: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub failures: Vec<String>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates `samples` random weighted grids of up to `max_side` x `max_side`
/// and checks every algorithm on each.
pub fn validate_random(samples: usize, max_side: usize, seed: Option<u64>) -> Result<ValidationReport> {
    let mut rng = seeded_rng(seed);
    let mut report = ValidationReport::default();

    for sample in 0..samples {
        let rows = rng.gen_range(1..=max_side.max(1));
        let cols = rng.gen_range(1..=max_side.max(1));
        let start = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let goal = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let params = RandomGridParams {
            rows,
            cols,
            wall_density: rng.gen_range(0..=40),
            weight_density: rng.gen_range(0..=30),
            max_weight: 9,
        };
        let grid = random_grid(params, &mut rng, &[start, goal])?;

        report.samples += 1;
        match check_grid(&grid, start, goal) {
            Ok(true) => report.reachable += 1,
            Ok(false) => report.unreachable += 1,
            Err(message) => {
                log::warn!("sample {} failed: {}", sample, message);
                report
                    .failures
                    .push(format!("sample {} ({}x{}, {} -> {}): {}", sample, rows, cols, start, goal, message));
            }
        }
    }

    log::info!(
        "validated {} grids: {} reachable, {} unreachable, {} failures",
        report.samples,
        report.reachable,
        report.unreachable,
        report.failures.len()
    );
    Ok(report)
}

pub fn run_validation(samples: usize, seed: Option<u64>, quiet: bool) -> Result<ValidationReport> {
    println!("=== VALIDATION AGAINST REFERENCE IMPLEMENTATIONS ===");
    let report = validate_random(samples, 20, seed)?;

    println!("Grids checked: {}", report.samples);
    println!("Reachable goals: {}", report.reachable);
    println!("Unreachable goals: {}", report.unreachable);
    if report.passed() {
        println!("✓ BFS, Dijkstra and A* agree with the reference on every grid");
    } else {
        println!("✗ {} mismatches", report.failures.len());
        let shown = if quiet { 1 } else { report.failures.len() };
        for failure in report.failures.iter().take(shown) {
            println!("  {}", failure);
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WALL;

    #[test]
    fn random_grids_agree_with_reference() {
        let report = validate_random(150, 12, Some(2024)).unwrap();
        assert_eq!(report.samples, 150);
        assert!(report.passed(), "{:?}", report.failures);
        assert!(report.reachable > 0);
    }

    #[test]
    fn reference_helpers_on_known_grid() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell(0, 1, 10).unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(0, 2);
        assert_eq!(reference_length(&grid, start, goal), Some(3));
        assert_eq!(reference_cost(&grid, start, goal), Some(4));
        assert_eq!(check_grid(&grid, start, goal), Ok(true));
    }

    #[test]
    fn path_validity() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(1, 1, WALL).unwrap();
        let s = Position::new(0, 0);
        let g = Position::new(0, 2);
        let good = [s, Position::new(0, 1), g];
        let through_wall = [s, Position::new(1, 0), Position::new(1, 1), Position::new(0, 1), g];
        let jump = [s, g];
        assert!(is_valid_path(&grid, &good, s, g));
        assert!(!is_valid_path(&grid, &through_wall, s, g));
        assert!(!is_valid_path(&grid, &jump, s, g));
    }
}
