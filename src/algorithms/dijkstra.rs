use crate::algorithms::common::{
    check_endpoints, reconstruct_path, FrontierNode, Path, PathfindingAlgorithm, Predecessors,
};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BinaryHeap;

/// Dijkstra's algorithm over cell costs. Returns a cheapest path.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> (Path, usize) {
        if let Some(outcome) = check_endpoints(grid, start, goal) {
            return outcome;
        }
        let outcome = best_first(grid, start, goal, |_| 0);
        log::debug!(
            "dijkstra: {} -> {} cost {:?}, {} cells explored",
            start,
            goal,
            outcome.goal_distance,
            outcome.explored_nodes
        );
        (outcome.path, outcome.explored_nodes)
    }
}

/// Result of a best-first search, including the settled distance at the goal.
#[derive(Debug)]
pub(crate) struct BestFirst {
    pub path: Path,
    pub explored_nodes: usize,
    pub goal_distance: Option<u64>,
}

/// Best-first search shared by Dijkstra and A*.
///
/// The frontier is keyed by `g + heuristic(cell)`; equal keys pop the cell
/// with the smaller heuristic first, then the smaller position. Cells are
/// pushed again whenever their distance improves and stale entries are
/// skipped when popped. With `heuristic = |_| 0` this is plain Dijkstra.
///
/// `start` and `goal` must already be known walkable.
pub(crate) fn best_first<H>(grid: &Grid, start: Position, goal: Position, heuristic: H) -> BestFirst
where
    H: Fn(Position) -> u64,
{
    let mut distances: FxHashMap<Position, u64> = FxHashMap::default();
    let mut predecessors = Predecessors::default();
    let mut settled: FxHashSet<Position> = FxHashSet::default();
    let mut frontier = BinaryHeap::new();

    distances.insert(start, 0);
    let h = heuristic(start);
    frontier.push(FrontierNode {
        priority: h,
        tie_break: h,
        position: start,
    });

    let mut explored = 0;
    while let Some(FrontierNode { position: current, .. }) = frontier.pop() {
        if !settled.insert(current) {
            continue;
        }
        explored += 1;

        let current_distance = distances[&current];
        if current == goal {
            return BestFirst {
                path: reconstruct_path(&predecessors, start, goal),
                explored_nodes: explored,
                goal_distance: Some(current_distance),
            };
        }

        for neighbor in grid.neighbors(current) {
            if !grid.is_open(neighbor) || settled.contains(&neighbor) {
                continue;
            }
            let candidate = current_distance + u64::from(grid.cost_at(neighbor));
            let known = distances.get(&neighbor).copied().unwrap_or(u64::MAX);
            if candidate < known {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                let h = heuristic(neighbor);
                log::trace!("push {} g={} h={}", neighbor, candidate, h);
                frontier.push(FrontierNode {
                    priority: candidate + h,
                    tie_break: h,
                    position: neighbor,
                });
            }
        }
    }

    BestFirst {
        path: None,
        explored_nodes: explored,
        goal_distance: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::Bfs;
    use crate::algorithms::common::path_cost;
    use crate::grid::WALL;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn open_grid() {
        let grid = Grid::new(5, 5).unwrap();
        let (path, explored) = Dijkstra.search(&grid, p(0, 0), p(4, 4));
        let path = path.unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path_cost(&grid, &path), 8);
        assert_eq!(explored, 25);
    }

    #[test]
    fn prefers_longer_cheaper_route() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell(0, 1, 10).unwrap();
        let (path, _) = Dijkstra.search(&grid, p(0, 0), p(0, 2));
        assert_eq!(
            path,
            Some(vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(0, 2)])
        );
    }

    #[test]
    fn avoids_expensive_band() {
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..4 {
            grid.set_cell(2, col, 10).unwrap();
        }
        let (path, _) = Dijkstra.search(&grid, p(0, 0), p(4, 4));
        let path = path.unwrap();
        assert_eq!(path_cost(&grid, &path), 8);
        assert!(path.iter().all(|c| !(c.row == 2 && (1..4).contains(&c.col))));
    }

    #[test]
    fn full_barrier_is_unreachable() {
        let mut grid = Grid::new(5, 5).unwrap();
        for row in 0..5 {
            grid.set_cell(row, 2, WALL).unwrap();
        }
        let (path, explored) = Dijkstra.search(&grid, p(0, 0), p(0, 4));
        assert_eq!(path, None);
        assert_eq!(explored, 10);
    }

    #[test]
    fn matches_bfs_length_on_uniform_costs() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell(1, 1, WALL).unwrap();
        let (bfs_path, _) = Bfs.search(&grid, p(0, 0), p(4, 4));
        let (dij_path, _) = Dijkstra.search(&grid, p(0, 0), p(4, 4));
        assert_eq!(bfs_path.unwrap().len(), dij_path.unwrap().len());
    }

    #[test]
    fn reconstructed_cost_matches_goal_distance() {
        let mut grid = Grid::new(6, 6).unwrap();
        let weights = [(0, 1, 4), (1, 1, 7), (2, 3, 3), (3, 3, 9), (4, 2, 2), (5, 4, 6)];
        for (row, col, w) in weights {
            grid.set_cell(row, col, w).unwrap();
        }
        grid.set_cell(2, 2, WALL).unwrap();
        let goal = p(5, 5);
        let outcome = best_first(&grid, p(0, 0), goal, |_| 0);
        let path = outcome.path.unwrap();
        assert_eq!(Some(path_cost(&grid, &path)), outcome.goal_distance);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set_cell(3, 3, 5).unwrap();
        grid.set_cell(4, 2, WALL).unwrap();
        let first = Dijkstra.search(&grid, p(0, 0), p(7, 7));
        let second = Dijkstra.search(&grid, p(0, 0), p(7, 7));
        assert_eq!(first, second);
    }
}
