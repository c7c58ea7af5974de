use crate::algorithms::common::{check_endpoints, manhattan_distance, Path, PathfindingAlgorithm};
use crate::algorithms::dijkstra::best_first;
use crate::grid::{Grid, Position};

/// Implements the A* pathfinding algorithm with a Manhattan-distance heuristic.
///
/// Every move costs at least 1, so the Manhattan distance never overestimates
/// the remaining cost and the returned path is as cheap as Dijkstra's. The
/// heuristic pulls the search toward the goal, which usually expands far
/// fewer cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* algorithm provider.
    pub fn new() -> Self {
        AStar
    }

    /// Manhattan distance from `pos` to `goal`.
    pub fn heuristic(pos: Position, goal: Position) -> u64 {
        manhattan_distance(pos, goal)
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    /// Finds a path from start to goal using the A* algorithm.
    ///
    /// # Arguments
    ///
    /// * `grid` - The grid to search.
    /// * `start` - The starting position.
    /// * `goal` - The goal position.
    ///
    /// # Returns
    ///
    /// The path (or `None` if the goal cannot be reached) and the number of
    /// cells expanded.
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> (Path, usize) {
        if let Some(outcome) = check_endpoints(grid, start, goal) {
            return outcome;
        }
        let outcome = best_first(grid, start, goal, |p| Self::heuristic(p, goal));
        log::debug!(
            "a*: {} -> {} cost {:?}, {} cells explored",
            start,
            goal,
            outcome.goal_distance,
            outcome.explored_nodes
        );
        (outcome.path, outcome.explored_nodes)
    }
}
