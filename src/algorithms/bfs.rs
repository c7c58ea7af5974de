use crate::algorithms::common::{
    check_endpoints, reconstruct_path, Path, PathfindingAlgorithm, Predecessors,
};
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Breadth-first search. Ignores weights and returns a path with the fewest
/// cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    /// Expands cells in FIFO order. A cell is marked visited and given its
    /// predecessor when it is first queued, so the first route found to every
    /// cell is a shortest one.
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> (Path, usize) {
        if let Some(outcome) = check_endpoints(grid, start, goal) {
            return outcome;
        }

        let mut queue = VecDeque::from([start]);
        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut predecessors = Predecessors::default();
        let mut explored = 0;

        while let Some(current) = queue.pop_front() {
            explored += 1;

            if current == goal {
                let path = reconstruct_path(&predecessors, start, goal);
                log::debug!("bfs: reached {} after exploring {} cells", goal, explored);
                return (path, explored);
            }

            for neighbor in grid.neighbors(current) {
                if grid.is_open(neighbor) && visited.insert(neighbor) {
                    predecessors.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        log::debug!("bfs: {} unreachable from {} ({} cells explored)", goal, start, explored);
        (None, explored)
    }
}
