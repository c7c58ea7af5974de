use crate::algorithms::a_star::AStar;
use crate::algorithms::bfs::Bfs;
use crate::algorithms::dijkstra::Dijkstra;
use crate::grid::{Grid, Position};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

/// Path found by a search: `Some(cells)` from start to goal inclusive, or
/// `None` when the goal cannot be reached.
pub type Path = Option<Vec<Position>>;

/// Maps each reached cell to the cell it was reached from.
pub type Predecessors = FxHashMap<Position, Position>;

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    /// Runs the search and returns the path together with the number of
    /// cells expanded on the way.
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> (Path, usize);

    /// Runs [`PathfindingAlgorithm::search`] and measures how long it took.
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        let started = Instant::now();
        let (path, explored_nodes) = self.search(grid, start, goal);
        SearchResult {
            path,
            explored_nodes,
            elapsed: started.elapsed(),
        }
    }
}

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Path,
    pub explored_nodes: usize,
    /// Wall-clock time of the search. Informational only.
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, 0 when no path was found.
    pub fn len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of moves on the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Total movement cost of the path on `grid`.
    pub fn cost(&self, grid: &Grid) -> Option<u64> {
        self.path.as_deref().map(|p| path_cost(grid, p))
    }
}

/// The three available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    pub fn build(self) -> Box<dyn PathfindingAlgorithm> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::Dijkstra => Box::new(Dijkstra::new()),
            Algorithm::AStar => Box::new(AStar::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search strategy bound to a grid.
///
/// The grid is borrowed immutably for the finder's lifetime, so it cannot be
/// edited while searches are running.
pub struct PathFinder<'g> {
    grid: &'g Grid,
    algorithm: Box<dyn PathfindingAlgorithm>,
}

impl<'g> PathFinder<'g> {
    pub fn new(grid: &'g Grid, algorithm: Algorithm) -> Self {
        Self::with_algorithm(grid, algorithm.build())
    }

    pub fn with_algorithm(grid: &'g Grid, algorithm: Box<dyn PathfindingAlgorithm>) -> Self {
        PathFinder { grid, algorithm }
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn find_path(&self, start: Position, goal: Position) -> SearchResult {
        self.algorithm.find_path(self.grid, start, goal)
    }
}

/// Handles the endpoint cases every strategy shares.
///
/// Returns `Some` when the search can be answered without exploring: either
/// endpoint is blocked or outside the grid (no path), or start equals goal
/// (a single-cell path).
pub(crate) fn check_endpoints(grid: &Grid, start: Position, goal: Position) -> Option<(Path, usize)> {
    if !grid.is_open(start) || !grid.is_open(goal) {
        log::debug!(
            "endpoint blocked or outside {}x{} grid: start {} goal {}",
            grid.rows(),
            grid.cols(),
            start,
            goal
        );
        return Some((None, 0));
    }
    if start == goal {
        return Some((Some(vec![start]), 0));
    }
    None
}

/// Walks the predecessor chain back from `goal` and returns the path in
/// start-to-goal order, or `None` if the chain never reaches `start`.
pub fn reconstruct_path(predecessors: &Predecessors, start: Position, goal: Position) -> Path {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

pub fn manhattan_distance(a: Position, b: Position) -> u64 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u64
}

/// Sum of the costs of every cell entered along `path` (the first cell is free).
pub fn path_cost(grid: &Grid, path: &[Position]) -> u64 {
    path.iter().skip(1).map(|&p| u64::from(grid.cost_at(p))).sum()
}

/// Entry in the best-first frontier.
///
/// Ordered by `priority`, then `tie_break`, then position. The comparison is
/// reversed so `BinaryHeap` pops the smallest entry first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierNode {
    pub priority: u64,
    pub tie_break: u64,
    pub position: Position,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.tie_break.cmp(&self.tie_break))
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
