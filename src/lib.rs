//! Shortest paths on a 2D grid.
//!
//! Three searches share one contract: breadth-first search for unweighted
//! moves, Dijkstra for weighted cells, and A* guided by the Manhattan
//! distance. Around them sit a console demo, an algorithm comparison, an
//! empirical complexity analysis and a validation pass against the
//! `pathfinding` crate.

pub mod algorithms;
pub mod analysis;
pub mod config;
pub mod demo;
pub mod grid;
pub mod statistics;
pub mod validation;

pub use algorithms::a_star::AStar;
pub use algorithms::bfs::Bfs;
pub use algorithms::common::{Algorithm, PathFinder, PathfindingAlgorithm, SearchResult};
pub use algorithms::dijkstra::Dijkstra;
pub use grid::{Grid, Position};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {rows}x{cols} (both must be positive)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("Invalid cell value: {0} (use -1 for walls, 0 for empty, >0 for weights)")]
    InvalidCellValue(i32),

    #[error("Failed to parse grid: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
