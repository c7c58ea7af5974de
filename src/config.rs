use crate::algorithms::common::Algorithm;
use crate::grid::Position;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Shortest paths on a grid with BFS, Dijkstra and A*", long_about = None)]
pub struct Config {
    #[arg(long, value_enum, default_value_t = Mode::Demo)]
    pub mode: Mode,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::All)]
    pub algorithm: AlgorithmChoice,

    #[arg(long, default_value_t = 15)]
    pub rows: usize,

    #[arg(long, default_value_t = 15)]
    pub cols: usize,

    /// Percentage of cells turned into walls for random grids
    #[arg(long, default_value_t = 20)]
    pub density: u32,

    /// Percentage of open cells given a random weight
    #[arg(long, default_value_t = 0)]
    pub weight_density: u32,

    #[arg(long, default_value_t = 9)]
    pub max_weight: u32,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as `row,col` (defaults to the top-left corner)
    #[arg(long)]
    pub start: Option<Position>,

    /// Goal cell as `row,col` (defaults to the bottom-right corner)
    #[arg(long)]
    pub goal: Option<Position>,

    /// ASCII grid file (`#` wall, `.` empty, digits for weights)
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Use the built-in example maze instead of a random grid
    #[arg(long, default_value_t = false)]
    pub example: bool,

    /// Runs averaged per measurement in analysis mode
    #[arg(long, default_value_t = 3)]
    pub trials: usize,

    /// Random grids checked in validation mode
    #[arg(long, default_value_t = 200)]
    pub samples: usize,

    /// CSV file for analysis results
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Walk through the canned scenarios
    Demo,
    /// Small text demo on an 8x8 maze
    Console,
    /// Run the selected algorithms on one grid and compare them
    Compare,
    /// Empirical complexity analysis
    Analyze,
    /// Cross-check the searches against reference implementations
    Validate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Bfs,
    Dijkstra,
    AStar,
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Bfs => vec![Algorithm::Bfs],
            AlgorithmChoice::Dijkstra => vec![Algorithm::Dijkstra],
            AlgorithmChoice::AStar => vec![Algorithm::AStar],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn start_or_default(&self) -> Position {
        self.start.unwrap_or(Position::new(0, 0))
    }

    pub fn goal_or_default(&self, rows: usize, cols: usize) -> Position {
        self.goal
            .unwrap_or(Position::new(rows.saturating_sub(1), cols.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["grid_pathfinding"]);
        assert_eq!(config.mode, Mode::Demo);
        assert_eq!(config.algorithm, AlgorithmChoice::All);
        assert_eq!(config.algorithm.algorithms().len(), 3);
        assert_eq!(config.start_or_default(), Position::new(0, 0));
        assert_eq!(config.goal_or_default(15, 15), Position::new(14, 14));
    }

    #[test]
    fn parses_positions_and_algorithm() {
        let config = Config::parse_from([
            "grid_pathfinding",
            "--mode",
            "compare",
            "--algorithm",
            "a-star",
            "--start",
            "1,2",
            "--goal",
            "7,0",
            "--seed",
            "42",
        ]);
        assert_eq!(config.mode, Mode::Compare);
        assert_eq!(config.algorithm.algorithms(), vec![Algorithm::AStar]);
        assert_eq!(config.start, Some(Position::new(1, 2)));
        assert_eq!(config.goal_or_default(10, 10), Position::new(7, 0));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_bad_position() {
        assert!(Config::try_parse_from(["grid_pathfinding", "--start", "x"]).is_err());
    }
}
