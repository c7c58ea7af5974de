use crate::algorithms::common::{Algorithm, SearchResult};
use crate::grid::Grid;
use std::fmt;
use std::time::Duration;

/// Summary of one search, ready for printing.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub algorithm: Algorithm,
    pub found: bool,
    pub path_length: usize,
    pub path_cost: u64,
    pub explored_nodes: usize,
    pub elapsed: Duration,
}

impl Statistics {
    pub fn from_result(algorithm: Algorithm, result: &SearchResult, grid: &Grid) -> Self {
        Statistics {
            algorithm,
            found: result.found(),
            path_length: result.len(),
            path_cost: result.cost(grid).unwrap_or(0),
            explored_nodes: result.explored_nodes,
            elapsed: result.elapsed,
        }
    }

    /// Explored cells per path cell. Lower means a more focused search.
    pub fn exploration_ratio(&self) -> f64 {
        if self.path_length > 0 {
            self.explored_nodes as f64 / self.path_length as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.algorithm)?;
        if self.found {
            writeln!(f, "  Path length: {} cells", self.path_length)?;
            writeln!(f, "  Path cost: {}", self.path_cost)?;
            writeln!(f, "  Explored per path cell: {:.2}", self.exploration_ratio())?;
        } else {
            writeln!(f, "  Goal unreachable!")?;
        }
        writeln!(f, "  Nodes explored: {}", self.explored_nodes)?;
        writeln!(f, "  Time: {:.3} ms", self.elapsed.as_secs_f64() * 1000.0)?;
        Ok(())
    }
}

/// Repeated timings of the same search.
#[derive(Debug, Clone, Default)]
pub struct TimingData {
    pub find_path_times: Vec<Duration>,
}

impl TimingData {
    pub fn new() -> Self {
        TimingData {
            find_path_times: Vec::new(),
        }
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.find_path_times.push(elapsed);
    }

    pub fn average_find_path_time(&self) -> Duration {
        if self.find_path_times.is_empty() {
            Duration::from_nanos(0)
        } else {
            let total: Duration = self.find_path_times.iter().sum();
            total / self.find_path_times.len() as u32
        }
    }

    pub fn total_calls(&self) -> usize {
        self.find_path_times.len()
    }
}

/// Side-by-side results of every algorithm on the same grid.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub results: Vec<Statistics>,
}

impl Comparison {
    pub fn push(&mut self, stats: Statistics) {
        self.results.push(stats);
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&Statistics> {
        self.results.iter().find(|s| s.algorithm == algorithm)
    }

    /// Whether every weighted search agrees on the cheapest cost.
    pub fn optimal_costs_agree(&self) -> bool {
        match (self.get(Algorithm::Dijkstra), self.get(Algorithm::AStar)) {
            (Some(d), Some(a)) => d.found == a.found && d.path_cost == a.path_cost,
            _ => true,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:<8} {:<8} {:<8} {:<10} {:<12}",
            "Algorithm", "Found", "Length", "Cost", "Explored", "Time"
        )?;
        writeln!(f, "{}", "-".repeat(60))?;
        for s in &self.results {
            let found = if s.found { "✓" } else { "✗" };
            let length = if s.found { s.path_length.to_string() } else { "N/A".to_string() };
            let cost = if s.found { s.path_cost.to_string() } else { "N/A".to_string() };
            writeln!(
                f,
                "{:<10} {:<8} {:<8} {:<8} {:<10} {:<12}",
                s.algorithm.name(),
                found,
                length,
                cost,
                s.explored_nodes,
                format!("{:.2?}", s.elapsed)
            )?;
        }

        if let (Some(d), Some(a)) = (self.get(Algorithm::Dijkstra), self.get(Algorithm::AStar)) {
            if a.explored_nodes > 0 && d.found && a.found {
                writeln!(f)?;
                writeln!(
                    f,
                    "A* explored {:.1}x fewer cells than Dijkstra",
                    d.explored_nodes as f64 / a.explored_nodes as f64
                )?;
            }
        }
        Ok(())
    }
}
