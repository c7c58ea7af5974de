//! Empirical complexity analysis.
//!
//! Times each algorithm on growing open grids and on a fixed-size grid with
//! increasing wall density, and records how many cells each one explores.
//! Results print as tables and can be written to CSV for plotting elsewhere.

use crate::algorithms::common::{Algorithm, PathFinder};
use crate::grid::generate;
use crate::grid::{Grid, Position};
use crate::statistics::TimingData;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

pub const SCALABILITY_SIZES: [usize; 6] = [5, 10, 15, 20, 30, 40];
pub const DENSITY_GRID_SIZE: usize = 30;
pub const DENSITIES: [u32; 5] = [0, 10, 20, 30, 40];
pub const CORRIDOR_SIZES: [usize; 3] = [10, 20, 30];

const CSV_HEADER: &str = "experiment,parameter,algorithm,avg_time_us,explored_nodes,path_len";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    Scalability,
    Density,
    Corridor,
}

impl Experiment {
    pub fn label(self) -> &'static str {
        match self {
            Experiment::Scalability => "scalability",
            Experiment::Density => "density",
            Experiment::Corridor => "corridor",
        }
    }
}

/// One measurement: an algorithm on one grid configuration.
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
    pub experiment: Experiment,
    /// Grid side length or wall density, depending on the experiment.
    pub parameter: usize,
    pub algorithm: Algorithm,
    pub average_time: Duration,
    pub explored_nodes: usize,
    pub path_len: Option<usize>,
}

/// Searches corner to corner `trials` times and averages the elapsed time.
pub fn measure(
    experiment: Experiment,
    parameter: usize,
    grid: &Grid,
    algorithm: Algorithm,
    trials: usize,
) -> AnalysisRecord {
    let finder = PathFinder::new(grid, algorithm);
    let start = Position::new(0, 0);
    let goal = Position::new(finder.grid().rows() - 1, finder.grid().cols() - 1);
    log::debug!("{} on {} {}: {} trials", finder.name(), experiment.label(), parameter, trials);

    let mut timing = TimingData::new();
    let mut explored_nodes = 0;
    let mut path_len = None;
    for _ in 0..trials.max(1) {
        let result = finder.find_path(start, goal);
        timing.record(result.elapsed);
        explored_nodes = result.explored_nodes;
        path_len = result.path.as_ref().map(Vec::len);
    }

    AnalysisRecord {
        experiment,
        parameter,
        algorithm,
        average_time: timing.average_find_path_time(),
        explored_nodes,
        path_len,
    }
}

/// Open square grids of increasing size.
pub fn analyze_scalability(sizes: &[usize], trials: usize) -> Result<Vec<AnalysisRecord>> {
    log::info!("scalability analysis over sizes {:?}", sizes);
    let mut records = Vec::new();
    for &size in sizes {
        let grid = Grid::new(size, size)?;
        for algorithm in Algorithm::ALL {
            records.push(measure(Experiment::Scalability, size, &grid, algorithm, trials));
        }
    }
    Ok(records)
}

/// A fixed-size grid with walls at increasing densities.
pub fn analyze_density(size: usize, densities: &[u32], trials: usize) -> Result<Vec<AnalysisRecord>> {
    log::info!("density analysis on {}x{} over {:?}", size, size, densities);
    let mut records = Vec::new();
    for &density in densities {
        let grid = generate::density_pattern(size, density)?;
        for algorithm in Algorithm::ALL {
            records.push(measure(Experiment::Density, density as usize, &grid, algorithm, trials));
        }
    }
    Ok(records)
}

/// Diagonal walls with a guaranteed corridor along the top and right edges.
pub fn analyze_corridors(sizes: &[usize], trials: usize) -> Result<Vec<AnalysisRecord>> {
    log::info!("corridor analysis over sizes {:?}", sizes);
    let mut records = Vec::new();
    for &size in sizes {
        let grid = generate::corridor_grid(size)?;
        for algorithm in Algorithm::ALL {
            records.push(measure(Experiment::Corridor, size, &grid, algorithm, trials));
        }
    }
    Ok(records)
}

pub fn print_table(title: &str, parameter_name: &str, records: &[AnalysisRecord]) {
    println!("\n{}", title);
    println!(
        "{:<10} | {:<9} | {:>12} | {:>9} | {:>8}",
        parameter_name, "Algorithm", "Time (ms)", "Explored", "Path"
    );
    println!("{}", "-".repeat(62));
    for record in records {
        let path = record
            .path_len
            .map_or_else(|| "N/A".to_string(), |len| len.to_string());
        println!(
            "{:<10} | {:<9} | {:>12.3} | {:>9} | {:>8}",
            record.parameter,
            record.algorithm.name(),
            record.average_time.as_secs_f64() * 1000.0,
            record.explored_nodes,
            path
        );
    }
}

pub fn write_csv<W: Write>(writer: &mut W, records: &[AnalysisRecord]) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{:.3},{},{}",
            record.experiment.label(),
            record.parameter,
            record.algorithm.name(),
            record.average_time.as_secs_f64() * 1_000_000.0,
            record.explored_nodes,
            record.path_len.map_or_else(String::new, |len| len.to_string())
        )?;
    }
    Ok(())
}

pub fn save_csv(path: &Path, records: &[AnalysisRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Runs every experiment, prints the tables and optionally saves a CSV.
pub fn run_analysis(trials: usize, output_file: Option<&Path>) -> Result<Vec<AnalysisRecord>> {
    println!("{}", "=".repeat(60));
    println!("EMPIRICAL COMPLEXITY ANALYSIS");
    println!("{}", "=".repeat(60));

    let scalability = analyze_scalability(&SCALABILITY_SIZES, trials)?;
    print_table("Algorithm scalability (open n x n grid)", "Grid Size", &scalability);

    let density = analyze_density(DENSITY_GRID_SIZE, &DENSITIES, trials)?;
    print_table(
        &format!("Obstacle density ({0}x{0} grid)", DENSITY_GRID_SIZE),
        "Density %",
        &density,
    );

    let corridors = analyze_corridors(&CORRIDOR_SIZES, trials)?;
    print_table("Diagonal walls with open corridor", "Grid Size", &corridors);

    let mut records = scalability;
    records.extend(density);
    records.extend(corridors);

    if let Some(path) = output_file {
        save_csv(path, &records)?;
        println!("\nResults saved to: {}", path.display());
    }

    println!("\n{}", "=".repeat(60));
    println!("Analysis Complete!");
    println!("{}", "=".repeat(60));
    Ok(records)
}
