use clap::Parser;

use grid_pathfinding::analysis;
use grid_pathfinding::config::{Config, Mode};
use grid_pathfinding::demo;
use grid_pathfinding::grid::generate::{self, RandomGridParams};
use grid_pathfinding::grid::Grid;
use grid_pathfinding::validation;
use grid_pathfinding::Result;

fn main() {
    env_logger::init();
    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let algorithms = config.algorithm.algorithms();

    match config.mode {
        Mode::Demo => demo::run_demo(&algorithms, config.quiet),
        Mode::Console => demo::run_console(&algorithms),
        Mode::Compare => {
            let grid = build_grid(config)?;
            let start = config.start_or_default();
            let goal = config.goal_or_default(grid.rows(), grid.cols());
            let comparison = demo::compare(&grid, start, goal, &algorithms);
            demo::print_comparison(&grid, start, goal, &comparison, config.quiet);
            Ok(())
        }
        Mode::Analyze => {
            analysis::run_analysis(config.trials, config.output_file.as_deref())?;
            Ok(())
        }
        Mode::Validate => {
            let report = validation::run_validation(config.samples, config.seed, config.quiet)?;
            if !report.passed() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Grid for compare mode: a map file, the example maze, or a random grid.
fn build_grid(config: &Config) -> Result<Grid> {
    if let Some(path) = &config.map {
        log::info!("loading grid from {}", path.display());
        return std::fs::read_to_string(path)?.parse();
    }
    if config.example {
        return generate::example_maze(config.rows, config.cols);
    }

    let start = config.start_or_default();
    let goal = config.goal_or_default(config.rows, config.cols);
    let params = RandomGridParams {
        rows: config.rows,
        cols: config.cols,
        wall_density: config.density,
        weight_density: config.weight_density,
        max_weight: config.max_weight,
    };
    if config.seed.is_none() {
        println!("Random grid without --seed; results will differ between runs");
    }
    generate::random_grid(params, &mut generate::seeded_rng(config.seed), &[start, goal])
}
