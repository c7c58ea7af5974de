//! Terminal walkthroughs: canned scenarios and single-grid comparisons.

use crate::algorithms::common::{Algorithm, PathFinder};
use crate::grid::generate;
use crate::grid::{Grid, Position, WALL};
use crate::statistics::{Comparison, Statistics};
use crate::Result;

/// A grid with fixed endpoints, shown to every algorithm in turn.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub title: String,
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
}

impl Scenario {
    pub fn new(title: &str, grid: Grid, start: Position, goal: Position) -> Self {
        Scenario {
            title: title.to_string(),
            grid,
            start,
            goal,
        }
    }
}

/// Runs each algorithm on the same grid and collects the results.
pub fn compare(grid: &Grid, start: Position, goal: Position, algorithms: &[Algorithm]) -> Comparison {
    let mut comparison = Comparison::default();
    for &algorithm in algorithms {
        let result = PathFinder::new(grid, algorithm).find_path(start, goal);
        comparison.push(Statistics::from_result(algorithm, &result, grid));
    }
    comparison
}

/// The walkthrough shown by `--mode demo`.
pub fn scenarios() -> Result<Vec<Scenario>> {
    let open = Grid::new(5, 5)?;

    let maze = generate::gapped_walls(8, 8, &[3, 5], &[3, 4])?;

    let mut weighted = Grid::new(3, 5)?;
    for col in 1..4 {
        weighted.set_cell(1, col, 5)?;
    }

    let mut isolated = Grid::new(7, 7)?;
    for i in 3..5 {
        isolated.set_cell(2, i, WALL)?;
        isolated.set_cell(5, i, WALL)?;
        isolated.set_cell(i, 2, WALL)?;
        isolated.set_cell(i, 5, WALL)?;
    }

    Ok(vec![
        Scenario::new(
            "Simple Path on Open Grid (5x5)",
            open,
            Position::new(0, 0),
            Position::new(4, 4),
        ),
        Scenario::new(
            "Maze with Walls (8x8)",
            maze,
            Position::new(0, 0),
            Position::new(0, 7),
        ),
        Scenario::new(
            "Weighted Grid (cost-5 band in the middle row)",
            weighted,
            Position::new(0, 0),
            Position::new(2, 4),
        ),
        Scenario::new(
            "Algorithm Comparison (20x20 grid with obstacles)",
            generate::corridor_grid(20)?,
            Position::new(0, 0),
            Position::new(19, 19),
        ),
        Scenario::new(
            "Unreachable Goal (isolated by walls)",
            isolated,
            Position::new(0, 0),
            Position::new(3, 3),
        ),
    ])
}

pub fn print_scenario(index: usize, scenario: &Scenario, algorithms: &[Algorithm], quiet: bool) {
    println!();
    println!("{}", "=".repeat(60));
    println!("DEMO {}: {}", index + 1, scenario.title);
    println!("{}", "=".repeat(60));

    if !quiet {
        println!("\nGrid (. = empty, # = wall, digits = cost):");
        println!("{}", scenario.grid);
        println!("\nStart: {}", scenario.start);
        println!("Goal: {}", scenario.goal);
    }

    for &algorithm in algorithms {
        let result = PathFinder::new(&scenario.grid, algorithm).find_path(scenario.start, scenario.goal);
        let stats = Statistics::from_result(algorithm, &result, &scenario.grid);
        println!();
        print!("{}", stats);
        if !quiet {
            if let Some(path) = result.path.as_deref() {
                println!(
                    "{}",
                    scenario.grid.render_with_path(Some(path), scenario.start, scenario.goal)
                );
            }
        }
    }
}

pub fn run_demo(algorithms: &[Algorithm], quiet: bool) -> Result<()> {
    println!("=== SHORTEST PATH ALGORITHMS DEMO ===");
    println!("{}", algorithms.iter().map(|a| a.name()).collect::<Vec<_>>().join(" | "));

    for (i, scenario) in scenarios()?.iter().enumerate() {
        print_scenario(i, scenario, algorithms, quiet);
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("ALL DEMOS COMPLETED");
    println!("{}", "=".repeat(60));
    Ok(())
}

/// Small text demo: an 8x8 grid split by a wall in column 3 that is open on
/// rows 3 and 4.
pub fn run_console(algorithms: &[Algorithm]) -> Result<()> {
    println!("{}", "=".repeat(50));
    println!("SHORTEST PATH ALGORITHMS DEMO");
    println!("{}", "=".repeat(50));

    let grid = generate::gapped_walls(8, 8, &[3], &[3, 4])?;
    let start = Position::new(0, 0);
    let goal = Position::new(0, 7);

    println!("\nGrid (. = empty, # = wall):");
    println!("{}", grid);
    println!("\nStart: {}", start);
    println!("Goal: {}", goal);

    for &algorithm in algorithms {
        let result = PathFinder::new(&grid, algorithm).find_path(start, goal);
        println!("\n{}:", algorithm);
        match result.path.as_deref() {
            Some(path) => {
                let cells: Vec<String> = path.iter().map(Position::to_string).collect();
                println!("  Path: [{}]", cells.join(", "));
                println!("  Length: {}", path.len());
                println!("  Explored: {}", result.explored_nodes);
            }
            None => println!("  No path found"),
        }
    }
    Ok(())
}

pub fn print_comparison(grid: &Grid, start: Position, goal: Position, comparison: &Comparison, quiet: bool) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!(
        "Grid {}x{}, Walls: {}, Start: {}, Goal: {}",
        grid.rows(),
        grid.cols(),
        grid.walls(),
        start,
        goal
    );
    if !quiet {
        println!();
        println!("{}", grid);
    }
    println!();
    print!("{}", comparison);

    if !comparison.optimal_costs_agree() {
        println!("⚠ Dijkstra and A* disagree on the optimal cost");
    }
}
