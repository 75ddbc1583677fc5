use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::{cursor, execute, terminal};
use flexi_logger::Logger;
use log::{info, warn};

use mazepath::animation::TerminalAnimator;
use mazepath::report::{legend, stats_table};
use mazepath::{run_algorithm, Algorithm, Grid, Markers, RunConfig, SearchError, SearchResult, Snapshot};


/// Pause before and after each animated run
const ANIMATION_PAUSE: Duration = Duration::from_secs(1);

const BANNER_WIDTH: usize = 60;


#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Choice {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// A* search with the Manhattan heuristic
    Astar,
    /// Greedy best-first search
    Greedy,
    /// Run and compare every algorithm
    All,
}

impl Choice {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Choice::Bfs => vec![Algorithm::Bfs],
            Choice::Dfs => vec![Algorithm::Dfs],
            Choice::Astar => vec![Algorithm::AStar],
            Choice::Greedy => vec![Algorithm::Greedy],
            Choice::All => Algorithm::ALL.to_vec(),
        }
    }
}

fn parse_delay(input: &str) -> Result<Duration, String> {
    let seconds: f64 = input.parse().map_err(|e| format!("invalid delay '{input}': {e}"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("invalid delay '{input}': {e}"))
}


#[derive(Debug, Parser)]
#[command(author, version, about = "Solve a text maze with BFS, DFS, A* and greedy best-first search", long_about = None)]
struct Cli {
    /// Maze file: 'X' walls, 'A' start, 'B' end, anything else is open floor
    #[arg(value_name = "FILE")]
    maze: PathBuf,
    /// Algorithm to run
    #[arg(long, short, value_enum, default_value_t = Choice::All)]
    algorithm: Choice,
    /// Animate the exploration in the terminal (Esc, q or s skips)
    #[arg(long)]
    animate: bool,
    /// Pause between animation frames, in seconds
    #[arg(long, short, default_value = "0.05", value_parser = parse_delay)]
    delay: Duration,
    /// Marker for cells on the final path
    #[arg(long, default_value_t = '·')]
    path_marker: char,
    /// Marker for explored cells off the path
    #[arg(long, default_value_t = '░')]
    explored_marker: char,
    /// Marker for the node being expanded during animation
    #[arg(long, default_value_t = '◉')]
    current_marker: char,
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> RunConfig {
        RunConfig {
            algorithms: self.algorithm.algorithms(),
            animate: self.animate,
            delay: self.delay,
            markers: Markers {
                path: self.path_marker,
                explored: self.explored_marker,
                current: self.current_marker,
            },
        }
    }
}


fn banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn clear_screen() -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    out.flush()
}


/// Run one algorithm, animated if configured
/// An interrupted animation is rerun from scratch without animation
fn solve(grid: &Grid, algorithm: Algorithm, config: &RunConfig) -> Result<SearchResult, Box<dyn Error>> {
    if !config.animate {
        return Ok(run_algorithm(algorithm, grid, false, None)?);
    }

    println!("\nAnimating: {algorithm}");
    println!("Press Esc, q or s to skip animation...\n");
    thread::sleep(ANIMATION_PAUSE);

    let animated = {
        let mut animator = TerminalAnimator::stdout(grid, algorithm, config)?;
        run_algorithm(algorithm, grid, true, Some(&mut animator))
    };

    match animated {
        Ok(result) => {
            thread::sleep(ANIMATION_PAUSE);
            Ok(result)
        }
        Err(e @ SearchError::Interrupted { .. }) => {
            warn!("{e}, running again without animation");
            clear_screen()?;
            println!("Animation skipped. Running without animation...");
            Ok(run_algorithm(algorithm, grid, false, None)?)
        }
    }
}

fn print_result(grid: &Grid, result: &SearchResult, config: &RunConfig) {
    let snapshot = Snapshot::of_result(grid, result, config.markers);
    match result.path {
        Some(_) => {
            println!("\n✓ Path found!\n");
            println!("{}\n", legend(&config.markers));
            println!("Maze with exploration visualization:");
        }
        None => {
            println!("\n✗ No path found!");
            println!("\nMaze showing explored areas:");
        }
    }
    println!("{snapshot}\n");
}

fn print_comparison(grid: &Grid, results: &[SearchResult], config: &RunConfig) {
    println!();
    banner("ALGORITHM COMPARISON - STATISTICS");
    println!("\n{}", stats_table(results));

    println!();
    banner("VISUAL COMPARISON");
    println!("\n{}", legend(&config.markers));

    for result in results {
        println!("\n{}", "-".repeat(BANNER_WIDTH));
        println!("{}", result.algorithm);
        println!("{}", "-".repeat(BANNER_WIDTH));
        if result.path.is_none() {
            println!("No path found!");
        }
        println!("{}\n", Snapshot::of_result(grid, result, config.markers));
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let config = cli.config();
    info!(
        "solving {} with {:?}, animate: {}, delay: {:?}",
        cli.maze.display(), config.algorithms, config.animate, config.delay
    );

    let grid = Grid::load(&cli.maze)?;

    banner("MAZE PATH SOLVER - Multiple Search Algorithms");
    println!("\nMaze loaded successfully!");
    println!("Dimensions: {} x {}", grid.rows(), grid.cols());
    println!("Start: {}, End: {}\n", grid.start(), grid.end());
    println!("Original Maze:");
    println!("{}\n", Snapshot::plain(&grid));

    if config.is_comparison() {
        println!();
        banner("COMPARING ALL ALGORITHMS");
    }

    let mut results = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        if !config.is_comparison() {
            println!();
            banner(&format!("Running: {algorithm}"));
        }
        results.push(solve(&grid, algorithm, &config)?);
    }

    if config.animate {
        clear_screen()?;
    }

    match results.as_slice() {
        [single] => {
            println!("\n{}", stats_table(std::slice::from_ref(single)));
            print_result(&grid, single, &config);
        }
        many => print_comparison(&grid, many, &config),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
