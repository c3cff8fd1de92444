//! # tsp-brute CLI
//!
//! Command-line interface for the tsp-brute library.
//! Loads a point file, runs the exhaustive search, and prints the winning
//! tour, its total distance, and the elapsed wall-clock time.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use log::error;

use tsp_brute::geometry::Euclidean;
use tsp_brute::{brute_force_search, io, Result};

/// Exhaustive brute-force solver for the Euclidean TSP
#[derive(Parser)]
#[command(name = "tsp-brute")]
#[command(about = "Finds the shortest closed tour over a point file by exhaustive search")]
#[command(long_about = "Scores every visiting order over the input points and keeps the
shortest closed tour. Runtime grows factorially with the number of
points; inputs beyond roughly 11 points are impractical.

Input format: one point per line as whitespace- or tab-delimited
`id x y` fields.")]
#[command(version)]
struct Cli {
    /// Point file to load
    file: PathBuf,

    /// Enable debug logging of incumbent improvements
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let points = io::read_points(&cli.file)?;

    let start = Instant::now();
    let result = brute_force_search(&points, &Euclidean)?;
    let elapsed = start.elapsed();

    println!("Shortest path:");
    for point in &result.tour {
        println!("{} ({}, {})", point.id, point.x, point.y);
    }
    println!("Total distance: {}", result.cost);
    println!(
        "Runtime: {:.3?} ({} permutations examined)",
        elapsed, result.permutations_examined
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
