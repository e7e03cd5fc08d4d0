// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: solve a snake cube and print the chain.

use clap::Parser;
use snake_cube::context::{ConfigResult, Puzzle};
use snake_cube::engine::{render, SearchEngine};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "snake")]
#[command(about = "Fold a snake of straight segments into a cube")]
struct Args {
    /// Segment lengths in order, comma separated (e.g. 2,1,1,1,1,1,1)
    #[arg(long, value_delimiter = ',', conflicts_with = "file")]
    lengths: Option<Vec<usize>>,

    /// JSON puzzle file with a "segment_lengths" array
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print search counters to stderr
    #[arg(long)]
    stats: bool,
}

fn load_puzzle(args: &Args) -> ConfigResult<Puzzle> {
    match (&args.lengths, &args.file) {
        (Some(lengths), _) => Puzzle::new(lengths.clone()),
        (None, Some(path)) => Puzzle::from_file(path),
        (None, None) => Ok(Puzzle::classic()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match load_puzzle(&args) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Invalid puzzle: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut engine = SearchEngine::new();
    let chain = engine.solve(&puzzle);
    println!("{}", render(chain.as_ref()));

    if args.stats {
        eprintln!("{}", engine.statistics());
    }
    ExitCode::SUCCESS
}
