//! Example generating a single puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p stepdoku-generator --example generate -- --blanks 40
//! ```
//!
//! Reproduce a previously printed puzzle from its seed:
//!
//! ```sh
//! cargo run -p stepdoku-generator --example generate -- --blanks 40 \
//!     --seed <64-hex-chars>
//! ```
//!
//! Or derive the seed from a phrase:
//!
//! ```sh
//! cargo run -p stepdoku-generator --example generate -- --seed-text "daily #42"
//! ```

use std::process;

use clap::Parser;
use stepdoku_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to blank out of the solved board (0-81).
    #[arg(long, value_name = "COUNT", default_value_t = 40)]
    blanks: u8,

    /// Hex seed (64 characters) for reproducible output.
    #[arg(long, value_name = "SEED", conflicts_with = "seed_text")]
    seed: Option<String>,

    /// Derive the seed from a phrase instead of hex.
    #[arg(long, value_name = "TEXT")]
    seed_text: Option<String>,
}

fn main() {
    let args = Args::parse();
    if args.blanks > 81 {
        eprintln!("--blanks must be at most 81.");
        process::exit(1);
    }

    let seed = match (&args.seed, &args.seed_text) {
        (Some(hex), _) => match hex.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(text)) => PuzzleSeed::from_text(text),
        (None, None) => PuzzleSeed::random(),
    };

    let generator = PuzzleGenerator::new(args.blanks);
    let puzzle = generator.generate_with_seed(seed);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
}
