//! Example watching a solve step by step in the terminal.
//!
//! Generates a puzzle, then solves it while printing each scan, placement,
//! and retraction.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p stepdoku-solver --example watch_solve -- --blanks 40 --delay-ms 20
//! ```
//!
//! Replay a specific puzzle:
//!
//! ```sh
//! cargo run -p stepdoku-solver --example watch_solve -- --seed-text "daily #42"
//! ```

use std::process;
use std::time::Duration;

use clap::Parser;
use stepdoku_generator::{PuzzleGenerator, PuzzleSeed};
use stepdoku_solver::{CancelToken, Phase, SolveError, SolveObserver, StepEvent, solve};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to blank out of the solved board (0-81).
    #[arg(long, value_name = "COUNT", default_value_t = 40)]
    blanks: u8,

    /// Delay between steps, in milliseconds (0-1000).
    #[arg(long, value_name = "MS", default_value_t = 0)]
    delay_ms: u64,

    /// Derive the generation seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    seed_text: Option<String>,
}

struct PrintingObserver {
    delay: Duration,
    steps: usize,
}

impl SolveObserver for PrintingObserver {
    fn on_step(&mut self, event: &StepEvent) {
        self.steps += 1;
        let verb = match event.phase {
            Phase::Scan => "scan   ",
            Phase::Place => "place  ",
            Phase::Retract => "retract",
        };
        println!("{:>6}  {verb} {}", self.steps, event.pos);
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if args.blanks > 81 {
        eprintln!("--blanks must be at most 81.");
        process::exit(1);
    }

    let seed = args
        .seed_text
        .as_deref()
        .map_or_else(PuzzleSeed::random, PuzzleSeed::from_text);
    let puzzle = PuzzleGenerator::new(args.blanks).generate_with_seed(seed);

    println!("Seed: {}", puzzle.seed);
    println!();
    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();

    let mut observer = PrintingObserver {
        delay: Duration::from_millis(args.delay_ms),
        steps: 0,
    };
    match solve(&puzzle.problem, &mut observer, &CancelToken::new()) {
        Ok(solved) => {
            println!();
            println!("Solved in {} steps:", observer.steps);
            for line in solved.to_string().lines() {
                println!("  {line}");
            }
            if !solved.is_valid() {
                eprintln!("Solver produced an invalid board.");
                process::exit(1);
            }
        }
        Err(SolveError::Cancelled) => {
            println!("Cancelled.");
        }
        Err(err) => {
            eprintln!("Solve failed: {err}");
            process::exit(1);
        }
    }
}
