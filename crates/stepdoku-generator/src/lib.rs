//! Sudoku puzzle generation for the stepdoku toolkit.
//!
//! This crate produces fully solved random boards by randomized
//! backtracking fill, then carves a configurable number of cells out of
//! them to make playable puzzles.
//!
//! Generation is reproducible: every puzzle carries a [`PuzzleSeed`], and
//! [`PuzzleGenerator::generate_with_seed`] replays it exactly.
//!
//! Carved puzzles are not guaranteed to have a unique solution; the carver
//! removes uniformly random cells without re-solving.
//!
//! # Examples
//!
//! ```
//! use stepdoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(40);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_valid());
//! assert_eq!(puzzle.problem.blanks().len(), 40);
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator, carve, complete_board},
    seed::{ParseSeedError, PuzzleSeed},
};
