//! Core data structures for the stepdoku sudoku toolkit.
//!
//! This crate provides the 9×9 board model shared by the generator and the
//! step-observable solver, together with the candidate engine and the
//! validator.
//!
//! # Overview
//!
//! - [`board`]: the [`Board`] grid, candidate computation, validation, and
//!   structural/textual import and export
//! - [`pos`]: the [`Pos`] cell coordinate and row/column/box geometry
//! - [`digit_set`]: [`DigitSet`], a bitset of digits 1-9 used for candidate
//!   sets and duplicate detection
//!
//! # Examples
//!
//! ```
//! use stepdoku_core::{Board, Pos};
//!
//! let mut board = Board::empty();
//! board.set(Pos::new(0, 0), 5);
//!
//! // 5 is no longer a candidate anywhere in row 0, column 0, or the
//! // top-left box.
//! assert!(!board.candidates(Pos::new(0, 8)).contains(5));
//! assert!(!board.candidates(Pos::new(8, 0)).contains(5));
//! assert!(!board.candidates(Pos::new(2, 2)).contains(5));
//! ```

pub mod board;
pub mod digit_set;
pub mod pos;

pub use self::{
    board::{Board, BoardImportError},
    digit_set::DigitSet,
    pos::Pos,
};
