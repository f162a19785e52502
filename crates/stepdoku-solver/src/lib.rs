//! Step-observable sudoku solving for the stepdoku toolkit.
//!
//! The solver fills a puzzle by MRV (minimum-remaining-values) heuristic
//! backtracking and reports every meaningful state transition to a
//! [`SolveObserver`]: candidate scans, tentative placements, and
//! retractions. Between steps it honors the observer's pacing (a per-step
//! delay and a pause flag) and a [`CancelToken`], so a UI can animate,
//! throttle, pause, and abort a solve in flight.
//!
//! # Examples
//!
//! Solve as fast as possible, recording the steps:
//!
//! ```
//! use stepdoku_core::Board;
//! use stepdoku_solver::{CancelToken, solve, testing::RecordingObserver};
//!
//! let puzzle: Board = "\
//!     53..7....6..195....98....6.8...6...34..8.3..17...2...6\
//!     .6....28....419..5....8..79".parse()?;
//!
//! let mut observer = RecordingObserver::new();
//! let solved = solve(&puzzle, &mut observer, &CancelToken::new())?;
//! assert!(solved.is_valid());
//! assert!(!observer.events.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Watch every step:
//!
//! ```
//! use std::time::Duration;
//!
//! use stepdoku_core::Board;
//! use stepdoku_solver::{CancelToken, Phase, SolveObserver, StepEvent, solve};
//!
//! struct Counter(usize);
//!
//! impl SolveObserver for Counter {
//!     fn on_step(&mut self, event: &StepEvent) {
//!         if event.phase == Phase::Place {
//!             self.0 += 1;
//!         }
//!     }
//!
//!     fn delay(&self) -> Duration {
//!         Duration::ZERO
//!     }
//! }
//!
//! let puzzle = Board::empty();
//! let mut counter = Counter(0);
//! let solved = solve(&puzzle, &mut counter, &CancelToken::new())?;
//! assert!(solved.is_valid());
//! assert!(counter.0 >= 81);
//! # Ok::<(), stepdoku_solver::SolveError>(())
//! ```

pub mod background;
pub mod cancel;
pub mod observer;
pub mod step_solver;
pub mod testing;

pub use self::{
    background::{SessionError, SolveHandle},
    cancel::CancelToken,
    observer::{DEFAULT_DELAY, MAX_DELAY, Phase, SolveObserver, StepEvent},
    step_solver::solve,
};

/// Terminal outcomes of a solve other than success.
///
/// Both variants end the session; nothing is retried internally.
/// [`SolveError::Cancelled`] is an outcome, not a failure: it lets callers
/// distinguish "aborted" from "failed".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum SolveError {
    /// Backtracking exhausted every tentative placement without filling the
    /// board: the puzzle admits no solution.
    #[display("puzzle has no solution")]
    Unsolvable,
    /// The cancellation token was observed set at a suspension point.
    #[display("solve was cancelled")]
    Cancelled,
}
