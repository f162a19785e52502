//! Step observation and pacing hooks.

use std::time::Duration;

use stepdoku_core::{Board, Pos};

/// The per-step delay used when an observer does not override
/// [`SolveObserver::delay`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(40);

/// The largest per-step delay the solver will honor; longer delays are
/// clamped to this.
pub const MAX_DELAY: Duration = Duration::from_millis(1000);

/// What kind of state transition a step reports.
///
/// Phases exist purely for visualization; they carry no solving-logic
/// weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Phase {
    /// The solver recomputed the candidate set of a blank cell.
    #[display("scan")]
    Scan,
    /// The solver tentatively placed a digit.
    #[display("place")]
    Place,
    /// The solver retracted a tentative placement.
    #[display("retract")]
    Retract,
}

/// One observable solver step.
///
/// `board` is an independent snapshot taken at the moment of the step
/// ([`Board`] is `Copy`); holding or mutating it cannot affect the solver's
/// working state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    /// The cell the step concerns.
    pub pos: Pos,
    /// What happened at that cell.
    pub phase: Phase,
    /// Snapshot of the whole board at the time of the step.
    pub board: Board,
}

/// Hooks through which a caller observes and paces a solve.
///
/// Every method has a sane default, so an observer only overrides what it
/// needs: `()` is the fully defaulted observer (no notifications, ~40 ms
/// steps, never paused).
///
/// - [`on_step`](SolveObserver::on_step) is invoked synchronously for every
///   step, before the step's delay elapses.
/// - [`delay`](SolveObserver::delay) is re-read fresh before every step, so
///   the pace can change mid-run. Values above [`MAX_DELAY`] are clamped.
/// - [`is_paused`](SolveObserver::is_paused) is polled repeatedly (every
///   ~16 ms) while it returns `true`; cancellation stays responsive
///   throughout.
pub trait SolveObserver {
    /// Called once per step with the step's cell, phase, and a board
    /// snapshot.
    fn on_step(&mut self, event: &StepEvent) {
        let _ = event;
    }

    /// Returns the delay to wait after the current step.
    fn delay(&self) -> Duration {
        DEFAULT_DELAY
    }

    /// Returns `true` while the solve should hold between steps.
    fn is_paused(&self) -> bool {
        false
    }
}

/// The fully defaulted observer.
impl SolveObserver for () {}

impl<T: SolveObserver + ?Sized> SolveObserver for &mut T {
    fn on_step(&mut self, event: &StepEvent) {
        (**self).on_step(event);
    }

    fn delay(&self) -> Duration {
        (**self).delay()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }
}

impl<T: SolveObserver + ?Sized> SolveObserver for Box<T> {
    fn on_step(&mut self, event: &StepEvent) {
        (**self).on_step(event);
    }

    fn delay(&self) -> Duration {
        (**self).delay()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_observer_hooks() {
        let mut observer = ();
        observer.on_step(&StepEvent {
            pos: Pos::new(0, 0),
            phase: Phase::Scan,
            board: Board::empty(),
        });
        assert_eq!(observer.delay(), DEFAULT_DELAY);
        assert!(!observer.is_paused());
    }

    #[test]
    fn test_boxed_observer_forwards() {
        struct Fixed;
        impl SolveObserver for Fixed {
            fn delay(&self) -> Duration {
                Duration::from_millis(3)
            }
            fn is_paused(&self) -> bool {
                true
            }
        }

        let boxed: Box<dyn SolveObserver> = Box::new(Fixed);
        assert_eq!(boxed.delay(), Duration::from_millis(3));
        assert!(boxed.is_paused());
    }
}
