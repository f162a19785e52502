//! Observer implementations for tests and examples.

use std::time::Duration;

use crate::{Phase, SolveObserver, StepEvent};

/// An observer that records every step and never sleeps.
///
/// Useful wherever a solve should run at full speed while its step
/// sequence is inspected afterwards.
///
/// # Examples
///
/// ```
/// use stepdoku_core::Board;
/// use stepdoku_solver::{CancelToken, Phase, solve, testing::RecordingObserver};
///
/// let mut observer = RecordingObserver::new();
/// solve(&Board::empty(), &mut observer, &CancelToken::new())?;
/// assert!(observer.phase_count(Phase::Place) >= 81);
/// # Ok::<(), stepdoku_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Every observed event, in emission order.
    pub events: Vec<StepEvent>,
}

impl RecordingObserver {
    /// Creates an observer with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many recorded events carry `phase`.
    #[must_use]
    pub fn phase_count(&self, phase: Phase) -> usize {
        self.events
            .iter()
            .filter(|event| event.phase == phase)
            .count()
    }
}

impl SolveObserver for RecordingObserver {
    fn on_step(&mut self, event: &StepEvent) {
        self.events.push(*event);
    }

    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}
