//! Running a solve session on a background thread.
//!
//! [`solve`](crate::solve) blocks its thread between steps, so interactive
//! hosts run it off the UI thread. [`SolveHandle`] spawns the session,
//! exposes its [`CancelToken`], and delivers the outcome over a channel
//! that can be polled without blocking.

use std::sync::mpsc;
use std::thread;

use stepdoku_core::Board;

use crate::{CancelToken, SolveError, SolveObserver, solve};

/// Errors polling a background solve session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The solver thread went away without delivering an outcome.
    #[display("solver thread disconnected")]
    Disconnected,
}

/// A handle to a solve session running on a background thread.
///
/// Each handle owns exactly one session and its cancellation token;
/// independent sessions share no state.
///
/// # Examples
///
/// ```
/// use stepdoku_core::Board;
/// use stepdoku_solver::{SolveHandle, testing::RecordingObserver};
///
/// let handle = SolveHandle::spawn(Board::empty(), RecordingObserver::new());
/// let solved = handle.join().unwrap()?;
/// assert!(solved.is_valid());
/// # Ok::<(), stepdoku_solver::SolveError>(())
/// ```
#[derive(Debug)]
pub struct SolveHandle {
    token: CancelToken,
    receiver: mpsc::Receiver<Result<Board, SolveError>>,
}

impl SolveHandle {
    /// Starts solving `puzzle` on a new thread.
    ///
    /// The observer moves onto the solver thread; use a channel or shared
    /// state inside it to surface steps elsewhere.
    #[must_use]
    pub fn spawn(puzzle: Board, observer: impl SolveObserver + Send + 'static) -> Self {
        let token = CancelToken::new();
        let session_token = token.clone();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut observer = observer;
            let _ = sender.send(solve(&puzzle, &mut observer, &session_token));
        });
        Self { token, receiver }
    }

    /// Returns a clone of the session's cancellation token.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Requests cancellation of the session.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Checks for a completed outcome without blocking.
    ///
    /// Returns `Ok(None)` while the session is still running.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Disconnected`] if the solver thread
    /// panicked before delivering an outcome.
    pub fn poll(&self) -> Result<Option<Result<Board, SolveError>>, SessionError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SessionError::Disconnected),
        }
    }

    /// Blocks until the session delivers its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Disconnected`] if the solver thread
    /// panicked before delivering an outcome.
    pub fn join(self) -> Result<Result<Board, SolveError>, SessionError> {
        self.receiver.recv().map_err(|_| SessionError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::RecordingObserver;

    #[test]
    fn test_background_solve_completes() {
        let handle = SolveHandle::spawn(Board::empty(), RecordingObserver::new());
        let solved = handle.join().unwrap().unwrap();
        assert!(solved.is_valid());
    }

    #[test]
    fn test_cancel_during_background_solve() {
        // A throttled session so the cancel lands mid-run.
        struct Slow;
        impl SolveObserver for Slow {
            fn delay(&self) -> Duration {
                Duration::from_millis(50)
            }
        }

        let handle = SolveHandle::spawn(Board::empty(), Slow);
        assert_eq!(handle.poll(), Ok(None));
        handle.cancel();
        assert_eq!(handle.join(), Ok(Err(SolveError::Cancelled)));
    }

    #[test]
    fn test_independent_sessions_do_not_share_cancellation() {
        struct Slow;
        impl SolveObserver for Slow {
            fn delay(&self) -> Duration {
                Duration::from_millis(20)
            }
        }

        let cancelled = SolveHandle::spawn(Board::empty(), Slow);
        let running = SolveHandle::spawn(Board::empty(), RecordingObserver::new());
        cancelled.cancel();

        assert_eq!(cancelled.join(), Ok(Err(SolveError::Cancelled)));
        let solved = running.join().unwrap().unwrap();
        assert!(solved.is_valid());
    }
}
