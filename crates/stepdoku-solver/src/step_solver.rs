//! The MRV backtracking solve loop.
//!
//! One [`solve`] invocation owns its whole working set (board copy,
//! candidate cache, dirty flags, placement history); nothing is shared
//! between sessions, and the caller's puzzle board is never mutated.

use std::thread;
use std::time::Duration;

use rand::{RngExt as _, rngs::ThreadRng};
use stepdoku_core::{Board, DigitSet, Pos};
use tinyvec::ArrayVec;

use crate::{CancelToken, MAX_DELAY, Phase, SolveError, SolveObserver, StepEvent};

/// Poll interval while paused, also the slice size for cancellable sleeps.
const PAUSE_POLL: Duration = Duration::from_millis(16);

/// Solves `puzzle` by MRV backtracking, reporting each step to `observer`.
///
/// The solver works on a private copy of `puzzle`. Each loop iteration
/// recomputes candidates for blank cells whose neighborhood changed
/// (emitting a [`Phase::Scan`] step per recomputation), selects the blank
/// cell with the fewest candidates (first found wins ties), and either
/// places one of its candidates picked uniformly at random
/// ([`Phase::Place`]) or, if none remain, retracts tentative placements in
/// reverse order until one still has untried candidates
/// ([`Phase::Retract`]). Candidate selection is randomized, so a puzzle
/// with several solutions may solve differently on each run.
///
/// After each step the solver waits for the observer's current delay
/// (clamped to [`MAX_DELAY`]) and holds while the observer reports itself
/// paused, polling every ~16 ms so cancellation stays responsive. A final
/// [`Phase::Place`] event with the completed board is emitted after the
/// loop, so an observer always sees the finished grid even if it missed
/// the last in-loop step.
///
/// # Errors
///
/// - [`SolveError::Unsolvable`] if backtracking exhausts the placement
///   history: the puzzle admits no solution.
/// - [`SolveError::Cancelled`] once `cancel` is observed set at a
///   suspension point; partial progress is discarded.
///
/// # Examples
///
/// ```
/// use stepdoku_core::Board;
/// use stepdoku_solver::{CancelToken, solve, testing::RecordingObserver};
///
/// let mut observer = RecordingObserver::new();
/// let solved = solve(&Board::empty(), &mut observer, &CancelToken::new())?;
/// assert!(solved.is_valid());
/// # Ok::<(), stepdoku_solver::SolveError>(())
/// ```
pub fn solve<O: SolveObserver>(
    puzzle: &Board,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<Board, SolveError> {
    Session::new(*puzzle).run(observer, cancel)
}

/// The working set of one solve invocation.
struct Session {
    board: Board,
    blanks: Vec<Pos>,
    cache: [[Option<DigitSet>; 9]; 9],
    dirty: [[bool; 9]; 9],
    history: ArrayVec<[Pos; 81]>,
    rng: ThreadRng,
}

impl Session {
    fn new(board: Board) -> Self {
        let blanks = board.blanks();
        let mut dirty = [[false; 9]; 9];
        for &pos in &blanks {
            dirty[usize::from(pos.row())][usize::from(pos.col())] = true;
        }
        Self {
            board,
            blanks,
            cache: [[None; 9]; 9],
            dirty,
            history: ArrayVec::new(),
            rng: rand::rng(),
        }
    }

    fn run<O: SolveObserver>(
        mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<Board, SolveError> {
        log::debug!("solving a board with {} blank cells", self.blanks.len());
        loop {
            ensure_live(cancel)?;

            let Some((pos, candidate_count)) = self.scan(observer, cancel)? else {
                break; // no unfilled blank remains
            };
            let pos = if candidate_count == 0 {
                self.backtrack(observer, cancel)?
            } else {
                pos
            };

            let Some(digit) = self.take_candidate(pos) else {
                unreachable!("cell {pos} was selected with remaining candidates");
            };
            self.board.set(pos, digit);
            self.emit(observer, cancel, pos, Phase::Place)?;
            self.mark_dirty_around(pos);
            self.history.push(pos);

            if self.history.len() == self.blanks.len() {
                break;
            }
        }

        // Final snapshot, so an observer that raced the last in-loop
        // emission still sees the completed board.
        let last = self.history.last().copied().unwrap_or_default();
        observer.on_step(&StepEvent {
            pos: last,
            phase: Phase::Place,
            board: self.board,
        });
        log::debug!("solve complete with {} placements standing", self.history.len());
        Ok(self.board)
    }

    /// Recomputes candidates for dirty or never-computed blanks (one
    /// [`Phase::Scan`] step each) and returns the unfilled blank with the
    /// fewest candidates, or `None` when every blank is filled.
    fn scan<O: SolveObserver>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<Option<(Pos, usize)>, SolveError> {
        let mut best: Option<(Pos, usize)> = None;
        for i in 0..self.blanks.len() {
            let pos = self.blanks[i];
            if !self.board.is_blank(pos) {
                continue;
            }
            if self.is_dirty(pos) || self.cached(pos).is_none() {
                self.emit(observer, cancel, pos, Phase::Scan)?;
                let candidates = self.board.candidates(pos);
                self.cache[usize::from(pos.row())][usize::from(pos.col())] = Some(candidates);
                self.set_dirty(pos, false);
            }
            let len = self.cached(pos).map_or(0, DigitSet::len);
            if best.is_none_or(|(_, best_len)| len < best_len) {
                best = Some((pos, len));
            }
        }
        Ok(best)
    }

    /// Retracts tentative placements in reverse order until one still has
    /// untried candidates, and returns its coordinate for re-placement.
    fn backtrack<O: SolveObserver>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<Pos, SolveError> {
        log::trace!("backtracking from depth {}", self.history.len());
        loop {
            let Some(pos) = self.history.pop() else {
                return Err(SolveError::Unsolvable);
            };
            if self.cached(pos).is_some_and(|set| !set.is_empty()) {
                return Ok(pos);
            }
            self.board.clear(pos);
            self.emit(observer, cancel, pos, Phase::Retract)?;
            self.mark_dirty_around(pos);
        }
    }

    /// Removes and returns one uniformly random digit from the cached
    /// candidate set at `pos`.
    fn take_candidate(&mut self, pos: Pos) -> Option<u8> {
        let set = self.cache[usize::from(pos.row())][usize::from(pos.col())].as_mut()?;
        if set.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..set.len());
        let digit = set.iter().nth(index)?;
        set.remove(digit);
        Some(digit)
    }

    /// Marks `pos` (if blank) and its blank row/column/box neighbors for
    /// candidate recomputation.
    fn mark_dirty_around(&mut self, pos: Pos) {
        if self.board.is_blank(pos) {
            self.set_dirty(pos, true);
        }
        for peer in pos.peers() {
            if self.board.is_blank(peer) {
                self.set_dirty(peer, true);
            }
        }
    }

    fn emit<O: SolveObserver>(
        &self,
        observer: &mut O,
        cancel: &CancelToken,
        pos: Pos,
        phase: Phase,
    ) -> Result<(), SolveError> {
        observer.on_step(&StepEvent {
            pos,
            phase,
            board: self.board,
        });
        pace(observer, cancel)
    }

    fn cached(&self, pos: Pos) -> Option<DigitSet> {
        self.cache[usize::from(pos.row())][usize::from(pos.col())]
    }

    fn is_dirty(&self, pos: Pos) -> bool {
        self.dirty[usize::from(pos.row())][usize::from(pos.col())]
    }

    fn set_dirty(&mut self, pos: Pos, dirty: bool) {
        self.dirty[usize::from(pos.row())][usize::from(pos.col())] = dirty;
    }
}

/// Holds while the observer reports itself paused, then waits the
/// observer's current delay. Cancellation is checked before and after
/// every sleep.
fn pace<O: SolveObserver>(observer: &O, cancel: &CancelToken) -> Result<(), SolveError> {
    while observer.is_paused() {
        sleep_cancellable(PAUSE_POLL, cancel)?;
    }
    sleep_cancellable(observer.delay().min(MAX_DELAY), cancel)
}

/// Sleeps for `total`, sliced so a cancel arriving mid-sleep is observed
/// within one poll interval.
fn sleep_cancellable(total: Duration, cancel: &CancelToken) -> Result<(), SolveError> {
    ensure_live(cancel)?;
    let mut remaining = total;
    while !remaining.is_zero() {
        let chunk = remaining.min(PAUSE_POLL);
        thread::sleep(chunk);
        remaining -= chunk;
        ensure_live(cancel)?;
    }
    Ok(())
}

fn ensure_live(cancel: &CancelToken) -> Result<(), SolveError> {
    if cancel.is_cancelled() {
        Err(SolveError::Cancelled)
    } else {
        Ok(())
    }
}
