//! Complete-board generation and puzzle carving.

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use stepdoku_core::{Board, DigitSet, Pos};

use crate::PuzzleSeed;

/// A carved puzzle together with its solution and the seed that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable puzzle, with blanks.
    pub problem: Board,
    /// The complete board the puzzle was carved from.
    pub solution: Board,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles by carving blanks out of random complete boards.
///
/// # Examples
///
/// ```
/// use stepdoku_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(40);
/// let seed = PuzzleSeed::from_text("doc example");
///
/// let first = generator.generate_with_seed(seed);
/// let second = generator.generate_with_seed(seed);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    delete_count: u8,
}

impl PuzzleGenerator {
    /// Creates a generator that blanks out `delete_count` cells per puzzle.
    ///
    /// # Panics
    ///
    /// Panics if `delete_count` is greater than 81.
    #[must_use]
    pub fn new(delete_count: u8) -> Self {
        assert!(
            delete_count <= 81,
            "delete_count must be at most 81, got {delete_count}"
        );
        Self { delete_count }
    }

    /// Returns the number of cells blanked out per puzzle.
    #[must_use]
    pub const fn delete_count(&self) -> u8 {
        self.delete_count
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and delete count always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let solution = complete_board(&mut rng);
        let problem = carve(&solution, self.delete_count, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Produces a fully solved random board by randomized backtracking fill.
///
/// Cells are visited in row-major order. Each cell caches its candidate set
/// on first visit along the current forward path and draws placements from
/// it uniformly at random; when a cell's candidates run out, its cache and
/// value are cleared and filling resumes at the previous cell with that
/// cell's already-depleted cache. The repeated pick-and-remove is what
/// shuffles each cell's candidate order, so every invocation walks a
/// different path through the solution space.
///
/// # Panics
///
/// Panics if backtracking steps past the first cell. That cannot happen on
/// a 9×9 grid; it would indicate a logic bug, not bad input.
///
/// # Examples
///
/// ```
/// use stepdoku_generator::complete_board;
///
/// let board = complete_board(&mut rand::rng());
/// assert!(board.is_valid());
/// ```
pub fn complete_board(rng: &mut impl Rng) -> Board {
    let mut board = Board::empty();
    let mut cache: [[Option<DigitSet>; 9]; 9] = [[None; 9]; 9];
    let mut pos = Pos::new(0, 0);

    loop {
        let candidates = cache_at(&mut cache, pos);
        if candidates.is_none() {
            *candidates = Some(board.candidates(pos));
        }
        match candidates.as_mut().and_then(|set| pick_and_remove(set, rng)) {
            Some(digit) => {
                board.set(pos, digit);
                match pos.next_row_major() {
                    Some(next) => pos = next,
                    None => break,
                }
            }
            None => {
                *candidates = None;
                let Some(prev) = pos.prev_row_major() else {
                    unreachable!("backtracked past the first cell of a 9x9 fill");
                };
                pos = prev;
                board.clear(pos);
            }
        }
    }
    board
}

/// Carves a playable puzzle out of a complete board.
///
/// Repeatedly picks a uniformly random coordinate and zeroes it if it still
/// holds a digit, until exactly `delete_count` cells have been blanked. The
/// result may admit more than one solution; no uniqueness check is made.
///
/// # Panics
///
/// Panics if `delete_count` is greater than 81.
#[must_use]
pub fn carve(answer: &Board, delete_count: u8, rng: &mut impl Rng) -> Board {
    assert!(
        delete_count <= 81,
        "delete_count must be at most 81, got {delete_count}"
    );
    let mut board = *answer;
    let mut deleted = 0;
    while deleted < delete_count {
        let pos = Pos::new(rng.random_range(0..9), rng.random_range(0..9));
        if !board.is_blank(pos) {
            board.clear(pos);
            deleted += 1;
        }
    }
    board
}

fn cache_at(cache: &mut [[Option<DigitSet>; 9]; 9], pos: Pos) -> &mut Option<DigitSet> {
    &mut cache[usize::from(pos.row())][usize::from(pos.col())]
}

fn pick_and_remove(set: &mut DigitSet, rng: &mut impl Rng) -> Option<u8> {
    if set.is_empty() {
        return None;
    }
    let index = rng.random_range(0..set.len());
    let digit = set.iter().nth(index)?;
    set.remove(digit);
    Some(digit)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;

    use super::*;

    fn seeded_rng(seed: u64) -> Pcg64 {
        Pcg64::seed_from_u64(seed)
    }

    #[test]
    fn test_complete_boards_are_valid() {
        for seed in 0..20 {
            let board = complete_board(&mut seeded_rng(seed));
            assert!(board.is_complete(), "seed {seed}");
            assert!(board.is_valid(), "seed {seed}");
        }
    }

    #[test]
    fn test_complete_boards_vary() {
        let a = complete_board(&mut seeded_rng(1));
        let b = complete_board(&mut seeded_rng(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_carve_zeroes_exactly_the_requested_cells() {
        let answer = complete_board(&mut seeded_rng(3));
        let puzzle = carve(&answer, 40, &mut seeded_rng(4));
        assert_eq!(puzzle.blanks().len(), 40);
        for pos in Pos::all() {
            if !puzzle.is_blank(pos) {
                assert_eq!(puzzle.get(pos), answer.get(pos));
            }
        }
    }

    #[test]
    fn test_carve_zero_leaves_answer_untouched() {
        let answer = complete_board(&mut seeded_rng(5));
        assert_eq!(carve(&answer, 0, &mut seeded_rng(6)), answer);
    }

    #[test]
    fn test_carve_everything() {
        let answer = complete_board(&mut seeded_rng(7));
        assert_eq!(carve(&answer, 81, &mut seeded_rng(8)), Board::empty());
    }

    #[test]
    #[should_panic(expected = "delete_count must be at most 81, got 82")]
    fn test_carve_rejects_oversized_count() {
        let answer = complete_board(&mut seeded_rng(9));
        let _ = carve(&answer, 82, &mut seeded_rng(10));
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = PuzzleGenerator::new(30);
        let seed = PuzzleSeed::from_text("reproducible");
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_generated_puzzles_differ_across_seeds() {
        let generator = PuzzleGenerator::new(30);
        let a = generator.generate_with_seed(PuzzleSeed::from_text("a"));
        let b = generator.generate_with_seed(PuzzleSeed::from_text("b"));
        assert_ne!(a.solution, b.solution);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_generated_pairs_hold_the_carving_contract(
            delete_count in 0u8..=81,
            seed_text in "[a-z]{1,12}",
        ) {
            let generator = PuzzleGenerator::new(delete_count);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_text(&seed_text));

            prop_assert!(puzzle.solution.is_valid());
            prop_assert_eq!(puzzle.problem.blanks().len(), usize::from(delete_count));
            for pos in Pos::all() {
                if !puzzle.problem.is_blank(pos) {
                    prop_assert_eq!(puzzle.problem.get(pos), puzzle.solution.get(pos));
                }
            }
        }
    }
}
