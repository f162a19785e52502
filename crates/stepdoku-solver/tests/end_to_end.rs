//! End-to-end tests for the generate → carve → solve pipeline.

use proptest::prelude::*;
use stepdoku_core::Pos;
use stepdoku_generator::{PuzzleGenerator, PuzzleSeed};
use stepdoku_solver::{CancelToken, Phase, SolveError, solve, testing::RecordingObserver};

#[test]
fn generated_puzzles_solve_to_valid_boards() {
    let generator = PuzzleGenerator::new(50);
    for round in 0..5 {
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_text(&format!("e2e {round}")));
        let mut observer = RecordingObserver::new();
        let solved = solve(&puzzle.problem, &mut observer, &CancelToken::new()).unwrap();

        assert!(solved.is_valid(), "round {round}");
        for pos in Pos::all() {
            if !puzzle.problem.is_blank(pos) {
                assert_eq!(solved.get(pos), puzzle.problem.get(pos), "clue moved at {pos}");
            }
        }
    }
}

#[test]
fn zero_blank_generation_round_trips_through_the_solver() {
    let puzzle = PuzzleGenerator::new(0).generate_with_seed(PuzzleSeed::from_text("untouched"));
    assert_eq!(puzzle.problem, puzzle.solution);

    let mut observer = RecordingObserver::new();
    let solved = solve(&puzzle.problem, &mut observer, &CancelToken::new()).unwrap();
    assert_eq!(solved, puzzle.solution);
    // Nothing to place: only the final completed-board event is emitted.
    assert_eq!(observer.events.len(), 1);
    assert_eq!(observer.events[0].phase, Phase::Place);
}

#[test]
fn cancellation_wins_over_a_trivially_complete_puzzle() {
    let puzzle = PuzzleGenerator::new(0).generate_with_seed(PuzzleSeed::from_text("cancelled"));
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut observer = RecordingObserver::new();
    let result = solve(&puzzle.problem, &mut observer, &cancel);
    assert_eq!(result, Err(SolveError::Cancelled));
    assert!(observer.events.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_any_generated_puzzle_solves_correctly(
        delete_count in 0u8..=81,
        seed_text in "[a-z]{1,8}",
    ) {
        let puzzle = PuzzleGenerator::new(delete_count)
            .generate_with_seed(PuzzleSeed::from_text(&seed_text));

        let mut observer = RecordingObserver::new();
        let solved = solve(&puzzle.problem, &mut observer, &CancelToken::new()).unwrap();

        prop_assert!(solved.is_valid());
        for pos in Pos::all() {
            if !puzzle.problem.is_blank(pos) {
                prop_assert_eq!(solved.get(pos), puzzle.problem.get(pos));
            }
        }
    }
}
