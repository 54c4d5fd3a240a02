//! Property-based tests for part range checking
//!
//! **Feature: solver-part-bounds**

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => TestSolver::<1>::solve_part_checked_range(&mut (), part),
        2 => TestSolver::<2>::solve_part_checked_range(&mut (), part),
        3 => TestSolver::<3>::solve_part_checked_range(&mut (), part),
        _ => TestSolver::<25>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: solver-part-bounds, Property 1: Out-of-range rejection**
    /// *For any* solver with PARTS = N, part 0 and every part above N are
    /// rejected with `PartOutOfRange(part)` before the solver runs.
    #[test]
    fn prop_out_of_range_rejection(max_parts in prop::sample::select(vec![1u8, 2, 3, 25]), part in 0u8..=255) {
        prop_assume!(part == 0 || part > max_parts);
        match checked(max_parts, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
        }
    }

    /// **Feature: solver-part-bounds, Property 2: In-range passthrough**
    /// *For any* part in `1..=N`, the call reaches `solve_part` unchanged.
    #[test]
    fn prop_in_range_passthrough(max_parts in prop::sample::select(vec![1u8, 2, 3, 25]), seed in any::<u8>()) {
        let part = seed % max_parts + 1;
        prop_assert_eq!(checked(max_parts, part).unwrap(), format!("part{}", part));
    }
}
