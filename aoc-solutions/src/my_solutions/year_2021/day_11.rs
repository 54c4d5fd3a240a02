//! Dumbo Octopus: energy cascades on a 10x10 grid

use crate::utils::digit_grid;
use aoc_grid::{Grid, run_for_steps, run_until_all_fire};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const STEPS: u64 = 100;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["grid", "simulation"])]
pub struct DumboOctopus;

impl AocParser for DumboOctopus {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        digit_grid::parse(input)
    }
}

impl PartSolver<1> for DumboOctopus {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run_for_steps(shared, STEPS).to_string())
    }
}

impl PartSolver<2> for DumboOctopus {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        run_until_all_fire(shared)
            .map(|step| step.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const SAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn test_sample() {
        let mut shared = DumboOctopus::parse(SAMPLE).unwrap();
        assert_eq!(DumboOctopus::solve_part(&mut shared, 1).unwrap(), "1656");
        assert_eq!(DumboOctopus::solve_part(&mut shared, 2).unwrap(), "195");
    }

    #[test]
    fn test_parts_independent_of_order() {
        let mut shared = DumboOctopus::parse(SAMPLE).unwrap();
        assert_eq!(DumboOctopus::solve_part(&mut shared, 2).unwrap(), "195");
        assert_eq!(DumboOctopus::solve_part(&mut shared, 1).unwrap(), "1656");
    }
}
