//! Smoke Basin: low points and basin sizes on a height map

use crate::utils::digit_grid;
use aoc_grid::{Grid, local_minima, regions};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["grid", "flood-fill"])]
pub struct SmokeBasin;

impl AocParser for SmokeBasin {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        digit_grid::parse(input)
    }
}

impl PartSolver<1> for SmokeBasin {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u64 = local_minima(shared)
            .into_iter()
            .map(|i| shared[i] as u64 + 1)
            .sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for SmokeBasin {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Height 9 walls off basins
        let mut sizes: Vec<usize> = regions(shared, false, |&h| h < 9)
            .iter()
            .map(Vec::len)
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        log::debug!("{} basins, largest {:?}", sizes.len(), &sizes[..sizes.len().min(3)]);

        if sizes.len() < 3 {
            return Err(SolveError::SolveFailed(
                format!("need three basins, found {}", sizes.len()).into(),
            ));
        }
        Ok(sizes.iter().take(3).product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const SAMPLE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";

    #[test]
    fn test_sample() {
        let mut shared = SmokeBasin::parse(SAMPLE).unwrap();
        assert_eq!(SmokeBasin::solve_part(&mut shared, 1).unwrap(), "15");
        assert_eq!(SmokeBasin::solve_part(&mut shared, 2).unwrap(), "1134");
    }

    #[test]
    fn test_too_few_basins() {
        let mut shared = SmokeBasin::parse("191\n999").unwrap();
        assert!(matches!(
            SmokeBasin::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
