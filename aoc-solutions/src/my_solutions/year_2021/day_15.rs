//! Chiton: lowest-risk path across a cave, then across the cave tiled 5x5

use crate::utils::digit_grid;
use aoc_grid::{Grid, GridError, shortest_distance};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const TILES: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["grid", "pathfinding"])]
pub struct Chiton;

impl AocParser for Chiton {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        digit_grid::parse(input)
    }
}

impl PartSolver<1> for Chiton {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(shared)
    }
}

impl PartSolver<2> for Chiton {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let full = tile(shared, TILES).map_err(SolveError::failed)?;
        lowest_risk(&full)
    }
}

fn lowest_risk(cave: &Grid<u8>) -> Result<String, SolveError> {
    shortest_distance(cave, cave.top_left(), cave.bottom_right())
        .map(|risk| risk.to_string())
        .map_err(SolveError::failed)
}

/// Repeat `cave` `times` x `times`, adding `tx + ty` to each tile's risk
/// and wrapping anything above 9 back around to 1
fn tile(cave: &Grid<u8>, times: usize) -> Result<Grid<u8>, GridError> {
    let (width, height) = (cave.width(), cave.height());
    let rows = (0..height * times).map(move |y| {
        (0..width * times).map(move |x| {
            let base = cave[(x % width, y % height)] as usize;
            let risk = base + x / width + y / height;
            ((risk + 8) % 9 + 1) as u8
        })
    });
    Grid::from_rows(rows)
}
