//! Advent of Code grid puzzle solutions with automatic registration
//!
//! Each solution parses its input into an [`aoc_grid::Grid`] and hands the
//! work to the grid engine. Solutions use the `AutoRegisterSolver` derive so
//! the CLI discovers them through `inventory`.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
