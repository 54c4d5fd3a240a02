//! Text to `Grid<u8>` for the single-digit puzzles

use anyhow::{anyhow, bail};
use aoc_grid::Grid;
use aoc_solver::ParseError;

/// Parse lines of decimal digits into a grid
///
/// Surrounding whitespace is trimmed from the whole input and from each
/// line, so trailing newlines and CRLF endings are accepted.
///
/// # Returns
/// * `Ok(Grid<u8>)` - One cell per digit, row-major
/// * `Err(ParseError::MissingData)` - The input is blank
/// * `Err(ParseError::InvalidFormat)` - A non-digit character or a ragged row
pub fn parse(input: &str) -> Result<Grid<u8>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::MissingData("empty grid".into()));
    }

    let rows = input
        .lines()
        .enumerate()
        .map(|(row, line)| parse_row(line.trim()).map_err(|e| anyhow!("(line {}) {}", row + 1, e)))
        .collect::<Result<Vec<_>, anyhow::Error>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    Grid::from_rows(rows).map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

fn parse_row(line: &str) -> anyhow::Result<Vec<u8>> {
    line.chars()
        .enumerate()
        .map(|(col, c)| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => bail!("column {}: expected a digit, found {:?}", col + 1, c),
        })
        .collect()
}
