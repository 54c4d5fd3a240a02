//! Error types for grid construction and grid algorithms

use thiserror::Error;

/// Error type for everything in this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row had a different length than the first row
    #[error("Malformed grid: row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat cell count does not equal `width * height`
    #[error("Grid of {width}x{height} cannot hold {len} cells")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A cell index outside the grid was passed in
    #[error("Cell {index} is outside a grid of {len} cells")]
    CellOutOfBounds { index: usize, len: usize },
    /// The frontier ran dry before the target was reached
    #[error("Cell {target} is unreachable from cell {start}")]
    UnreachableTarget { start: usize, target: usize },
    /// Propagation never synchronized within the step cap
    #[error("Propagation did not synchronize within {steps} steps")]
    NonTerminating { steps: u64 },
}
