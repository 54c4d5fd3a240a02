//! Grid graph engine for puzzle-style grid problems
//!
//! A [`Grid`] is a flat, row-major array of cell values. The algorithms in
//! this crate treat it as an implicit graph whose edges run between
//! neighboring cells:
//!
//! - [`GridGraph`]: bounds-checked 4- or 8-neighbor enumeration
//! - [`shortest_distance`] / [`PathFinder`]: Dijkstra where entering a cell
//!   costs its value
//! - [`PropagationSimulator`]: threshold cascades where firing cells reset
//!   and energize their neighbors
//! - [`flood_fill`] / [`regions`]: breadth-first region discovery
//!
//! Parsing lives outside this crate. Callers hand over a `Grid` of integers
//! and get back a scalar, a count, or a [`GridError`].
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{Grid, run_until_all_fire, shortest_distance};
//!
//! let ones = Grid::filled(5, 5, 1u8);
//! assert_eq!(shortest_distance(&ones, 0, 24).unwrap(), 8);
//!
//! let charged = Grid::filled(10, 10, 9u8);
//! assert_eq!(run_until_all_fire(&charged).unwrap(), 1);
//! ```
//!
//! All traversals run on explicit work-lists (a heap, a queue, a stack), so
//! large grids cannot overflow the call stack.

mod error;
mod flood;
mod graph;
mod grid;
mod path;
mod propagation;

pub use error::GridError;
pub use flood::{flood_fill, local_minima, regions};
pub use graph::{GridGraph, Neighbors};
pub use grid::Grid;
pub use path::{DistanceTable, PathFinder, ShortestPath, shortest_distance};
pub use propagation::{
    PropagationConfig, PropagationSimulator, run_for_steps, run_for_steps_with,
    run_until_all_fire, run_until_all_fire_with, step, step_with,
};
