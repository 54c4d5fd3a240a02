//! Dijkstra shortest paths where entering a cell costs its value
//!
//! The cost of a path is the sum of the values of every cell it enters. The
//! source cell's own value is never paid. Zero-valued cells are ordinary
//! zero-cost edges.
//!
//! # Example
//!
//! ```
//! use aoc_grid::{Grid, shortest_distance};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![1u8, 1, 6],
//!     vec![1, 3, 8],
//!     vec![2, 1, 3],
//! ])
//! .unwrap();
//!
//! let risk = shortest_distance(&grid, grid.top_left(), grid.bottom_right()).unwrap();
//! assert_eq!(risk, 1 + 2 + 1 + 3);
//! ```

use crate::error::GridError;
use crate::grid::Grid;
use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Minimum entry cost from `source` to `target` over 4-neighbor moves
pub fn shortest_distance<T>(grid: &Grid<T>, source: usize, target: usize) -> Result<u64, GridError>
where
    T: Copy + Into<u64>,
{
    PathFinder::new(grid).distance(source, target)
}

fn always_passable<T>(_: &T) -> bool {
    true
}

/// Configurable Dijkstra search over a borrowed grid
///
/// ```
/// use aoc_grid::{Grid, PathFinder};
///
/// // 0 marks a wall here, so walls must be excluded explicitly
/// let grid = Grid::from_rows(vec![
///     vec![1u8, 0, 1],
///     vec![1, 0, 1],
///     vec![1, 1, 1],
/// ])
/// .unwrap();
///
/// let path = PathFinder::new(&grid)
///     .passable(|v: &u8| *v != 0)
///     .path(0, 2)
///     .unwrap();
/// assert_eq!(path.distance, 6);
/// assert_eq!(path.cells, vec![0, 3, 6, 7, 8, 5, 2]);
/// ```
pub struct PathFinder<'g, T, P> {
    grid: &'g Grid<T>,
    diagonal: bool,
    passable: P,
}

impl<'g, T> PathFinder<'g, T, fn(&T) -> bool> {
    /// Orthogonal moves, every cell passable
    pub fn new(grid: &'g Grid<T>) -> Self {
        Self {
            grid,
            diagonal: false,
            passable: always_passable::<T>,
        }
    }
}

impl<'g, T, P> PathFinder<'g, T, P>
where
    T: Copy + Into<u64>,
    P: Fn(&T) -> bool,
{
    /// Allow diagonal moves as well
    pub fn diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// Only enter cells for which `passable` holds
    ///
    /// The source is always allowed, whatever its value.
    pub fn passable<Q>(self, passable: Q) -> PathFinder<'g, T, Q>
    where
        Q: Fn(&T) -> bool,
    {
        PathFinder {
            grid: self.grid,
            diagonal: self.diagonal,
            passable,
        }
    }

    /// Minimum cost from `source` to `target`
    pub fn distance(&self, source: usize, target: usize) -> Result<u64, GridError> {
        self.check_bounds(target)?;
        let table = self.search(source, Some(target))?;
        table.get(target).ok_or(GridError::UnreachableTarget {
            start: source,
            target,
        })
    }

    /// Minimum cost from `source` to `target` along with the cells visited
    pub fn path(&self, source: usize, target: usize) -> Result<ShortestPath, GridError> {
        self.check_bounds(target)?;
        let table = self.search(source, Some(target))?;
        match (table.get(target), table.path_to(target)) {
            (Some(distance), Some(cells)) => Ok(ShortestPath { distance, cells }),
            _ => Err(GridError::UnreachableTarget {
                start: source,
                target,
            }),
        }
    }

    /// Settle every reachable cell and return the whole distance table
    pub fn distances_from(&self, source: usize) -> Result<DistanceTable, GridError> {
        self.search(source, None)
    }

    fn check_bounds(&self, index: usize) -> Result<(), GridError> {
        if index < self.grid.len() {
            Ok(())
        } else {
            Err(GridError::CellOutOfBounds {
                index,
                len: self.grid.len(),
            })
        }
    }

    /// Core Dijkstra loop
    ///
    /// Frontier entries are `(distance, index)` in a min-heap, so equal
    /// distances pop in ascending index order. Stale entries are skipped via
    /// the settled bitset instead of a decrease-key operation.
    fn search(&self, source: usize, stop_at: Option<usize>) -> Result<DistanceTable, GridError> {
        self.check_bounds(source)?;

        let graph = self.grid.graph();
        let len = self.grid.len();
        let mut distances: Vec<Option<u64>> = vec![None; len];
        let mut previous: Vec<Option<usize>> = vec![None; len];
        let mut settled = vec![false; len];
        let mut frontier = BinaryHeap::new();
        let mut settled_count = 0usize;

        distances[source] = Some(0);
        frontier.push(Reverse((0u64, source)));

        while let Some(Reverse((distance, cell))) = frontier.pop() {
            if settled[cell] {
                continue;
            }
            settled[cell] = true;
            settled_count += 1;

            if stop_at == Some(cell) {
                break;
            }

            for next in graph.neighbors(cell, self.diagonal) {
                let value = self.grid[next];
                if settled[next] || !(self.passable)(&value) {
                    continue;
                }
                let candidate = distance.saturating_add(value.into());
                if distances[next].is_none_or(|best| candidate < best) {
                    distances[next] = Some(candidate);
                    previous[next] = Some(cell);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        trace!(
            "dijkstra from {} settled {}/{} cells (stop_at={:?})",
            source, settled_count, len, stop_at
        );

        Ok(DistanceTable {
            source,
            distances,
            previous,
        })
    }
}

/// Result of [`PathFinder::path`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Total entry cost, excluding the source cell
    pub distance: u64,
    /// Cells from source to target, both included
    pub cells: Vec<usize>,
}

/// Best known distance to each cell from a single source
///
/// `None` means the cell was not reached. After [`PathFinder::distances_from`]
/// every reachable cell holds its final distance. After an early-stopping
/// search only settled cells and the target are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    source: usize,
    distances: Vec<Option<u64>>,
    previous: Vec<Option<usize>>,
}

impl DistanceTable {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.distances.get(index).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// Number of cells with a known distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Walk predecessors back from `target`
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.get(target)?;

        let mut cells = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.previous[current]?;
            cells.push(current);
        }
        cells.reverse();
        Some(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid<u8> {
        Grid::from_rows(rows.iter().map(|r| r.to_vec())).unwrap()
    }

    #[test]
    fn test_source_equals_target_costs_nothing() {
        let g = grid(&[&[9, 9], &[9, 9]]);
        assert_eq!(shortest_distance(&g, 3, 3), Ok(0));
    }

    #[test]
    fn test_zero_weight_cells_are_free_not_skipped() {
        let g = grid(&[&[5, 0, 0], &[9, 9, 0], &[9, 9, 0]]);
        assert_eq!(shortest_distance(&g, 0, 8), Ok(0));
    }

    #[test]
    fn test_prefers_detour_over_expensive_cell() {
        let g = grid(&[&[1, 9, 1], &[1, 9, 1], &[1, 1, 1]]);
        // down, down, right, right, up, up
        assert_eq!(shortest_distance(&g, 0, 2), Ok(6));
    }

    #[test]
    fn test_reverse_direction_pays_other_endpoint() {
        let g = grid(&[&[1, 1, 2, 1, 7]]);
        assert_eq!(shortest_distance(&g, 0, 4), Ok(11));
        assert_eq!(shortest_distance(&g, 4, 0), Ok(5));
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let g = grid(&[&[1, 1], &[1, 1]]);
        assert_eq!(
            shortest_distance(&g, 4, 0),
            Err(GridError::CellOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            shortest_distance(&g, 0, 7),
            Err(GridError::CellOutOfBounds { index: 7, len: 4 })
        );
    }

    #[test]
    fn test_walled_off_target_is_unreachable() {
        let g = grid(&[&[1, 0, 1], &[1, 0, 1], &[1, 0, 1]]);
        let result = PathFinder::new(&g).passable(|v: &u8| *v != 0).distance(0, 2);
        assert_eq!(
            result,
            Err(GridError::UnreachableTarget {
                start: 0,
                target: 2
            })
        );
    }

    #[test]
    fn test_diagonal_moves_shorten_path() {
        let g = grid(&[&[1, 5, 5], &[5, 1, 5], &[5, 5, 1]]);
        assert_eq!(PathFinder::new(&g).distance(0, 8), Ok(12));
        assert_eq!(PathFinder::new(&g).diagonal(true).distance(0, 8), Ok(2));
    }

    #[test]
    fn test_full_distance_table() {
        let g = grid(&[&[1, 2], &[3, 4]]);
        let table = PathFinder::new(&g).distances_from(0).unwrap();
        assert_eq!(table.distances(), &[Some(0), Some(2), Some(3), Some(6)]);
        assert_eq!(table.reachable_count(), 4);
        assert_eq!(table.path_to(3), Some(vec![0, 1, 3]));
        assert_eq!(table.path_to(0), Some(vec![0]));
    }

    #[test]
    fn test_path_cells_sum_to_distance() {
        let g = grid(&[
            &[1, 1, 6, 3, 7],
            &[1, 3, 8, 1, 3],
            &[2, 1, 3, 6, 5],
            &[3, 6, 9, 4, 9],
            &[7, 4, 6, 3, 4],
        ]);
        let path = PathFinder::new(&g).path(0, 24).unwrap();
        let paid: u64 = path.cells[1..].iter().map(|&i| u64::from(g[i])).sum();
        assert_eq!(paid, path.distance);
        assert_eq!(path.cells.first(), Some(&0));
        assert_eq!(path.cells.last(), Some(&24));
    }

    #[test]
    fn test_wide_weights() {
        let g = Grid::new(2, 1, vec![u32::MAX, u32::MAX]).unwrap();
        assert_eq!(shortest_distance(&g, 0, 1), Ok(u64::from(u32::MAX)));
    }
}
