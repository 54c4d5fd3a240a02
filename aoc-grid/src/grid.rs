//! Flat rectangular cell storage

use crate::error::GridError;
use crate::graph::GridGraph;
use std::ops::{Index, IndexMut};

/// A rectangular grid stored row-major in a single `Vec`
///
/// Cell `i` lives at `(i % width, i / width)`. The constructors guarantee
/// `width * height == cells.len()`, so every index below `len()` is valid
/// and every coordinate pair inside the dimensions maps to exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from dimensions and a flat cell vector
    ///
    /// # Returns
    /// * `Ok(Grid)` - The cell count matches the dimensions
    /// * `Err(GridError::DimensionMismatch)` - It does not
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from rows, rejecting ragged input
    ///
    /// The first row fixes the width. Zero rows give an empty 0x0 grid.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let found = cells.len() - before;

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::MalformedGrid {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Self::new(width.unwrap_or(0), height, cells)
    }

    /// Build a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Adjacency view over this grid's dimensions
    pub fn graph(&self) -> GridGraph {
        GridGraph::new(self.width, self.height)
    }

    /// Index of the top-left cell, the conventional search source
    pub fn top_left(&self) -> usize {
        0
    }

    /// Index of the bottom-right cell, the conventional search target
    pub fn bottom_right(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.cells.get(index)
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn at(&self, x: usize, y: usize) -> Option<&T> {
        self.graph().index_of(x, y).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Apply `f` to every cell, keeping the dimensions
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}
