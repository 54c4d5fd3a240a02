//! Implicit adjacency over a rectangular grid

/// Orthogonal offsets in yield order: north, east, south, west
const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// All eight offsets: the orthogonal ones first, then NE, SE, SW, NW
const MOORE: [(isize, isize); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// Dimensions of a grid viewed as a graph
///
/// Edges are never stored. [`GridGraph::neighbors`] derives them from the
/// index arithmetic, so a `GridGraph` is two words and freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridGraph {
    width: usize,
    height: usize,
}

impl GridGraph {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (graph nodes)
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Flat index of `(x, y)`, or `None` outside the grid
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// `(x, y)` of a flat index
    ///
    /// The index is not bounds-checked. Callers that care should check
    /// [`GridGraph::contains`] first.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        let width = self.width.max(1);
        (index % width, index / width)
    }

    /// Manhattan distance between two cells
    pub fn manhattan(&self, a: usize, b: usize) -> usize {
        let (ax, ay) = self.coords(a);
        let (bx, by) = self.coords(b);
        ax.abs_diff(bx) + ay.abs_diff(by)
    }

    /// In-bounds neighbors of `index`
    ///
    /// Yields up to 4 cells, or up to 8 with `diagonal`, always in the same
    /// order. Candidates past the left or right edge are dropped rather than
    /// wrapped onto the adjacent row. An index outside the grid has no
    /// neighbors.
    pub fn neighbors(&self, index: usize, diagonal: bool) -> Neighbors {
        let offsets: &'static [(isize, isize)] = match (self.contains(index), diagonal) {
            (false, _) => &[],
            (true, false) => &ORTHOGONAL,
            (true, true) => &MOORE,
        };
        let (x, y) = self.coords(index);

        Neighbors {
            graph: *self,
            x,
            y,
            offsets: offsets.iter(),
        }
    }
}

/// Iterator returned by [`GridGraph::neighbors`]
#[derive(Debug, Clone)]
pub struct Neighbors {
    graph: GridGraph,
    x: usize,
    y: usize,
    offsets: std::slice::Iter<'static, (isize, isize)>,
}

impl Iterator for Neighbors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for &(dx, dy) in self.offsets.by_ref() {
            let Some(nx) = self.x.checked_add_signed(dx) else {
                continue;
            };
            let Some(ny) = self.y.checked_add_signed(dy) else {
                continue;
            };
            if let Some(index) = self.graph.index_of(nx, ny) {
                return Some(index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len()))
    }
}
