//! Breadth-first region discovery

use crate::grid::Grid;
use std::collections::VecDeque;

/// Cells reachable from `start` through cells where `passable` holds
///
/// Cells come back in BFS discovery order, `start` first. An impassable or
/// out-of-range `start` yields nothing.
pub fn flood_fill<T, P>(grid: &Grid<T>, start: usize, diagonal: bool, passable: P) -> Vec<usize>
where
    P: Fn(&T) -> bool,
{
    let mut visited = vec![false; grid.len()];
    fill_from(grid, start, diagonal, &passable, &mut visited)
}

/// Partition every passable cell into connected regions
///
/// Regions are ordered by their lowest cell index.
pub fn regions<T, P>(grid: &Grid<T>, diagonal: bool, passable: P) -> Vec<Vec<usize>>
where
    P: Fn(&T) -> bool,
{
    let mut visited = vec![false; grid.len()];
    let mut found = Vec::new();

    for start in 0..grid.len() {
        if visited[start] || !passable(&grid[start]) {
            continue;
        }
        found.push(fill_from(grid, start, diagonal, &passable, &mut visited));
    }
    found
}

/// Cells strictly lower than each of their orthogonal neighbors
pub fn local_minima<T: Ord>(grid: &Grid<T>) -> Vec<usize> {
    let graph = grid.graph();
    (0..grid.len())
        .filter(|&i| graph.neighbors(i, false).all(|n| grid[i] < grid[n]))
        .collect()
}

fn fill_from<T, P>(
    grid: &Grid<T>,
    start: usize,
    diagonal: bool,
    passable: &P,
    visited: &mut [bool],
) -> Vec<usize>
where
    P: Fn(&T) -> bool,
{
    let Some(value) = grid.get(start) else {
        return Vec::new();
    };
    if !passable(value) {
        return Vec::new();
    }

    let graph = grid.graph();
    let mut region = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(cell) = queue.pop_front() {
        region.push(cell);
        for next in graph.neighbors(cell, diagonal) {
            if !visited[next] && passable(&grid[next]) {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    region
}
