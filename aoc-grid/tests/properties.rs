//! Property-based tests for the grid engine
//!
//! **Feature: grid-engine**

use aoc_grid::{Grid, GridGraph, PathFinder, PropagationSimulator, run_for_steps, shortest_distance};
use proptest::prelude::*;

/// Strategy for a grid with every cell drawn from `values`
fn grid_strategy(
    max_side: usize,
    values: std::ops::RangeInclusive<u8>,
) -> impl Strategy<Value = Grid<u8>> {
    (1..=max_side, 1..=max_side).prop_flat_map(move |(width, height)| {
        prop::collection::vec(values.clone(), width * height)
            .prop_map(move |cells| Grid::new(width, height, cells).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Property 1: Uniform weights cost k per step**
    /// *For any* grid where every cell holds `k`, the distance between two
    /// cells is `k` times their Manhattan distance.
    #[test]
    fn prop_uniform_weight_is_scaled_manhattan(
        width in 1usize..=12,
        height in 1usize..=12,
        k in 0u8..=9,
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let grid = Grid::filled(width, height, k);
        let source = a.index(grid.len());
        let target = b.index(grid.len());
        let expected = u64::from(k) * grid.graph().manhattan(source, target) as u64;
        prop_assert_eq!(shortest_distance(&grid, source, target), Ok(expected));
    }

    /// **Property 2: Raising a weight never shortens the path**
    #[test]
    fn prop_distance_monotone_in_cell_weight(
        grid in grid_strategy(10, 1..=9),
        cell in any::<prop::sample::Index>(),
        bump in 1u8..=50,
    ) {
        let source = grid.top_left();
        let target = grid.bottom_right();
        let before = shortest_distance(&grid, source, target).unwrap();

        let mut heavier = grid.clone();
        let i = cell.index(heavier.len());
        heavier[i] = heavier[i].saturating_add(bump);
        let after = shortest_distance(&heavier, source, target).unwrap();

        prop_assert!(after >= before, "{} < {} after raising cell {}", after, before, i);
    }

    /// **Property 3: Neighbor enumeration is pure and bounded**
    /// *For any* cell, enumerating twice gives the same sequence, and every
    /// neighbor is in range, distinct, and one king move away.
    #[test]
    fn prop_neighbors_idempotent_and_in_bounds(
        width in 1usize..=20,
        height in 1usize..=20,
        cell in any::<prop::sample::Index>(),
        diagonal in any::<bool>(),
    ) {
        let graph = GridGraph::new(width, height);
        let index = cell.index(graph.len());
        let first: Vec<usize> = graph.neighbors(index, diagonal).collect();
        let second: Vec<usize> = graph.neighbors(index, diagonal).collect();
        prop_assert_eq!(&first, &second);

        let (x, y) = graph.coords(index);
        for &n in &first {
            prop_assert!(graph.contains(n));
            let (nx, ny) = graph.coords(n);
            prop_assert!(x.abs_diff(nx) <= 1 && y.abs_diff(ny) <= 1);
            prop_assert!(n != index);
            if !diagonal {
                prop_assert_eq!(graph.manhattan(index, n), 1);
            }
        }
        let mut dedup = first.clone();
        dedup.sort_unstable();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), first.len());
    }

    /// **Property 4: Stepping one at a time matches a batched run**
    #[test]
    fn prop_single_steps_sum_to_batched_run(
        grid in grid_strategy(8, 0..=9),
        n in 0u64..=40,
    ) {
        let mut sim = PropagationSimulator::new(grid.clone());
        let stepped: u64 = (0..n).map(|_| sim.step() as u64).sum();
        prop_assert_eq!(stepped, run_for_steps(&grid, n));
        prop_assert_eq!(sim.steps_taken(), n);
    }

    /// **Property 5: Fire counts and levels stay in range**
    /// *For any* step, at most every cell fires once, and no cell is left
    /// above the threshold afterwards.
    #[test]
    fn prop_step_leaves_no_cell_above_threshold(grid in grid_strategy(8, 0..=9)) {
        let mut sim = PropagationSimulator::new(grid);
        for _ in 0..5 {
            let fired = sim.step();
            prop_assert!(fired <= sim.state().len());
            prop_assert!(sim.state().cells().iter().all(|&v| v <= 9));
        }
    }

    /// **Property 6: Reconstructed paths pay exactly the reported distance**
    #[test]
    fn prop_path_cells_sum_to_distance(grid in grid_strategy(10, 0..=9)) {
        let path = PathFinder::new(&grid).path(grid.top_left(), grid.bottom_right()).unwrap();
        let paid: u64 = path.cells.iter().skip(1).map(|&i| u64::from(grid[i])).sum();
        prop_assert_eq!(paid, path.distance);
        for pair in path.cells.windows(2) {
            prop_assert_eq!(grid.graph().manhattan(pair[0], pair[1]), 1);
        }
    }
}
