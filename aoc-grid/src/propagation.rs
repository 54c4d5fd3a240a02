//! Step-based energy propagation with chain reactions
//!
//! Each step raises every cell by one. Any cell that climbs above the
//! threshold fires: it raises each of its eight neighbors by one, which can
//! push them over the threshold too. Once the cascade settles, every cell
//! that fired drops back to the baseline. A cell fires at most once per step.

use crate::error::GridError;
use crate::grid::Grid;
use log::debug;

/// Tunables for a propagation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationConfig {
    /// A cell fires once its level is strictly greater than this
    pub threshold: u8,
    /// Level a fired cell resets to at the end of the step
    pub baseline: u8,
    /// Step cap for [`PropagationSimulator::run_until_all_fire`]
    pub max_steps: u64,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            threshold: 9,
            baseline: 0,
            max_steps: 10_000,
        }
    }
}

/// Owns an energy table and advances it one step at a time
#[derive(Debug, Clone)]
pub struct PropagationSimulator {
    state: Grid<u8>,
    config: PropagationConfig,
    steps_taken: u64,
    // Scratch buffers reused across steps
    fired: Vec<bool>,
    pending: Vec<usize>,
}

impl PropagationSimulator {
    /// Start from `initial` with the default threshold 9 and baseline 0
    pub fn new(initial: Grid<u8>) -> Self {
        Self::with_config(initial, PropagationConfig::default())
    }

    pub fn with_config(initial: Grid<u8>, config: PropagationConfig) -> Self {
        let len = initial.len();
        Self {
            state: initial,
            config,
            steps_taken: 0,
            fired: vec![false; len],
            pending: Vec::with_capacity(len),
        }
    }

    pub fn state(&self) -> &Grid<u8> {
        &self.state
    }

    pub fn into_state(self) -> Grid<u8> {
        self.state
    }

    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    /// Steps advanced since construction
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Advance one step and return how many cells fired
    pub fn step(&mut self) -> usize {
        let graph = self.state.graph();
        let threshold = self.config.threshold;

        self.fired.fill(false);
        self.pending.clear();

        for (index, level) in self.state.cells_mut().iter_mut().enumerate() {
            *level = level.saturating_add(1);
            if *level > threshold {
                self.pending.push(index);
            }
        }

        let mut fire_count = 0;
        while let Some(index) = self.pending.pop() {
            if self.fired[index] {
                continue;
            }
            self.fired[index] = true;
            fire_count += 1;

            for next in graph.neighbors(index, true) {
                if self.fired[next] {
                    continue;
                }
                let level = &mut self.state[next];
                let before = *level;
                *level = before.saturating_add(1);
                // Only the crossing pushes, so a cell is queued at most once
                // by its neighbors
                if before <= threshold && *level > threshold {
                    self.pending.push(next);
                }
            }
        }

        let baseline = self.config.baseline;
        for (level, &fired) in self.state.cells_mut().iter_mut().zip(&self.fired) {
            if fired {
                *level = baseline;
            }
        }

        self.steps_taken += 1;
        debug!("step {}: {} cells fired", self.steps_taken, fire_count);
        fire_count
    }

    /// Advance `n` steps and return the total number of fires
    pub fn run_for_steps(&mut self, n: u64) -> u64 {
        (0..n).map(|_| self.step() as u64).sum()
    }

    /// Advance until every cell fires in the same step
    ///
    /// Returns that step's 1-indexed number, counted from construction. A
    /// simulator that already advanced keeps counting from where it is.
    ///
    /// # Returns
    /// * `Ok(step)` - The first fully synchronized step
    /// * `Err(GridError::NonTerminating)` - `max_steps` was reached first
    pub fn run_until_all_fire(&mut self) -> Result<u64, GridError> {
        let total = self.state.len();
        while self.steps_taken < self.config.max_steps {
            if self.step() == total {
                return Ok(self.steps_taken);
            }
        }
        Err(GridError::NonTerminating {
            steps: self.config.max_steps,
        })
    }
}

/// One step on a copy of `state` with the default configuration
///
/// # Returns
/// The next generation and the number of cells that fired
pub fn step(state: &Grid<u8>) -> (Grid<u8>, usize) {
    step_with(state, PropagationConfig::default())
}

pub fn step_with(state: &Grid<u8>, config: PropagationConfig) -> (Grid<u8>, usize) {
    let mut simulator = PropagationSimulator::with_config(state.clone(), config);
    let fired = simulator.step();
    (simulator.into_state(), fired)
}

/// Total fires over `n` steps from `initial`
pub fn run_for_steps(initial: &Grid<u8>, n: u64) -> u64 {
    run_for_steps_with(initial, n, PropagationConfig::default())
}

pub fn run_for_steps_with(initial: &Grid<u8>, n: u64, config: PropagationConfig) -> u64 {
    PropagationSimulator::with_config(initial.clone(), config).run_for_steps(n)
}

/// First step at which every cell of `initial` fires together
pub fn run_until_all_fire(initial: &Grid<u8>) -> Result<u64, GridError> {
    run_until_all_fire_with(initial, PropagationConfig::default())
}

pub fn run_until_all_fire_with(
    initial: &Grid<u8>,
    config: PropagationConfig,
) -> Result<u64, GridError> {
    PropagationSimulator::with_config(initial.clone(), config).run_until_all_fire()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid<u8> {
        Grid::from_rows(rows.iter().map(|r| r.to_vec())).unwrap()
    }

    #[test]
    fn test_quiet_step_only_increments() {
        let (next, fired) = step(&grid(&[&[0, 1], &[2, 3]]));
        assert_eq!(fired, 0);
        assert_eq!(next.cells(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_cascade_from_small_example() {
        // Worked example from the 2021 day 11 puzzle text
        let start = grid(&[
            &[1, 1, 1, 1, 1],
            &[1, 9, 9, 9, 1],
            &[1, 9, 1, 9, 1],
            &[1, 9, 9, 9, 1],
            &[1, 1, 1, 1, 1],
        ]);
        let (after_one, fired) = step(&start);
        assert_eq!(fired, 9);
        assert_eq!(
            after_one,
            grid(&[
                &[3, 4, 5, 4, 3],
                &[4, 0, 0, 0, 4],
                &[5, 0, 0, 0, 5],
                &[4, 0, 0, 0, 4],
                &[3, 4, 5, 4, 3],
            ])
        );

        let (after_two, fired) = step(&after_one);
        assert_eq!(fired, 0);
        assert_eq!(
            after_two,
            grid(&[
                &[4, 5, 6, 5, 4],
                &[5, 1, 1, 1, 5],
                &[6, 1, 1, 1, 6],
                &[5, 1, 1, 1, 5],
                &[4, 5, 6, 5, 4],
            ])
        );
    }

    #[test]
    fn test_cell_fires_once_even_when_pushed_repeatedly() {
        // Every cell fires on the first step; neighbors pushing already
        // fired cells must not count them twice
        let (next, fired) = step(&grid(&[&[9, 9, 9], &[9, 9, 9]]));
        assert_eq!(fired, 6);
        assert!(next.cells().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_custom_threshold_and_baseline() {
        let config = PropagationConfig {
            threshold: 3,
            baseline: 1,
            ..PropagationConfig::default()
        };
        let (next, fired) = step_with(&grid(&[&[3, 0, 0]]), config);
        assert_eq!(fired, 1);
        assert_eq!(next.cells(), &[1, 2, 1]);
    }

    #[test]
    fn test_simulator_counts_steps() {
        let mut sim = PropagationSimulator::new(grid(&[&[0]]));
        assert_eq!(sim.run_for_steps(9), 0);
        assert_eq!(sim.steps_taken(), 9);
        assert_eq!(sim.run_until_all_fire(), Ok(10));
        assert_eq!(sim.state().cells(), &[0]);
    }

    #[test]
    fn test_never_synchronizing_hits_cap() {
        // Levels saturate at u8::MAX, so nothing ever exceeds this threshold
        let config = PropagationConfig {
            threshold: u8::MAX,
            baseline: 0,
            max_steps: 50,
        };
        let result = run_until_all_fire_with(&grid(&[&[0, 5]]), config);
        assert_eq!(result, Err(GridError::NonTerminating { steps: 50 }));
    }

    #[test]
    fn test_run_for_steps_on_empty_grid() {
        let empty = Grid::<u8>::new(0, 0, Vec::new()).unwrap();
        assert_eq!(run_for_steps(&empty, 5), 0);
    }
}
