//! Advent of Code Solver Library
//!
//! Traits and plumbing shared by every puzzle solution: parsing into shared
//! data, per-part solving, timing, and a registry that finds solvers by
//! year and day.
//!
//! # Overview
//!
//! - [`AocParser`] turns input text into `SharedData`
//! - [`PartSolver<N>`] solves part `N`. `#[derive(AocSolver)]` stitches the
//!   parts into a [`Solver`]
//! - [`SolverInstance`] / [`DynSolver`] hold parsed data and time each call
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map year-day to
//!   factories. `#[derive(AutoRegisterSolver)]` submits a solver through
//!   `inventory` so the registry can discover it
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sonar;
//!
//! impl AocParser for Sonar {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sonar {
//!     fn solve(shared: &mut Vec<u32>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sonar {
//!     fn solve(shared: &mut Vec<u32>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Sonar>(2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "3\n9\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "16");
//! assert!(solver.solve(3).is_err());
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Lets derive output (`::aoc_solver::...`) resolve inside this crate too
extern crate self as aoc_solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Span};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macros expand to `::aoc_solver::inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
