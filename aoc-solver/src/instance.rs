//! Timed solver instances

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval around a parse or a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Run `f` and record when it started and finished
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Span) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Span { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer for one part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Parsed input for one year-day puzzle, ready to solve parts
///
/// The shared data borrows from the input for `'a`, so an instance can
/// never outlive the text it was parsed from.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_span: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input`, timing the parse
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_span) = Span::measure(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_span,
        })
    }
}

/// Object-safe view of a [`SolverInstance`]
///
/// The registry hands these out so callers can drive any solver without
/// knowing its concrete type.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!(
///             "{}/{:02} part {}: {} in {}",
///             solver.year(),
///             solver.day(),
///             result.part,
///             result.answer,
///             result.duration()
///         );
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call
    ///
    /// Parts 0 and above [`DynSolver::parts`] fail with
    /// [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_span(&self) -> Span;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            span,
        })
    }

    fn parse_span(&self) -> Span {
        self.parse_span
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
