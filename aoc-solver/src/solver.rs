//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data every part works on
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Heights;
///
/// impl AocParser for Heights {
///     type SharedData<'a> = Vec<Vec<u8>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.bytes()
///                     .map(|b| match b {
///                         b'0'..=b'9' => Ok(b - b'0'),
///                         _ => Err(ParseError::InvalidFormat(format!("bad digit {:?}", b as char))),
///                     })
///                     .collect::<Result<Vec<u8>, _>>()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Heights::parse("12\n34").unwrap(), vec![vec![1, 2], vec![3, 4]]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results parts want to share
    ///
    /// Owned types are simplest. `&'a str` works for zero-copy data that
    /// needs no transformation.
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle
///
/// Implement one of these per part and derive [`Solver`] with
/// `#[derive(AocSolver)]` to get the dispatch for free.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year-day puzzle
///
/// `shared` is mutable so an earlier part can leave results behind for a
/// later one, e.g. a simulation that part 2 continues from where part 1
/// stopped.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Vec<u32>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string()),
///             2 => Ok(shared.windows(4).filter(|w| w[3] > w[0]).count().to_string()),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
///
/// let mut shared = Depths::parse("199\n200\n208\n210\n200").unwrap();
/// assert_eq!(Depths::solve_part(&mut shared, 1).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` (1-based)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by [`crate::DynSolver`]
pub trait SolverExt: Solver {
    /// Reject part 0 and anything above `PARTS` before dispatching
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
