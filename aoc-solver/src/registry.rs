//! Solver registry with flat year-day storage and plugin discovery

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use log::debug;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Years the registry can hold (2015-2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
/// Total number of year-day slots
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Slot index for a year-day, or `None` outside the supported range
#[inline]
fn slot(year: u16, day: u8) -> Option<usize> {
    let year_offset = year.checked_sub(BASE_YEAR)? as usize;
    if year_offset >= MAX_YEARS || day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some(year_offset * DAYS_PER_YEAR + (day as usize - 1))
}

#[inline]
fn year_day(slot: usize) -> (u16, u8) {
    (
        BASE_YEAR + (slot / DAYS_PER_YEAR) as u16,
        (slot % DAYS_PER_YEAR) as u8 + 1,
    )
}

/// Creates a solver instance from raw input
///
/// `Send + Sync` so one registry can serve a whole worker pool.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a slot without running anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver supports
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Collects factories, then freezes into a [`SolverRegistry`]
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Lines {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Vec<&str>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Lines>(2021, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2021, 1, "a\nb\nc").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a raw factory for a year-day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the factory stored, ready for chaining
    /// * `Err(RegistrationError::InvalidYearDay)` - No slot for this year-day
    /// * `Err(RegistrationError::Duplicate)` - The slot is already taken
    pub fn register<F>(
        self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(year, day, parts, &[], boxed(factory))
    }

    /// Register solver type `S`, using `S::PARTS` as the part count
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.insert(year, day, S::PARTS, &[], instance_factory::<S>(year, day))
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// // Only grid puzzles from 2021
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|p| p.year == 2021 && p.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin> {
            if filter(plugin) {
                debug!(
                    "registering plugin {}/{:02} tags={:?}",
                    plugin.year, plugin.day, plugin.tags
                );
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    fn insert(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        let index = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries[index] = Some(Entry {
            factory,
            parts,
            tags,
        });
        Ok(self)
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Box a factory closure, pinning its higher-ranked signature
fn boxed<F>(factory: F) -> SolverFactory
where
    F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync + 'static,
{
    Box::new(factory)
}

fn instance_factory<S>(year: u16, day: u8) -> SolverFactory
where
    S: Solver + 'static,
{
    boxed(move |input: &str| {
        let solver: Box<dyn DynSolver + '_> =
            Box::new(SolverInstance::<S>::new(year, day, input)?);
        Ok(solver)
    })
}

/// Immutable lookup from year-day to solver factory
pub struct SolverRegistry {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for year-day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Parsed and ready to solve
    /// * `Err(SolverError::InvalidYearDay)` - Year-day cannot exist
    /// * `Err(SolverError::NotFound)` - Nothing registered there
    /// * `Err(SolverError::ParseError)` - The solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = slot(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let index = slot(year, day)?;
        self.entries[index].as_ref().map(|e| FactoryInfo {
            year,
            day,
            parts: e.parts,
            tags: e.tags,
        })
    }

    /// Registered solvers in ascending year-day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = year_day(index);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                    tags: e.tags,
                }
            })
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Object-safe registration hook, so plugins of different solver types can
/// sit in one `inventory` collection
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.insert(year, day, S::PARTS, tags, instance_factory::<S>(year, day))
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic discovery
///
/// Usually generated by `#[derive(AutoRegisterSolver)]`. By hand:
///
/// ```ignore
/// aoc_solver::inventory::submit! {
///     SolverPlugin { year: 2021, day: 15, solver: &Chiton, tags: &["grid"] }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering, e.g. "grid" or "pathfinding"
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert_eq!(slot(2015, 1), Some(0));
        assert_eq!(slot(2015, 25), Some(24));
        assert_eq!(slot(2016, 1), Some(25));
        assert_eq!(slot(2034, 25), Some(CAPACITY - 1));
        assert_eq!(slot(2014, 1), None);
        assert_eq!(slot(2035, 1), None);
        assert_eq!(slot(2021, 0), None);
        assert_eq!(slot(2021, 26), None);
    }

    #[test]
    fn test_slot_round_trips() {
        for index in [0, 1, 24, 25, 150, CAPACITY - 1] {
            let (year, day) = year_day(index);
            assert_eq!(slot(year, day), Some(index));
        }
    }
}
