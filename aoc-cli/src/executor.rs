//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError, InputError, PartError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PartError>,
    /// Parse time, carried only by the first part that used the parse.
    /// `None` on later parts sharing it and when the input never reached
    /// the parser
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: PartError) -> Self {
        SolverResult {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// One year-day and the parts to run for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    shared: SharedState,
    thread_pool: rayon::ThreadPool,
}

/// What every worker needs, borrowed across the pool
struct SharedState {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedState {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.shared.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.shared;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            "running {} work item(s) on {} thread(s), parallelize by {:?}",
            work_items.len(),
            self.thread_pool.current_num_threads(),
            self.shared.parallelize_by
        );

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.shared) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part mode also splits each item's parts inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                self.execute_parallel_grouped(work_items.into_iter().map(|w| vec![w]).collect(), &tx)
            }
        }
    }

    /// Run groups in parallel, items within a group in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, shared) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), Some(e2)) => Some(ArcExecutorError::combine(e1, e2)),
                    (e1, e2) => e1.or(e2),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the `--part` filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load the input and run every part of one work item
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &SharedState,
) -> Result<(), ArcExecutorError> {
    let input = match shared.inputs.get(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            debug!("{}/{:02}: {}", work.year, work.day, e);
            return send_input_failure(work, &e, tx);
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &shared.registry)
    } else {
        run_parts_sequential(work, &input, tx, &shared.registry)
    }
}

fn send_input_failure(
    work: &WorkItem,
    error: &InputError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(
            tx,
            SolverResult::failed(work.year, work.day, part, error.clone().into()),
        )?;
    }
    Ok(())
}

/// One error result per part when the solver could not be built
fn setup_failures(
    year: u16,
    day: u8,
    parts: RangeInclusive<u8>,
    error: &SolverError,
) -> impl Iterator<Item = SolverResult> + '_ {
    debug!("{}/{:02}: {}", year, day, error);
    parts.map(move |part| SolverResult::failed(year, day, part, replicate(error).into()))
}

/// Same variant as `error`; a boxed solve failure keeps only its message
fn replicate(error: &SolverError) -> SolverError {
    match error {
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        SolverError::InvalidYearDay(year, day) => SolverError::InvalidYearDay(*year, *day),
        SolverError::ParseError(e) => SolverError::ParseError(e.clone()),
        SolverError::SolveError(e) => {
            SolverError::SolveError(SolveError::SolveFailed(e.to_string().into()))
        }
    }
}

/// Each part gets its own solver instance so parts can run concurrently
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(year, day, part, &mut *solver, true),
            Err(e) => SolverResult::failed(year, day, part, e.into()),
        })
        .collect();

    results.sort_by_key(|r| r.part);
    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Parse once and solve parts in order on a scoped thread, forwarding
/// each result as soon as it is ready
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (solve_tx, solve_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let parts = work.parts.clone();

    std::thread::scope(|s| {
        let handle = s.spawn(move || match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                let first = *parts.start();
                for part in parts {
                    let result = solve_part(year, day, part, &mut *solver, part == first);
                    if solve_tx.send(result).is_err() {
                        break;
                    }
                }
            }
            Err(e) => {
                for result in setup_failures(year, day, parts, &e) {
                    if solve_tx.send(result).is_err() {
                        break;
                    }
                }
            }
        });

        for result in solve_rx {
            send(tx, result)?;
        }
        handle
            .join()
            .map_err(|_| ExecutorError::WorkerPanicked { year, day }.into())
    })
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    report_parse: bool,
) -> SolverResult {
    let parse_duration = report_parse.then(|| solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => {
            let solve_duration = result.duration();
            debug!("{}/{:02} part {} solved in {}", year, day, part, solve_duration);
            SolverResult {
                year,
                day,
                part,
                answer: Ok(result.answer),
                parse_duration,
                solve_duration,
            }
        }
        Err(e) => SolverResult {
            parse_duration,
            ..SolverResult::failed(year, day, part, SolverError::from(e).into())
        },
    }
}
