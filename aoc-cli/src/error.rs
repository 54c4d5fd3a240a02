//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
///
/// Per-part failures travel as results, so these only cover the runner
/// itself breaking down.
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Result receiver hung up
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// A solver thread panicked
    #[error("Solver for {year}/{day:02} panicked")]
    WorkerPanicked { year: u16, day: u8 },

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one `Multiple`, flattening
    /// either side that is already a `Multiple` and keeping order
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Reading a puzzle input from the input directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No file for this year-day
    #[error("No input for {year}/{day:02} at {}", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// The file exists but could not be read
    #[error("Failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum PartError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}
