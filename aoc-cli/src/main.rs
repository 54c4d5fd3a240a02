//! AOC CLI - batch runner for the grid puzzle solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::ResultAggregator;
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use log::{info, warn};
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(&config);

    let registry = build_registry(&config.tags)?;
    info!("{} solver(s) registered", registry.len());

    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .collect();
    if !missing.is_empty() {
        warn!(
            "{} input file(s) missing from {}",
            missing.len(),
            executor.inputs().dir().display()
        );
        for w in &missing {
            warn!("  - {}", executor.inputs().input_path(w.year, w.day).display());
        }
    }

    run_executor(executor, config.quiet)
}

/// `-v` flags set the base level, `RUST_LOG` overrides it
fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
}

/// Run the executor and print results in order as they become ready
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::for_work_items(&work_items);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("no result for {:?}", aggregator.missing());
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry, keeping solvers that carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
