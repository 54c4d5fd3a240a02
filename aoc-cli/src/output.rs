//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Prints results as `YYYY/DD Part N: answer (parse: …, solve: …)`
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_line(result)),
            (Err(_), _) => eprintln!("{}", format_line(result)),
        }
    }

    /// Totals plus wall-clock time, skipped in quiet mode
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::of(results);
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.solved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
        if !elapsed.is_zero() {
            let compute_secs = (summary.parse_time + summary.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            println!("Speedup factor: {:.2}x", compute_secs / elapsed.as_secs_f64());
        }
    }
}

/// Counts and time totals over successful results
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let ok = || results.iter().filter(|r| r.answer.is_ok());
        let solved = ok().count();
        Summary {
            solved,
            failed: results.len() - solved,
            parse_time: ok().filter_map(|r| r.parse_duration).sum(),
            solve_time: ok().map(|r| r.solve_duration).sum(),
        }
    }
}

fn format_line(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, PartError};
    use std::path::PathBuf;

    fn ok(part: u8, answer: &str) -> SolverResult {
        SolverResult {
            year: 2021,
            day: 9,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: Some(TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(3),
        }
    }

    fn missing(part: u8) -> SolverResult {
        SolverResult {
            year: 2021,
            day: 11,
            part,
            answer: Err(PartError::Input(InputError::Missing {
                year: 2021,
                day: 11,
                path: PathBuf::from("/in/2021_day11.txt"),
            })),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(&ok(1, "15")),
            "2021/09 Part 1: 15 (parse: 250µs, solve: 3.00ms)"
        );
        assert_eq!(
            format_line(&missing(2)),
            "2021/11 Part 2: Error - No input for 2021/11 at /in/2021_day11.txt"
        );
    }

    #[test]
    fn test_summary_counts_only_successes() {
        let summary = Summary::of(&[ok(1, "15"), ok(2, "1134"), missing(1)]);
        assert_eq!(
            summary,
            Summary {
                solved: 2,
                failed: 1,
                parse_time: TimeDelta::microseconds(500),
                solve_time: TimeDelta::milliseconds(6),
            }
        );
    }
}
