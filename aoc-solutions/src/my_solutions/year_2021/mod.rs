//! 2021 grid puzzles

pub mod day_11;
pub mod day_15;
pub mod day_9;
