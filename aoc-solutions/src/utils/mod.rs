//! Parsing helpers shared by solutions

pub mod digit_grid;
