//! Puzzle inputs read from a local directory

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Layout: `{dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    ///
    /// # Returns
    /// * `Ok(String)` - File contents
    /// * `Err(InputError::Missing)` - No file at the expected path
    /// * `Err(InputError::Read)` - Any other IO failure
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InputError::Missing { year, day, path },
            _ => InputError::Read {
                message: e.to_string(),
                path,
            },
        })
    }
}
