// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle configuration.
//!
//! A [`Puzzle`] is a validated, ordered list of segment lengths together with
//! the side of the cube they fill. All validation happens here, before any
//! search starts, so the search itself has no error path.
//!
//! # Example
//!
//! ```
//! use snake_cube::context::{ConfigError, Puzzle};
//!
//! let puzzle = Puzzle::new(vec![2, 1, 1, 1, 1, 1, 1]).unwrap();
//! assert_eq!(puzzle.size(), 2);
//! assert_eq!(puzzle.volume(), 8);
//!
//! assert!(matches!(
//!     Puzzle::new(vec![2, 2, 2]),
//!     Err(ConfigError::NotACube { volume: 6 })
//! ));
//! ```

pub mod errors;

pub use errors::{ConfigError, ConfigResult};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Segment lengths of the classic 4×4×4 wooden snake cube.
pub const CLASSIC_LENGTHS: [usize; 39] = [
    3, 3, 3, 3, 1, 3, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 3, 2, 2, 1, 3, 1, 2, 1, 1, 1, 1, 1,
    2, 1, 1, 1, 1, 3, 1, 3,
];

/// On-disk form of a puzzle.
///
/// ```json
/// { "name": "mini", "segment_lengths": [2, 1, 1, 1, 1, 1, 1] }
/// ```
#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    name: Option<String>,
    segment_lengths: Vec<usize>,
}

/// A validated snake cube puzzle.
///
/// # Invariants
///
/// - `lengths` is non-empty and every length is at least 1.
/// - The sum of `lengths` is exactly `size³`.
/// - No length exceeds `size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    name: Option<String>,
    lengths: Vec<usize>,
    size: usize,
}

impl Puzzle {
    /// Validate `lengths` and derive the cube size.
    pub fn new(lengths: Vec<usize>) -> ConfigResult<Self> {
        if lengths.is_empty() {
            return Err(ConfigError::Empty);
        }
        if let Some(index) = lengths.iter().position(|&l| l == 0) {
            return Err(ConfigError::ZeroLength { index });
        }
        let volume = lengths
            .iter()
            .try_fold(0usize, |total, &l| total.checked_add(l))
            .ok_or(ConfigError::TooLarge)?;
        let size = cube_side(volume).ok_or(ConfigError::NotACube { volume })?;
        if let Some((index, &length)) = lengths.iter().enumerate().find(|&(_, &l)| l > size) {
            return Err(ConfigError::SegmentTooLong {
                index,
                length,
                size,
            });
        }
        Ok(Self {
            name: None,
            lengths,
            size,
        })
    }

    /// The classic 39-segment 4×4×4 puzzle.
    pub fn classic() -> Self {
        Self {
            name: Some(String::from("classic")),
            lengths: CLASSIC_LENGTHS.to_vec(),
            size: 4,
        }
    }

    /// Parse a puzzle from JSON text.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let file: PuzzleFile = serde_json::from_str(text)?;
        let mut puzzle = Self::new(file.segment_lengths)?;
        puzzle.name = file.name;
        Ok(puzzle)
    }

    /// Read a puzzle from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading puzzle from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Segment lengths in placement order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Side of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, equal to the sum of the segment lengths.
    pub fn volume(&self) -> usize {
        self.size * self.size * self.size
    }
}

/// The side `s` with `s³ == volume`, if there is one.
///
/// Rounds the floating-point cube root and then checks it exactly.
fn cube_side(volume: usize) -> Option<usize> {
    let side = (volume as f64).cbrt().round() as usize;
    let cube = side.checked_mul(side)?.checked_mul(side)?;
    (cube == volume).then_some(side)
}
