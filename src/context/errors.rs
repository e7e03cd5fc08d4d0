// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for puzzle configuration.

use thiserror::Error;

/// Reasons a list of segment lengths cannot be searched.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No segment lengths were given.
    #[error("Puzzle has no segments")]
    Empty,

    /// A segment of length zero.
    #[error("Segment {index} has length 0")]
    ZeroLength { index: usize },

    /// The segment lengths do not add up to the volume of a cube.
    #[error("Total length {volume} is not a perfect cube")]
    NotACube { volume: usize },

    /// The segment lengths add up to more than `usize::MAX`.
    #[error("Total length of the segments is too large")]
    TooLarge,

    /// A segment cannot fit along any edge of the cube.
    #[error("Segment {index} has length {length}, longer than the cube side {size}")]
    SegmentTooLong {
        index: usize,
        length: usize,
        size: usize,
    },

    #[error("Could not read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse puzzle file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for puzzle configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
