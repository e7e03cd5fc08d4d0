// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the snake cube.
//!
//! This module contains the leaf types the search is built on:
//! - Coordinate: A cell position, plus bounds checking
//! - Direction: The six axis-aligned moves and the turn rule
//! - OccupancyCube: Persistent record of covered cells

pub mod coordinate;
pub mod cube;
pub mod direction;

// Re-export for convenience
pub use coordinate::{in_bounds, Coordinate};
pub use cube::OccupancyCube;
pub use direction::{candidate_next_directions, end_of, step, Axis, Direction};
