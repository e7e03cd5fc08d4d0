// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver for the snake cube puzzle.
//!
//! A snake cube is a string of small cubes threaded on an elastic: runs of
//! cubes are held straight, and the joints between runs can be turned. The
//! puzzle is to fold the snake into a solid cube. Given the run lengths in
//! order, this crate finds a path of straight, axis-aligned segments that
//! covers every cell of the cube exactly once, with a genuine turn at every
//! joint.
//!
//! # Architecture
//!
//! - [`geometry`]: Coordinates, the six directions, and a persistent
//!   occupancy cube
//! - [`engine`]: The depth-first backtracking search and the segment chain
//!   it produces
//! - [`context`]: Validated puzzle configuration (built-in, JSON, or a list)
//! - [`state`]: Counters recorded during a search
//!
//! # Search Algorithm
//!
//! Every cell and direction is tried as the start of the first segment. Each
//! placed segment is followed by the next length in each of the four
//! directions that turn off its axis. Placements that leave the cube or cross
//! a covered cell fail, and the search backtracks. The first complete chain
//! in this fixed order is returned, so results are reproducible.
//!
//! # Example
//!
//! ```
//! use snake_cube::engine::{render, solve};
//!
//! let chain = solve(&[2, 1, 1, 1, 1, 1, 1]).unwrap();
//! assert!(chain.is_some());
//!
//! let none = solve(&[2, 2, 1, 1, 1, 1]).unwrap();
//! assert_eq!(render(none.as_ref()), "No solution");
//! ```

pub mod context;
pub mod engine;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use context::{ConfigError, Puzzle};
pub use engine::{solve, SearchEngine, Segment, SegmentSpec};
