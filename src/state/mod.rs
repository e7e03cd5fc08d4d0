// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable bookkeeping for a search run.
//!
//! The search itself keeps no mutable shared state: occupancy is passed down
//! the recursion as persistent snapshots. What remains here is the counters
//! a run accumulates.

pub mod statistics;

pub use statistics::{Counters, Statistics};
