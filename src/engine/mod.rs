// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first backtracking search for a snake that fills the cube.
//!
//! The search places segments one at a time in the order given by the
//! puzzle. Each placement is checked against the cube bounds and against
//! the cells already covered; on success the next segment is tried in each
//! of the four directions that turn away from the current axis.
//!
//! # Architecture
//!
//! The occupancy of the cube is a persistent value. Each recursion level
//! receives the cube as it was before its own segment and builds a new cube
//! for its children, so backtracking is just returning from the call:
//! there is nothing to undo.
//!
//! The search order is fixed:
//! 1. Start cells in [`Coordinate::scan`] order (x outer, z inner)
//! 2. Directions in [`Direction`] declaration order
//! 3. Turns in [`candidate_next_directions`] order
//!
//! so the first chain found is the same on every run.
//!
//! # Example
//!
//! ```
//! use snake_cube::context::Puzzle;
//! use snake_cube::engine::SearchEngine;
//! use snake_cube::state::Counters;
//!
//! let puzzle = Puzzle::new(vec![2, 1, 1, 1, 1, 1, 1]).unwrap();
//! let mut engine = SearchEngine::new();
//!
//! let chain = engine.solve(&puzzle).expect("a 2-cube can always be snaked");
//! assert_eq!(chain.to_string(), "right 2 > up 1 > left 1 > forwards 1 > right 1 > down 1 > left 1");
//! assert_eq!(engine.statistics().get(Counters::Solutions), 1);
//! ```

pub mod chain;

pub use chain::{render, Segment, SegmentSpec};

use crate::context::{ConfigResult, Puzzle};
use crate::geometry::{
    candidate_next_directions, end_of, in_bounds, step, Coordinate, Direction, OccupancyCube,
};
use crate::state::{Counters, Statistics};
use strum::IntoEnumIterator;

/// Runs searches and records what they did.
///
/// The engine holds no search state of its own besides its counters; one
/// engine may run several searches, and [`Self::solve`] resets the counters
/// at the start of each.
#[derive(Debug, Default)]
pub struct SearchEngine {
    statistics: Statistics,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since the last call to [`Self::solve`].
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Find the first chain, in search order, that fills the puzzle's cube.
    ///
    /// Returns `None` if every start cell and direction has been tried
    /// without success.
    pub fn solve(&mut self, puzzle: &Puzzle) -> Option<Segment> {
        self.statistics.clear();
        let size = puzzle.size();
        log::info!(
            "Solving {} puzzle: {} segments in a {}x{}x{} cube",
            puzzle.name().unwrap_or("unnamed"),
            puzzle.lengths().len(),
            size,
            size,
            size
        );

        let cube = OccupancyCube::empty(size);
        let Some((&first, rest)) = puzzle.lengths().split_first() else {
            return None;
        };

        let found = Coordinate::scan(size)
            .flat_map(|start| Direction::iter().map(move |d| (start, d)))
            .find_map(|(start, direction)| {
                log::trace!("Trying first segment from {} going {}", start, direction);
                self.find_chain(start, direction, first, &cube, rest)
            });

        match &found {
            Some(chain) => log::debug!("Found chain: {}", chain),
            None => log::debug!("Search exhausted without a solution"),
        }
        log::debug!("Search statistics: {}", self.statistics);
        found
    }

    /// Try to place a segment and complete the chain after it.
    ///
    /// `cube` is the occupancy before this segment is placed and `remaining`
    /// the lengths of the segments that must follow it. Returns the chain
    /// starting with this segment, or `None` if this placement is invalid
    /// or cannot be completed. `cube` is never modified.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0.
    pub fn find_chain(
        &mut self,
        start: Coordinate,
        direction: Direction,
        length: usize,
        cube: &OccupancyCube,
        remaining: &[usize],
    ) -> Option<Segment> {
        self.statistics.increment_counter(Counters::Placements);
        let spec = SegmentSpec::new(start, direction, length);
        let size = cube.size();

        let end = end_of(start, direction, length);
        if !in_bounds(start, size) || !in_bounds(end, size) {
            self.statistics.increment_counter(Counters::OutOfBounds);
            return None;
        }
        if cube.overlaps(start, direction, length) {
            self.statistics.increment_counter(Counters::Overlaps);
            return None;
        }

        let Some((&next_length, tail)) = remaining.split_first() else {
            self.statistics.increment_counter(Counters::Solutions);
            return Some(Segment::new(spec));
        };

        let next_cube = cube.with_segment_marked(start, direction, length);
        for next_direction in candidate_next_directions(direction) {
            let next_start = step(end, next_direction, 1);
            if !in_bounds(next_start, size) {
                self.statistics.increment_counter(Counters::PrunedStarts);
                continue;
            }
            if let Some(next) =
                self.find_chain(next_start, next_direction, next_length, &next_cube, tail)
            {
                return Some(Segment::with_next(spec, next));
            }
        }

        self.statistics.increment_counter(Counters::DeadEnds);
        None
    }
}

/// Validate `segment_lengths` and search for the first chain that fills
/// their cube.
///
/// `Ok(None)` means the puzzle is well formed but has no solution.
pub fn solve(segment_lengths: &[usize]) -> ConfigResult<Option<Segment>> {
    let puzzle = Puzzle::new(segment_lengths.to_vec())?;
    Ok(SearchEngine::new().solve(&puzzle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ConfigError;

    #[test]
    fn test_single_cell_puzzle() {
        let chain = solve(&[1]).unwrap().unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.to_string(), "right 1");
        assert_eq!(chain.spec.start, Coordinate::ORIGIN);
    }

    #[test]
    fn test_solvable_two_cube() {
        let chain = solve(&[2, 1, 1, 1, 1, 1, 1]).unwrap().unwrap();
        assert_eq!(chain.total_length(), 8);
        assert_eq!(
            chain.to_string(),
            "right 2 > up 1 > left 1 > forwards 1 > right 1 > down 1 > left 1"
        );
    }

    #[test]
    fn test_unsolvable_two_cube() {
        assert_eq!(solve(&[2, 2, 1, 1, 1, 1]).unwrap(), None);
        assert_eq!(solve(&[2, 2, 2, 2]).unwrap(), None);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(solve(&[]), Err(ConfigError::Empty)));
        assert!(matches!(solve(&[usize::MAX, 1]), Err(ConfigError::TooLarge)));
        assert!(matches!(
            solve(&[4, 4]),
            Err(ConfigError::SegmentTooLong { index: 0, .. })
        ));
        assert!(matches!(
            solve(&[1, 1]),
            Err(ConfigError::NotACube { volume: 2 })
        ));
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        // Every cell is occupied, so an in-bounds placement would be counted
        // as an overlap.
        let full =
            OccupancyCube::empty(2).with_segment_marked(Coordinate::ORIGIN, Direction::Right, 2);
        let full = [(0, 1, 0), (0, 0, 1), (0, 1, 1)]
            .iter()
            .fold(full, |cube, &(x, y, z)| {
                cube.with_segment_marked(Coordinate::new(x, y, z), Direction::Right, 2)
            });
        assert!(full.is_full());

        let mut engine = SearchEngine::new();
        let result = engine.find_chain(Coordinate::new(1, 0, 0), Direction::Right, 2, &full, &[]);
        assert_eq!(result, None);
        assert_eq!(engine.statistics().get(Counters::OutOfBounds), 1);
        assert_eq!(engine.statistics().get(Counters::Overlaps), 0);

        let result = engine.find_chain(Coordinate::ORIGIN, Direction::Right, 2, &full, &[]);
        assert_eq!(result, None);
        assert_eq!(engine.statistics().get(Counters::Overlaps), 1);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let mut engine = SearchEngine::new();
        let cube = OccupancyCube::empty(2);
        let result = engine.find_chain(Coordinate::new(-1, 0, 0), Direction::Right, 2, &cube, &[]);
        assert_eq!(result, None);
        assert_eq!(engine.statistics().get(Counters::OutOfBounds), 1);
    }

    #[test]
    fn test_find_chain_leaves_cube_untouched() {
        let mut engine = SearchEngine::new();
        let cube = OccupancyCube::empty(2);
        let chain = engine
            .find_chain(Coordinate::ORIGIN, Direction::Right, 2, &cube, &[1, 1, 1, 1, 1, 1])
            .unwrap();
        assert_eq!(chain.total_length(), 8);
        assert_eq!(cube, OccupancyCube::empty(2));
    }

    #[test]
    fn test_find_chain_is_deterministic() {
        let cube = OccupancyCube::empty(2);
        let first = SearchEngine::new().find_chain(
            Coordinate::new(0, 1, 0),
            Direction::Forwards,
            1,
            &cube,
            &[1, 1, 1, 1, 1, 1, 1],
        );
        let second = SearchEngine::new().find_chain(
            Coordinate::new(0, 1, 0),
            Direction::Forwards,
            1,
            &cube,
            &[1, 1, 1, 1, 1, 1, 1],
        );
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_pruned_starts_are_not_placements() {
        // From a segment ending in a corner, two of the four turns leave the cube.
        let mut engine = SearchEngine::new();
        let cube = OccupancyCube::empty(2);
        let result = engine.find_chain(Coordinate::ORIGIN, Direction::Right, 2, &cube, &[2]);
        assert_eq!(result, None);
        let stats = engine.statistics();
        assert_eq!(stats.get(Counters::PrunedStarts), 2);
        assert_eq!(stats.get(Counters::Placements), 3);
        assert_eq!(stats.get(Counters::OutOfBounds), 2);
        assert_eq!(stats.get(Counters::DeadEnds), 1);
    }

    #[test]
    fn test_statistics_reset_between_solves() {
        let puzzle = Puzzle::new(vec![2, 1, 1, 1, 1, 1, 1]).unwrap();
        let mut engine = SearchEngine::new();
        engine.solve(&puzzle);
        let first = engine.statistics().clone();
        engine.solve(&puzzle);
        assert_eq!(&first, engine.statistics());
        assert_eq!(first.get(Counters::Solutions), 1);
    }
}
