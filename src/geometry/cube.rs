// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Persistent occupancy cube.
//!
//! An [`OccupancyCube`] records which cells are covered by segments placed
//! so far. It is never modified in place by the search: marking a segment
//! returns a new cube, so each level of the recursion keeps its own snapshot
//! and backtracking needs no undo.
//!
//! # Examples
//!
//! ```
//! use snake_cube::geometry::{Coordinate, Direction, OccupancyCube};
//!
//! let empty = OccupancyCube::empty(2);
//! let marked = empty.with_segment_marked(Coordinate::ORIGIN, Direction::Right, 2);
//!
//! assert_eq!(empty.occupied_count(), 0);
//! assert_eq!(marked.occupied_count(), 2);
//! assert!(marked.is_occupied(Coordinate::new(1, 0, 0)));
//! assert!(marked.overlaps(Coordinate::new(1, 0, 0), Direction::Up, 2));
//! ```

use crate::geometry::{in_bounds, step, Coordinate, Direction};
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A cubic grid of occupied/free cells, stored as a bitset.
///
/// Bit `(x * size + y) * size + z` is set iff cell (x, y, z) is occupied.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OccupancyCube {
    size: usize,
    words: Vec<u64>,
}

impl OccupancyCube {
    /// A cube of side `size` with no occupied cells.
    pub fn empty(size: usize) -> Self {
        let cells = size * size * size;
        Self {
            size,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        }
    }

    /// Side length of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `size³`.
    pub fn volume(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.volume()
    }

    /// Whether the cell at `coord` is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the cube.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        let index = self.index(coord);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    /// True iff any of the `length` cells from `coord` along `direction`
    /// is already occupied.
    ///
    /// The whole segment must lie inside the cube.
    pub fn overlaps(&self, coord: Coordinate, direction: Direction, length: usize) -> bool {
        (0..length as i32).any(|i| self.is_occupied(step(coord, direction, i)))
    }

    /// A new cube equal to this one with the `length` cells from `coord`
    /// along `direction` marked occupied. `self` is left unchanged.
    ///
    /// The whole segment must lie inside the cube.
    pub fn with_segment_marked(
        &self,
        coord: Coordinate,
        direction: Direction,
        length: usize,
    ) -> OccupancyCube {
        let mut next = self.clone();
        for i in 0..length as i32 {
            let index = next.index(step(coord, direction, i));
            next.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
        }
        next
    }

    fn index(&self, coord: Coordinate) -> usize {
        assert!(
            in_bounds(coord, self.size),
            "Coordinate {} outside cube of size {}",
            coord,
            self.size
        );
        let size = self.size;
        (coord.x as usize * size + coord.y as usize) * size + coord.z as usize
    }
}

impl fmt::Debug for OccupancyCube {
    /// Layers of constant x, rows of constant y, `#` for occupied cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OccupancyCube(size={})", self.size)?;
        let size = self.size as i32;
        for x in 0..size {
            for y in 0..size {
                let row: String = (0..size)
                    .map(|z| {
                        if self.is_occupied(Coordinate::new(x, y, z)) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect();
                write!(f, "{} ", row)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
