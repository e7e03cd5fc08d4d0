// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate type for cells of the cube.
//!
//! Components are signed so that a move off the edge of the cube can be
//! represented and then rejected by [`in_bounds`].

use std::fmt;

/// A cell position (x, y, z).
///
/// Valid cells of a cube of side `size` have every component in `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    /// The corner cell (0, 0, 0).
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Iterate over every cell of a cube of side `size`.
    ///
    /// Cells are yielded with x outermost and z innermost, each ascending.
    /// The search relies on this order being stable.
    pub fn scan(size: usize) -> impl Iterator<Item = Coordinate> {
        let size = size as i32;
        (0..size).flat_map(move |x| {
            (0..size).flat_map(move |y| (0..size).map(move |z| Coordinate::new(x, y, z)))
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// True iff every component of `coord` lies in `[0, size)`.
pub fn in_bounds(coord: Coordinate, size: usize) -> bool {
    let size = size as i32;
    (0..size).contains(&coord.x) && (0..size).contains(&coord.y) && (0..size).contains(&coord.z)
}
