// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The six axis-aligned directions a segment can take.
//!
//! The declaration order of [`Direction`] is the order in which the search
//! tries directions, so it decides which solution is found first.
//!
//! # Examples
//!
//! ```
//! use snake_cube::geometry::{candidate_next_directions, Direction};
//!
//! assert_eq!(Direction::Forwards.to_string(), "forwards");
//! assert!(Direction::Up.is_opposite(Direction::Down));
//!
//! let next: Vec<_> = candidate_next_directions(Direction::Right).collect();
//! assert_eq!(
//!     next,
//!     [Direction::Up, Direction::Down, Direction::Forwards, Direction::Backwards]
//! );
//! ```

use crate::geometry::Coordinate;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An axis-aligned unit direction, displayed by its English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// +x
    Right,
    /// −x
    Left,
    /// +y
    Up,
    /// −y
    Down,
    /// +z
    Forwards,
    /// −z
    Backwards,
}

impl Direction {
    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Right | Direction::Left => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Forwards | Direction::Backwards => Axis::Z,
        }
    }

    /// +1 or -1 along [`Self::axis`].
    pub fn sign(self) -> i32 {
        match self {
            Direction::Right | Direction::Up | Direction::Forwards => 1,
            Direction::Left | Direction::Down | Direction::Backwards => -1,
        }
    }

    /// The unit vector of this direction.
    pub fn delta(self) -> (i32, i32, i32) {
        let s = self.sign();
        match self.axis() {
            Axis::X => (s, 0, 0),
            Axis::Y => (0, s, 0),
            Axis::Z => (0, 0, s),
        }
    }

    /// True iff both directions act on the same axis (same or opposite sign).
    pub fn is_same_axis(self, other: Direction) -> bool {
        self.axis() == other.axis()
    }

    /// True iff both directions act on the same axis with opposite sign.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.is_same_axis(other) && self.sign() != other.sign()
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Forwards => Direction::Backwards,
            Direction::Backwards => Direction::Forwards,
        }
    }
}

/// The coordinate `distance` steps from `coord` along `direction`.
pub fn step(coord: Coordinate, direction: Direction, distance: i32) -> Coordinate {
    let (dx, dy, dz) = direction.delta();
    Coordinate::new(
        coord.x + dx * distance,
        coord.y + dy * distance,
        coord.z + dz * distance,
    )
}

/// The last cell of a segment of `length` cells starting at `coord`.
///
/// `length` must be at least 1.
pub fn end_of(coord: Coordinate, direction: Direction, length: usize) -> Coordinate {
    step(coord, direction, length as i32 - 1)
}

/// The directions a segment following one in `current` may take.
///
/// Excludes `current` and its opposite, so every joint is a genuine turn.
/// Always yields four directions, in declaration order.
pub fn candidate_next_directions(current: Direction) -> impl Iterator<Item = Direction> {
    Direction::iter().filter(move |d| !d.is_same_axis(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_direction_order_and_names() {
        let names: Vec<String> = Direction::iter().map(|d| d.to_string()).collect();
        assert_eq!(
            names,
            vec!["right", "left", "up", "down", "forwards", "backwards"]
        );
        assert_eq!(Direction::COUNT, 6);
    }

    #[test]
    fn test_opposites() {
        for d in Direction::iter() {
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
            assert!(d.is_same_axis(d));
            assert_eq!(d.opposite().opposite(), d);
        }
        assert!(!Direction::Right.is_opposite(Direction::Up));
    }

    #[test]
    fn test_step_and_end_of() {
        let start = Coordinate::new(1, 1, 1);
        assert_eq!(step(start, Direction::Right, 2), Coordinate::new(3, 1, 1));
        assert_eq!(step(start, Direction::Down, 2), Coordinate::new(1, -1, 1));
        assert_eq!(step(start, Direction::Backwards, 0), start);
        assert_eq!(end_of(start, Direction::Forwards, 1), start);
        assert_eq!(end_of(start, Direction::Forwards, 3), Coordinate::new(1, 1, 3));
    }

    #[test]
    fn test_candidate_next_directions() {
        for current in Direction::iter() {
            let next: Vec<_> = candidate_next_directions(current).collect();
            assert_eq!(next.len(), 4);
            assert!(next.iter().all(|d| !d.is_same_axis(current)));
        }
        let next: Vec<_> = candidate_next_directions(Direction::Backwards).collect();
        assert_eq!(
            next,
            vec![Direction::Right, Direction::Left, Direction::Up, Direction::Down]
        );
    }
}
