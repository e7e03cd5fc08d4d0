// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The chain of segments built by the search.
//!
//! A [`Segment`] owns its successor, so a complete solution is a singly
//! linked list from the first segment to the last. Nodes on failed branches
//! are simply dropped.
//!
//! # Examples
//!
//! ```
//! use snake_cube::engine::{Segment, SegmentSpec};
//! use snake_cube::geometry::{Coordinate, Direction};
//!
//! let last = Segment::new(SegmentSpec::new(Coordinate::new(1, 0, 0), Direction::Up, 2));
//! let chain = Segment::with_next(
//!     SegmentSpec::new(Coordinate::ORIGIN, Direction::Right, 1),
//!     last,
//! );
//!
//! assert_eq!(chain.to_string(), "right 1 > up 2");
//! assert_eq!(chain.len(), 2);
//! assert_eq!(chain.total_length(), 3);
//! ```

use crate::geometry::{end_of, step, Coordinate, Direction};
use std::fmt;

/// Placement of one straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentSpec {
    pub start: Coordinate,
    pub direction: Direction,
    pub length: usize,
}

impl SegmentSpec {
    /// # Panics
    ///
    /// Panics if `length` is 0.
    pub fn new(start: Coordinate, direction: Direction, length: usize) -> Self {
        assert!(length >= 1, "Segment length must be at least 1");
        Self {
            start,
            direction,
            length,
        }
    }

    /// The last cell covered by this segment.
    pub fn end(&self) -> Coordinate {
        end_of(self.start, self.direction, self.length)
    }

    /// The cells covered by this segment, from start to end.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| step(self.start, self.direction, i))
    }
}

impl fmt::Display for SegmentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.length)
    }
}

/// A node of the chain: one segment and, unless it is the last, the rest
/// of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub spec: SegmentSpec,
    pub next: Option<Box<Segment>>,
}

impl Segment {
    /// A terminal node.
    pub fn new(spec: SegmentSpec) -> Self {
        Self { spec, next: None }
    }

    /// A node followed by `next`.
    pub fn with_next(spec: SegmentSpec, next: Segment) -> Self {
        Self {
            spec,
            next: Some(Box::new(next)),
        }
    }

    /// Iterate over the segment specs from this node to the end of the chain.
    pub fn iter(&self) -> SegmentIter<'_> {
        SegmentIter {
            current: Some(self),
        }
    }

    /// Number of segments in the chain.
    // A chain always has at least one node.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Sum of all segment lengths.
    pub fn total_length(&self) -> usize {
        self.iter().map(|s| s.length).sum()
    }

    /// Directions of the segments, first to last.
    pub fn directions(&self) -> Vec<Direction> {
        self.iter().map(|s| s.direction).collect()
    }

    /// Every cell covered by the chain, in path order.
    pub fn cells(&self) -> Vec<Coordinate> {
        self.iter().flat_map(|s| s.cells()).collect()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " > ")?;
            }
            write!(f, "{}", spec)?;
        }
        Ok(())
    }
}

/// Iterator over the [`SegmentSpec`]s of a chain.
pub struct SegmentIter<'a> {
    current: Option<&'a Segment>,
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = &'a SegmentSpec;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.spec)
    }
}

impl<'a> IntoIterator for &'a Segment {
    type Item = &'a SegmentSpec;
    type IntoIter = SegmentIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The text printed for a search outcome.
pub fn render(chain: Option<&Segment>) -> String {
    match chain {
        Some(chain) => chain.to_string(),
        None => String::from("No solution"),
    }
}
