// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use snake_cube::geometry::in_bounds;
use snake_cube::Segment;
use std::collections::HashSet;

/// Check that `chain` is a complete snake for a cube of side `size`.
///
/// Panics with a description of the first violated property:
/// - every cell lies inside the cube
/// - no cell is covered twice
/// - the chain covers the whole cube
/// - each segment starts next to the end of the previous one
/// - every joint is a genuine turn
pub fn assert_valid_chain(chain: &Segment, size: usize) {
    let cells = chain.cells();
    for cell in &cells {
        assert!(in_bounds(*cell, size), "Cell {} outside cube of size {}", cell, size);
    }

    let distinct: HashSet<_> = cells.iter().collect();
    assert_eq!(distinct.len(), cells.len(), "Chain {} covers a cell twice", chain);
    assert_eq!(chain.total_length(), size * size * size, "Chain {} does not fill the cube", chain);

    let specs: Vec<_> = chain.iter().collect();
    for pair in specs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            !a.direction.is_same_axis(b.direction),
            "Joint {} > {} is not a turn",
            a,
            b
        );
        let gap = (
            b.start.x - a.end().x,
            b.start.y - a.end().y,
            b.start.z - a.end().z,
        );
        assert_eq!(gap, b.direction.delta(), "Segment {} is not attached to {}", b, a);
    }
}
