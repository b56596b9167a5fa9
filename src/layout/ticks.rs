//! Registration ticks at the corners of the tiled region

use std::collections::HashSet;

use glam::{DVec2, dvec2};

use super::registry::CardRegistry;
use crate::defaults::TICK_LENGTH;
use crate::types::{Degrees, GridCoord};

/// A straight segment in page-space millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: DVec2,
    pub end: DVec2,
}

impl LineSegment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        LineSegment { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> DVec2 {
        (self.start + self.end) * 0.5
    }
}

/// A cross-shaped mark centred on `at`, turned by the grid angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub at: DVec2,
    pub angle: Degrees,
}

impl Tick {
    /// The two arms of the cross: the one along the card's width first,
    /// then the one along its height.
    pub fn segments(&self) -> [LineSegment; 2] {
        let half = TICK_LENGTH.raw() / 2.0;
        let rotation = self.angle.rotation();
        let arm = |a: DVec2, b: DVec2| {
            LineSegment::new(self.at + rotation.rotate(a), self.at + rotation.rotate(b))
        };
        [
            arm(dvec2(-half, 0.0), dvec2(half, 0.0)),
            arm(dvec2(0.0, -half), dvec2(0.0, half)),
        ]
    }
}

/// Ticks for every recorded card, row-major over the occupied box.
///
/// A card contributes its top-left corner always, its top-right corner when
/// nothing sits to its right, its bottom-left when nothing sits below, and
/// its bottom-right when nothing sits diagonally below-right. Each corner is
/// a lattice vertex of the grid; a vertex is only ticked once even when two
/// cards would both claim it.
pub fn generate_ticks(registry: &CardRegistry, angle: Degrees) -> Vec<Tick> {
    let mut ticks = Vec::new();
    let mut seen: HashSet<GridCoord> = HashSet::new();

    for card in registry.iter_row_major() {
        let GridCoord { x, y } = card.coord;
        let right = GridCoord::new(x + 1, y);
        let below = GridCoord::new(x, y + 1);
        let diagonal = GridCoord::new(x + 1, y + 1);

        let candidates = [
            (card.coord, card.corners.tl, true),
            (right, card.corners.tr, !registry.contains(right)),
            (below, card.corners.bl, !registry.contains(below)),
            (diagonal, card.corners.br, !registry.contains(diagonal)),
        ];
        // Vertex (i, j) is the top-left corner of cell (i, j).
        for (vertex, at, wanted) in candidates {
            if wanted && seen.insert(vertex) {
                ticks.push(Tick { at, angle });
            }
        }
    }

    ticks
}

/// Two segments per tick, in tick order.
pub fn tick_segments(ticks: &[Tick]) -> Vec<LineSegment> {
    ticks.iter().flat_map(Tick::segments).collect()
}
