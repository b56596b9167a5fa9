//! Storage for the valid cells found by expansion

use std::collections::HashMap;

use super::placer::PlacedCard;
use crate::types::GridCoord;

/// Inclusive bounds of the occupied grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl GridBounds {
    fn around(c: GridCoord) -> Self {
        GridBounds {
            min_x: c.x,
            max_x: c.x,
            min_y: c.y,
            max_y: c.y,
        }
    }

    fn include(&mut self, c: GridCoord) {
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    pub fn columns(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    pub fn rows(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }

    /// Every coordinate in the box, row by row (y outer, x inner).
    pub fn row_major(self) -> impl Iterator<Item = GridCoord> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| GridCoord::new(x, y)))
    }
}

/// Valid cards keyed by grid coordinate, plus the order they were found in.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: HashMap<GridCoord, PlacedCard>,
    order: Vec<GridCoord>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a valid card. Recording the same coordinate again replaces the
    /// card but keeps its original discovery position.
    pub fn record(&mut self, card: PlacedCard) {
        debug_assert!(card.valid, "only valid cards belong in the registry");
        if self.cards.insert(card.coord, card).is_none() {
            self.order.push(card.coord);
        }
    }

    pub fn get(&self, coord: GridCoord) -> Option<&PlacedCard> {
        self.cards.get(&coord)
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cards.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Coordinates in the order expansion found them
    pub fn discovery_order(&self) -> &[GridCoord] {
        &self.order
    }

    /// Smallest box holding every recorded coordinate; `None` when empty.
    pub fn bounding_box(&self) -> Option<GridBounds> {
        let (first, rest) = self.order.split_first()?;
        let mut bounds = GridBounds::around(*first);
        for &c in rest {
            bounds.include(c);
        }
        Some(bounds)
    }

    /// Recorded cards in row-major order over the bounding box.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &PlacedCard> + '_ {
        self.bounding_box()
            .into_iter()
            .flat_map(GridBounds::row_major)
            .filter_map(move |c| self.cards.get(&c))
    }

    /// Text picture of the occupancy, one line per row: `#` occupied, `.` empty.
    pub fn occupancy_map(&self) -> String {
        let Some(bounds) = self.bounding_box() else {
            return String::new();
        };
        let mut out = String::with_capacity((bounds.columns() + 1) * bounds.rows());
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                out.push(if self.contains(GridCoord::new(x, y)) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
