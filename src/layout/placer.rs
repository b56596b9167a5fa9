//! Placing a single card instance at a grid coordinate

use glam::DVec2;

use super::geometry::{Corners, rotate_about};
use crate::params::PageSetup;
use crate::types::GridCoord;

/// One card instance: where its corners land on the page and whether all
/// of them stay on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCard {
    pub coord: GridCoord,
    pub corners: Corners,
    pub valid: bool,
}

/// Places cards for one [`PageSetup`]. The rotation vector is computed once.
#[derive(Debug, Clone, Copy)]
pub struct CardPlacer {
    setup: PageSetup,
    pivot: DVec2,
    rotation: DVec2,
}

impl CardPlacer {
    pub fn new(setup: PageSetup) -> Self {
        CardPlacer {
            setup,
            pivot: setup.paper.center(),
            rotation: setup.angle.rotation(),
        }
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    /// Corners of the cell at `coord` and its validity.
    ///
    /// The cell is laid out unrotated around `page centre + offset +
    /// (x·cardW, y·cardH)`, then the whole grid is rotated about the page
    /// centre, never about the card's own centre.
    pub fn place(&self, coord: GridCoord) -> PlacedCard {
        let card = self.setup.card.to_vec();
        let cell = DVec2::new(coord.x as f64, coord.y as f64) * card;
        let center = self.pivot + self.setup.offset + cell;

        let corners = Corners::of_rect(center, card)
            .map(|p| rotate_about(p, self.pivot, self.rotation));
        let valid = corners
            .to_array()
            .iter()
            .all(|&p| self.setup.paper.contains(p));

        PlacedCard {
            coord,
            corners,
            valid,
        }
    }
}

/// Place a single card; see [`CardPlacer::place`].
pub fn place_card(setup: &PageSetup, coord: GridCoord) -> PlacedCard {
    CardPlacer::new(*setup).place(coord)
}
