//! Card placement, grid expansion and tick generation
//!
//! This module is organized into submodules:
//! - `geometry`: Corners and rotation about the page centre
//! - `placer`: Placing one card at a grid coordinate
//! - `expand`: Walking outward from the origin to find valid cells
//! - `registry`: Storage of the valid cells
//! - `ticks`: Registration ticks and their line segments

pub mod expand;
pub mod geometry;
pub mod placer;
pub mod registry;
pub mod ticks;

pub use expand::{Direction, ExpansionStats, GridExpander};
pub use geometry::Corners;
pub use placer::{CardPlacer, PlacedCard, place_card};
pub use registry::{CardRegistry, GridBounds};
pub use ticks::{LineSegment, Tick, generate_ticks, tick_segments};

use crate::errors::ConfigError;
use crate::log;
use crate::params::{LayoutParams, PageSetup};

/// Everything one recomputation produces. Nothing here is shared with
/// earlier or later runs.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub setup: PageSetup,
    pub registry: CardRegistry,
    pub stats: ExpansionStats,
    pub ticks: Vec<Tick>,
    pub segments: Vec<LineSegment>,
}

impl LayoutResult {
    /// Build the layout for an already validated setup.
    pub fn from_setup(setup: PageSetup) -> Self {
        let (registry, stats) = GridExpander::new(setup).expand();
        let ticks = generate_ticks(&registry, setup.angle);
        let segments = tick_segments(&ticks);

        log::debug!(
            "layout {} with {} cards at {}: {} cards, {} ticks",
            setup.paper,
            setup.card,
            setup.angle,
            registry.len(),
            ticks.len()
        );

        LayoutResult {
            setup,
            registry,
            stats,
            ticks,
            segments,
        }
    }

    /// True when no card fits on the page.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

/// Validate `params` and compute the full layout.
pub fn compute_layout(params: &LayoutParams) -> Result<LayoutResult, ConfigError> {
    let setup = params.resolve()?;
    Ok(LayoutResult::from_setup(setup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    #[test]
    fn compute_layout_rejects_bad_params_before_geometry() {
        let params = LayoutParams {
            paper: "Custom".to_string(),
            custom_paper_height: 0.0,
            ..LayoutParams::default()
        };
        assert!(matches!(
            compute_layout(&params),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    #[test]
    fn recomputation_is_independent_of_previous_runs() {
        let a4 = LayoutParams {
            paper: "A4".to_string(),
            ..LayoutParams::default()
        };
        let first = compute_layout(&a4).unwrap();
        let _other = compute_layout(&LayoutParams::default()).unwrap();
        let again = compute_layout(&a4).unwrap();
        assert_eq!(first.ticks, again.ticks);
        assert_eq!(first.registry.discovery_order(), again.registry.discovery_order());
    }

    #[test]
    fn zero_width_card_gives_empty_result() {
        let setup = PageSetup::new(Size::mm(210.0, 297.0), Size::mm(0.0, 55.0));
        let result = LayoutResult::from_setup(setup);
        assert!(result.is_empty());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn oversized_card_gives_empty_result() {
        let params = LayoutParams {
            paper: "A6".to_string(),
            card: "Postcard 6\"x4\"".to_string(),
            ..LayoutParams::default()
        };
        let result = compute_layout(&params).unwrap();
        assert!(result.is_empty());
        assert!(result.ticks.is_empty());
        assert!(result.segments.is_empty());
    }
}
