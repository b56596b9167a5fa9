//! Drawing a layout onto an injected surface
//!
//! This module is organized into submodules:
//! - `surface`: The `DrawingSurface` trait and a recording implementation
//! - `viewport`: Fitting a page-shaped surface into a viewport

pub mod surface;
pub mod viewport;

pub use surface::{DrawCall, DrawingSurface, RecordingSurface, Stroke};
pub use viewport::{SurfacePlacement, fit_to_viewport};

use glam::DVec2;

use crate::defaults::{BACKGROUND, CARD_LINE_FRACTION, CARD_STROKE, TICK_LINE_FRACTION, TICK_STROKE};
use crate::layout::LayoutResult;
use crate::log;
use crate::types::PaperSize;

/// Page millimetres → device pixels, stretching each axis independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    scale: DVec2,
}

impl PageTransform {
    /// `paper` must have positive sides; [`crate::params`] guarantees that.
    pub fn new(paper: PaperSize, device: DVec2) -> Self {
        PageTransform {
            scale: device / paper.to_vec(),
        }
    }

    #[inline]
    pub fn apply(&self, mm: DVec2) -> DVec2 {
        mm * self.scale
    }
}

/// Clear `surface` and draw every card outline, then every tick segment.
pub fn render_layout(result: &LayoutResult, surface: &mut dyn DrawingSurface) {
    let device = surface.size();
    surface.clear(BACKGROUND);
    if device.x <= 0.0 || device.y <= 0.0 {
        log::warn!("skipping render onto empty surface {}", device);
        return;
    }

    let transform = PageTransform::new(result.setup.paper, device);

    let card_stroke = Stroke {
        color: CARD_STROKE,
        width: device.x * CARD_LINE_FRACTION,
    };
    for card in result.registry.iter_row_major() {
        let outline = card.corners.outline().map(|p| transform.apply(p));
        surface.stroke_polyline(&outline, card_stroke);
    }

    let tick_stroke = Stroke {
        color: TICK_STROKE,
        width: device.x * TICK_LINE_FRACTION,
    };
    for seg in &result.segments {
        surface.stroke_line(transform.apply(seg.start), transform.apply(seg.end), tick_stroke);
    }

    log::trace!(
        "rendered {} cards and {} segments at {}",
        result.registry.len(),
        result.segments.len(),
        device
    );
}
