//! Sizing a preview surface inside a viewport

use crate::defaults::VIEWPORT_FILL;
use crate::types::PaperSize;

/// Where a preview surface sits inside its viewport, in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePlacement {
    pub width: u32,
    pub height: u32,
    pub left: u32,
    pub top: u32,
}

/// Largest page-shaped box that fits in 90 % of the viewport, centred.
///
/// Height is tried first; if the matching width overflows, width becomes
/// the limit instead.
pub fn fit_to_viewport(viewport_width: u32, viewport_height: u32, paper: PaperSize) -> SurfacePlacement {
    let aspect = paper.w.raw() / paper.h.raw();
    let max_w = (viewport_width as f64 * VIEWPORT_FILL).floor();
    let max_h = (viewport_height as f64 * VIEWPORT_FILL).floor();

    let mut height = max_h;
    let mut width = (aspect * height).floor();
    if width > max_w {
        width = max_w;
        height = (width / aspect).floor();
    }

    let width = width as u32;
    let height = height as u32;
    SurfacePlacement {
        width,
        height,
        left: viewport_width.saturating_sub(width) / 2,
        top: viewport_height.saturating_sub(height) / 2,
    }
}
