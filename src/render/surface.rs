//! The drawing-surface seam and a recording implementation

use glam::DVec2;

use crate::types::Rgb;

/// Stroke settings in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

/// Whatever the layout is drawn onto: a canvas, a pixmap, a test double.
///
/// Coordinates are device pixels with the origin at the top-left corner and
/// y growing downward.
pub trait DrawingSurface {
    /// Device size `(width, height)` in pixels
    fn size(&self) -> DVec2;

    /// Fill the whole surface, discarding earlier drawing.
    fn clear(&mut self, color: Rgb);

    /// Stroke an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke);

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.stroke_polyline(&[from, to], stroke);
    }
}

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Polyline { points: Vec<DVec2>, stroke: Stroke },
}

/// Keeps every draw call in order. Used headless and in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    size: DVec2,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingSurface {
            size: DVec2::new(width, height),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Polylines stroked in `color`
    pub fn polylines_in(&self, color: Rgb) -> impl Iterator<Item = &[DVec2]> + '_ {
        self.calls.iter().filter_map(move |call| match call {
            DrawCall::Polyline { points, stroke } if stroke.color == color => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn clear(&mut self, color: Rgb) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }
}
