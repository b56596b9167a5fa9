//! Fixed physical constants and parameter defaults (all lengths in mm)

use std::time::Duration;

use crate::types::{Mm, Rgb, Size};

/// Length of both lines of a registration tick; they cross at their midpoints
pub const TICK_LENGTH: Mm = Mm(5.0);

/// Quiet period after the last resize before the layout is recomputed
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Share of the viewport a preview surface may occupy on each axis
pub const VIEWPORT_FILL: f64 = 0.9;

/// Card outline colour on preview surfaces
pub const CARD_STROKE: Rgb = Rgb::new(0x99, 0x99, 0x99);
/// Tick colour on preview surfaces
pub const TICK_STROKE: Rgb = Rgb::new(0xff, 0, 0);
/// Preview background
pub const BACKGROUND: Rgb = Rgb::WHITE;

/// Card outline width as a fraction of surface width
pub const CARD_LINE_FRACTION: f64 = 1.0 / 800.0;
/// Tick line width as a fraction of surface width
pub const TICK_LINE_FRACTION: f64 = 1.0 / 400.0;

pub const DEFAULT_PAPER: &str = "A3";
pub const DEFAULT_CARD: &str = "Business Card UK (85x55mm)";
pub const DEFAULT_CUSTOM_PAPER: Size = Size::mm(210.0, 297.0);
pub const DEFAULT_CUSTOM_CARD: Size = Size::mm(148.0, 105.0);

/// Accepted range of the rotation parameter, degrees
pub const ANGLE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Accepted range of the offset parameters
pub const OFFSET_RANGE: (f64, f64) = (-100.0, 100.0);
/// Accepted range of custom paper/card dimensions
pub const CUSTOM_DIMENSION_RANGE: (f64, f64) = (1.0, 1200.0);
