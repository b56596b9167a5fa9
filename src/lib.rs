//! Registration ticks for printing a grid of cards on one sheet.
//!
//! Cards of one size are tiled across a page, the whole grid optionally
//! shifted and rotated about the page centre. Every card that lies fully
//! on the page is kept, a cross-shaped tick is placed at each grid vertex
//! those cards share, and the ticks are exported as SVG in millimetres.
//!
//! ```
//! use tickgrid::{LayoutParams, compute_layout, export_svg};
//!
//! let params = LayoutParams {
//!     paper: "A4".to_string(),
//!     ..LayoutParams::default()
//! };
//! let layout = compute_layout(&params).unwrap();
//! assert_eq!(layout.registry.len(), 5);
//! assert_eq!(layout.ticks.len(), 12);
//!
//! let svg = export_svg(layout.setup.paper, &layout.segments).unwrap();
//! assert!(svg.contains("210mm"));
//! ```

pub mod defaults;
pub mod errors;
pub mod export;
pub mod layout;
pub mod log;
pub mod params;
pub mod presets;
pub mod render;
pub mod schedule;
pub mod session;
pub mod types;

pub use errors::{ConfigError, ExportError, PresetKind};
pub use export::{DEFAULT_FILENAME, export_svg};
pub use layout::{CardRegistry, LayoutResult, LineSegment, Tick, compute_layout};
pub use params::{KeyValueParams, LayoutParams, PageSetup, ParameterSource};
pub use render::{DrawingSurface, RecordingSurface, render_layout};
pub use schedule::Debouncer;
pub use session::LayoutSession;
pub use glam::DVec2;
pub use types::{CardSize, Degrees, GridCoord, Mm, PaperSize, Rgb, Size};
