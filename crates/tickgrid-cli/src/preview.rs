//! Raster preview: a `DrawingSurface` backed by a tiny-skia pixmap

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr, miette};
use tickgrid::render::{DrawingSurface, Stroke};
use tickgrid::{DVec2, Rgb};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Transform};

pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> miette::Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| miette!("cannot allocate a {width}x{height} preview"))?;
        Ok(PixmapSurface { pixmap })
    }

    pub fn save_png(&self, path: &Path) -> miette::Result<()> {
        self.pixmap
            .save_png(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing preview {}", path.display()))
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
}

impl DrawingSurface for PixmapSurface {
    fn size(&self) -> DVec2 {
        DVec2::new(self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn clear(&mut self, rgb: Rgb) {
        self.pixmap.fill(color(rgb));
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        // Zero-length paths have no bounds and yield None.
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color(stroke.color));
        paint.anti_alias = true;
        let skia_stroke = tiny_skia::Stroke {
            width: stroke.width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &skia_stroke, Transform::identity(), None);
    }
}
