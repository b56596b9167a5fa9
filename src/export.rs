//! SVG export of tick segments at physical page size
//!
//! The document's user units are millimetres: `width`/`height` carry an
//! `mm` suffix and the `viewBox` spans the page, so segment coordinates are
//! written unscaled.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Group, Path, PathStyle, SVG_NS, Svg, SvgNode, facet_xml};

use crate::errors::ExportError;
use crate::layout::LineSegment;
use crate::log;
use crate::types::PaperSize;

/// File name offered when saving the export
pub const DEFAULT_FILENAME: &str = "ticks.svg";

/// Build the SVG document tree for `segments` on a page of `paper`.
pub fn build_document(paper: PaperSize, segments: &[LineSegment]) -> Svg {
    let (w, h) = (fmt_mm(paper.w.raw()), fmt_mm(paper.h.raw()));
    let style = PathStyle::default().to_css();

    let paths = segments
        .iter()
        .map(|seg| {
            SvgNode::Path(Path {
                d: Some(path_data(seg)),
                style: Some(style.clone()),
            })
        })
        .collect();

    Svg {
        xmlns: Some(SVG_NS.to_string()),
        version: Some("1.1".to_string()),
        id: Some("ticks".to_string()),
        width: Some(format!("{w}mm")),
        height: Some(format!("{h}mm")),
        view_box: Some(format!("0 0 {w} {h}")),
        children: vec![SvgNode::G(Group {
            id: Some("layer1".to_string()),
            children: paths,
        })],
    }
}

/// Serialize `segments` as an SVG document sized to `paper`.
pub fn export_svg(paper: PaperSize, segments: &[LineSegment]) -> Result<String, ExportError> {
    let svg = build_document(paper, segments);
    let options = SerializeOptions {
        preserve_entities: true,
        ..Default::default()
    };
    let xml = facet_xml::to_string_with_options(&svg, &options).map_err(|e| {
        ExportError::Serialize {
            message: e.to_string(),
        }
    })?;
    log::debug!("exported {} paths on a {} page", segments.len(), paper);
    Ok(xml)
}

/// `M x1 y1 L x2 y2` in raw millimetres
fn path_data(seg: &LineSegment) -> String {
    format!(
        "M {} {} L {} {}",
        fmt_mm(seg.start.x),
        fmt_mm(seg.start.y),
        fmt_mm(seg.end.x),
        fmt_mm(seg.end.y)
    )
}

/// Shortest round-trip decimal; negative zero is written as `0`.
pub(crate) fn fmt_mm(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
