//! Facet-derived types for SVG serialization.
//!
//! This crate provides the strongly-typed SVG elements that tickgrid writes:
//! a root `<svg>`, layer groups and paths. They serialize (and parse back)
//! through `facet-xml`.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::{Group, Path, Svg, SvgNode};
//!
//! let svg = Svg {
//!     version: Some("1.1".to_string()),
//!     view_box: Some("0 0 210 297".to_string()),
//!     children: vec![SvgNode::G(Group {
//!         id: Some("layer1".to_string()),
//!         children: vec![SvgNode::Path(Path {
//!             d: Some("M 0 0 L 5 0".to_string()),
//!             ..Default::default()
//!         })],
//!     })],
//!     ..Default::default()
//! };
//!
//! let options = facet_svg::facet_xml::SerializeOptions::default();
//! let xml = facet_svg::facet_xml::to_string_with_options(&svg, &options).unwrap();
//! assert!(xml.contains("M 0 0 L 5 0"));
//! ```

use facet::Facet;
use facet_xml as xml;

pub mod style;

pub use style::{PathStyle, StyleParseError};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub version: Option<String>,
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

impl Svg {
    /// Walk every path in document order, descending into groups.
    pub fn paths(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        collect_paths(&self.children, &mut out);
        out
    }
}

fn collect_paths<'a>(children: &'a [SvgNode], out: &mut Vec<&'a Path>) {
    for child in children {
        match child {
            SvgNode::G(g) => collect_paths(&g.children, out),
            SvgNode::Path(p) => out.push(p),
        }
    }
}

/// Any SVG node we emit
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "path")]
    Path(Path),
}

/// SVG group element (`<g>`), used as a drawing layer
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub style: Option<String>,
}

// Re-export facet_xml for convenience
pub use facet_xml;
