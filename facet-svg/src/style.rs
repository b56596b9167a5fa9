//! Inline `style` attribute for stroked paths.

use std::fmt;

/// Stroke-only styling written into a path's `style` attribute.
///
/// The field order of [`PathStyle::to_css`] is fixed so exported documents
/// are byte-stable.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: String,
    pub stroke_linecap: String,
    pub stroke_linejoin: String,
    pub stroke_opacity: f64,
}

impl Default for PathStyle {
    /// Thin solid black hairline, no fill.
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: "1px".to_string(),
            stroke_linecap: "butt".to_string(),
            stroke_linejoin: "miter".to_string(),
            stroke_opacity: 1.0,
        }
    }
}

/// Errors from parsing a style attribute
#[derive(Debug, Clone, PartialEq)]
pub enum StyleParseError {
    InvalidProperty(String),
    InvalidNumber(String),
}

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleParseError::InvalidProperty(p) => write!(f, "invalid style property: {}", p),
            StyleParseError::InvalidNumber(n) => write!(f, "invalid number in style: {}", n),
        }
    }
}

impl std::error::Error for StyleParseError {}

impl PathStyle {
    /// Serialize to a CSS declaration list without a trailing semicolon.
    pub fn to_css(&self) -> String {
        format!(
            "fill:{};stroke:{};stroke-width:{};stroke-linecap:{};stroke-linejoin:{};stroke-opacity:{}",
            self.fill,
            self.stroke,
            self.stroke_width,
            self.stroke_linecap,
            self.stroke_linejoin,
            self.stroke_opacity
        )
    }

    /// Parse a CSS declaration list such as `fill:none;stroke:#000000`.
    ///
    /// Properties that are absent keep their default value; unknown
    /// properties are ignored.
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        let mut style = PathStyle::default();

        for part in s.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (key, value) = part
                .split_once(':')
                .ok_or_else(|| StyleParseError::InvalidProperty(part.to_string()))?;
            let value = value.trim().to_string();

            match key.trim() {
                "fill" => style.fill = value,
                "stroke" => style.stroke = value,
                "stroke-width" => style.stroke_width = value,
                "stroke-linecap" => style.stroke_linecap = value,
                "stroke-linejoin" => style.stroke_linejoin = value,
                "stroke-opacity" => {
                    style.stroke_opacity = value
                        .parse()
                        .map_err(|_| StyleParseError::InvalidNumber(value.clone()))?;
                }
                _ => {}
            }
        }

        Ok(style)
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
