//! Layout parameters: reading named values and resolving them to sizes.
//!
//! An outside parameter provider hands us strings keyed by id (`papersize`,
//! `cardType`, `angle`, ...). [`LayoutParams`] is the parsed snapshot and
//! [`PageSetup`] the validated form the layout engine consumes.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use glam::DVec2;

use crate::defaults::{
    ANGLE_RANGE, CUSTOM_DIMENSION_RANGE, DEFAULT_CARD, DEFAULT_CUSTOM_CARD, DEFAULT_CUSTOM_PAPER,
    DEFAULT_PAPER, OFFSET_RANGE,
};
use crate::errors::{ConfigError, PresetKind};
use crate::presets::SizeChoice;
use crate::types::{CardSize, Degrees, Mm, NumericError, PaperSize, Size};

/// Parameter ids understood by [`LayoutParams::from_source`]
pub mod ids {
    pub const PAPER_SIZE: &str = "papersize";
    pub const CARD_TYPE: &str = "cardType";
    pub const ANGLE: &str = "angle";
    pub const X_OFFSET: &str = "xOffset";
    pub const Y_OFFSET: &str = "yOffset";
    pub const CUSTOM_PAPER_WIDTH: &str = "customPaperWidth";
    pub const CUSTOM_PAPER_HEIGHT: &str = "customPaperHeight";
    pub const CUSTOM_CARD_WIDTH: &str = "customCardWidth";
    pub const CUSTOM_CARD_HEIGHT: &str = "customCardHeight";

    pub const ALL: &[&str] = &[
        PAPER_SIZE,
        CARD_TYPE,
        ANGLE,
        X_OFFSET,
        Y_OFFSET,
        CUSTOM_PAPER_WIDTH,
        CUSTOM_PAPER_HEIGHT,
        CUSTOM_CARD_WIDTH,
        CUSTOM_CARD_HEIGHT,
    ];
}

/// Something that can answer "what is the current value of parameter `id`?"
pub trait ParameterSource {
    fn param(&self, id: &str) -> Option<&str>;
}

impl ParameterSource for HashMap<String, String> {
    fn param(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl ParameterSource for BTreeMap<String, String> {
    fn param(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// Ordered `key=value` pairs; later entries win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueParams {
    entries: Vec<(String, String)>,
}

impl KeyValueParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Parse one `key=value` item. Returns `None` if there is no `=`.
    pub fn parse_pair(item: &str) -> Option<(String, String)> {
        let (k, v) = item.split_once('=')?;
        Some((k.trim().to_string(), v.trim().to_string()))
    }

    /// Append every entry of `other`; its values win over earlier ones.
    pub fn merge(&mut self, other: KeyValueParams) {
        self.entries.extend(other.entries);
    }

    /// Keys in the order they were set, repeats included
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for KeyValueParams {
    type Err = ConfigError;

    /// One `key = value` per line; blank lines and `#` comments are skipped.
    /// Any other line without `=` is an error carrying its 1-based number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = KeyValueParams::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pair = KeyValueParams::parse_pair(line).ok_or_else(|| ConfigError::MalformedLine {
                line: idx + 1,
                text: line.to_string(),
            })?;
            params.entries.push(pair);
        }
        Ok(params)
    }
}

impl ParameterSource for KeyValueParams {
    fn param(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw parameter snapshot, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub paper: String,
    pub card: String,
    /// Degrees, `[-90, 90]`
    pub angle: f64,
    /// Millimetres, `[-100, 100]`
    pub x_offset: f64,
    pub y_offset: f64,
    pub custom_paper_width: f64,
    pub custom_paper_height: f64,
    pub custom_card_width: f64,
    pub custom_card_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            paper: DEFAULT_PAPER.to_string(),
            card: DEFAULT_CARD.to_string(),
            angle: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            custom_paper_width: DEFAULT_CUSTOM_PAPER.w.raw(),
            custom_paper_height: DEFAULT_CUSTOM_PAPER.h.raw(),
            custom_card_width: DEFAULT_CUSTOM_CARD.w.raw(),
            custom_card_height: DEFAULT_CUSTOM_CARD.h.raw(),
        }
    }
}

impl LayoutParams {
    /// Read every known id from `source`; missing ids keep their defaults.
    pub fn from_source(source: &impl ParameterSource) -> Result<Self, ConfigError> {
        let mut params = LayoutParams::default();
        if let Some(v) = source.param(ids::PAPER_SIZE) {
            params.paper = v.to_string();
        }
        if let Some(v) = source.param(ids::CARD_TYPE) {
            params.card = v.to_string();
        }
        read_number(source, ids::ANGLE, &mut params.angle)?;
        read_number(source, ids::X_OFFSET, &mut params.x_offset)?;
        read_number(source, ids::Y_OFFSET, &mut params.y_offset)?;
        read_number(source, ids::CUSTOM_PAPER_WIDTH, &mut params.custom_paper_width)?;
        read_number(source, ids::CUSTOM_PAPER_HEIGHT, &mut params.custom_paper_height)?;
        read_number(source, ids::CUSTOM_CARD_WIDTH, &mut params.custom_card_width)?;
        read_number(source, ids::CUSTOM_CARD_HEIGHT, &mut params.custom_card_height)?;
        Ok(params)
    }

    /// Resolved page size. Custom dimensions are only checked when selected.
    pub fn paper_size(&self) -> Result<PaperSize, ConfigError> {
        match SizeChoice::lookup(PresetKind::Paper, &self.paper)? {
            SizeChoice::Preset(p) => Ok(p.size),
            SizeChoice::Custom => Ok(Size {
                w: dimension(ids::CUSTOM_PAPER_WIDTH, self.custom_paper_width)?,
                h: dimension(ids::CUSTOM_PAPER_HEIGHT, self.custom_paper_height)?,
            }),
        }
    }

    pub fn card_size(&self) -> Result<CardSize, ConfigError> {
        match SizeChoice::lookup(PresetKind::Card, &self.card)? {
            SizeChoice::Preset(p) => Ok(p.size),
            SizeChoice::Custom => Ok(Size {
                w: dimension(ids::CUSTOM_CARD_WIDTH, self.custom_card_width)?,
                h: dimension(ids::CUSTOM_CARD_HEIGHT, self.custom_card_height)?,
            }),
        }
    }

    /// Validate everything and produce the engine's input.
    pub fn resolve(&self) -> Result<PageSetup, ConfigError> {
        let paper = self.paper_size()?;
        let card = self.card_size()?;
        let angle = in_range(ids::ANGLE, self.angle, ANGLE_RANGE)?;
        let dx = in_range(ids::X_OFFSET, self.x_offset, OFFSET_RANGE)?;
        let dy = in_range(ids::Y_OFFSET, self.y_offset, OFFSET_RANGE)?;
        Ok(PageSetup {
            paper,
            card,
            angle: Degrees(angle),
            offset: DVec2::new(dx, dy),
        })
    }
}

/// Validated layout input: positive sizes, finite angle and offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub paper: PaperSize,
    pub card: CardSize,
    pub angle: Degrees,
    /// Translation of the whole grid before rotation, mm
    pub offset: DVec2,
}

impl PageSetup {
    /// Unrotated, unshifted setup; handy for tests and previews.
    pub fn new(paper: PaperSize, card: CardSize) -> Self {
        PageSetup {
            paper,
            card,
            angle: Degrees::ZERO,
            offset: DVec2::ZERO,
        }
    }

    pub fn with_angle(mut self, angle: Degrees) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = DVec2::new(dx, dy);
        self
    }
}

fn read_number(
    source: &impl ParameterSource,
    name: &'static str,
    slot: &mut f64,
) -> Result<(), ConfigError> {
    if let Some(raw) = source.param(name) {
        *slot = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        })?;
    }
    Ok(())
}

fn finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { name })
    }
}

fn in_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, ConfigError> {
    let value = finite(name, value)?;
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { name, value, min, max });
    }
    Ok(value)
}

fn dimension(name: &'static str, value: f64) -> Result<Mm, ConfigError> {
    let mm = Mm::try_positive(value).map_err(|e| match e {
        NumericError::NaN | NumericError::Infinite => ConfigError::NotFinite { name },
        NumericError::NotPositive => ConfigError::NonPositive { name, value },
    })?;
    in_range(name, mm.raw(), CUSTOM_DIMENSION_RANGE).map(Mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_resolve_to_a3_and_uk_card() {
        let setup = LayoutParams::default().resolve().unwrap();
        assert_eq!(setup.paper, Size::mm(297.0, 420.0));
        assert_eq!(setup.card, Size::mm(85.0, 55.0));
        assert_eq!(setup.angle, Degrees::ZERO);
        assert_eq!(setup.offset, DVec2::ZERO);
    }

    #[test]
    fn from_source_reads_every_id() {
        let params = LayoutParams::from_source(&source(&[
            ("papersize", "A4"),
            ("cardType", "Postcard A6"),
            ("angle", "15"),
            ("xOffset", "-4.5"),
            ("yOffset", " 2 "),
        ]))
        .unwrap();
        let setup = params.resolve().unwrap();
        assert_eq!(setup.paper, Size::mm(210.0, 297.0));
        assert_eq!(setup.card, Size::mm(148.0, 105.0));
        assert_eq!(setup.angle, Degrees(15.0));
        assert_eq!(setup.offset, DVec2::new(-4.5, 2.0));
    }

    #[test]
    fn custom_dimensions_only_apply_when_selected() {
        let mut params = LayoutParams {
            custom_paper_width: 0.0,
            ..LayoutParams::default()
        };
        // A preset is selected, so the bad custom width is never looked at.
        assert!(params.resolve().is_ok());

        params.paper = "Custom".to_string();
        assert_eq!(
            params.resolve(),
            Err(ConfigError::NonPositive {
                name: ids::CUSTOM_PAPER_WIDTH,
                value: 0.0
            })
        );
    }

    #[test]
    fn custom_card_is_resolved_from_its_own_ids() {
        let params = LayoutParams::from_source(&source(&[
            ("cardType", "Custom"),
            ("customCardWidth", "50"),
            ("customCardHeight", "30"),
        ]))
        .unwrap();
        assert_eq!(params.card_size().unwrap(), Size::mm(50.0, 30.0));
    }

    #[test]
    fn negative_custom_height_is_rejected() {
        let params = LayoutParams {
            card: "custom".to_string(),
            custom_card_height: -10.0,
            ..LayoutParams::default()
        };
        assert!(matches!(
            params.resolve(),
            Err(ConfigError::NonPositive { name: "customCardHeight", .. })
        ));
    }

    #[test]
    fn custom_dimension_checks_finiteness_before_sign() {
        let check = |width: f64| {
            LayoutParams {
                card: "Custom".to_string(),
                custom_card_width: width,
                ..LayoutParams::default()
            }
            .card_size()
        };
        let not_finite = Err(ConfigError::NotFinite { name: ids::CUSTOM_CARD_WIDTH });
        assert_eq!(check(f64::NAN), not_finite);
        assert_eq!(check(f64::NEG_INFINITY), not_finite);
        assert_eq!(
            check(0.0),
            Err(ConfigError::NonPositive { name: ids::CUSTOM_CARD_WIDTH, value: 0.0 })
        );
        assert!(matches!(check(0.5), Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn unparsable_number_is_reported_with_its_text() {
        let err = LayoutParams::from_source(&source(&[("angle", "steep")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "angle",
                value: "steep".to_string()
            }
        );
    }

    #[test]
    fn angle_and_offsets_are_range_checked() {
        let params = LayoutParams {
            angle: 91.0,
            ..LayoutParams::default()
        };
        assert!(matches!(params.resolve(), Err(ConfigError::OutOfRange { name: "angle", .. })));

        let params = LayoutParams {
            y_offset: -100.5,
            ..LayoutParams::default()
        };
        assert!(matches!(params.resolve(), Err(ConfigError::OutOfRange { name: "yOffset", .. })));

        let params = LayoutParams {
            x_offset: f64::NAN,
            ..LayoutParams::default()
        };
        assert_eq!(params.resolve(), Err(ConfigError::NotFinite { name: "xOffset" }));
    }

    #[test]
    fn key_value_text_later_entries_win() {
        let kv: KeyValueParams = "# layout\npapersize = A5\n\nangle=10\npapersize=A6\n"
            .parse()
            .unwrap();
        assert_eq!(kv.len(), 3);
        assert_eq!(kv.param("papersize"), Some("A6"));
        assert_eq!(kv.param("angle"), Some("10"));
        assert_eq!(kv.param("xOffset"), None);
    }

    #[test]
    fn parse_pair_requires_equals() {
        assert_eq!(
            KeyValueParams::parse_pair("angle=5"),
            Some(("angle".to_string(), "5".to_string()))
        );
        assert_eq!(KeyValueParams::parse_pair("angle"), None);
    }

    #[test]
    fn key_value_text_rejects_line_without_equals() {
        let err = "# layout\npapersize = A5\n\nangle 30\n"
            .parse::<KeyValueParams>()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MalformedLine {
                line: 4,
                text: "angle 30".to_string(),
            }
        );
    }
}
