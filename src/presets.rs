//! Named paper and card sizes.
//!
//! Lookups accept the display label (`"Business Card UK (85x55mm)"`), the
//! short name (`"Business Card UK"`) or a slug (`"business-card-uk"`), all
//! case-insensitive.

use crate::errors::{ConfigError, PresetKind};
use crate::types::Size;

/// A named entry in a preset table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Short name, e.g. `"A4"` or `"Business Card UK"`
    pub name: &'static str,
    /// Label as shown in the parameter picker
    pub label: &'static str,
    pub size: Size,
}

impl Preset {
    const fn new(name: &'static str, label: &'static str, w: f64, h: f64) -> Self {
        Preset {
            name,
            label,
            size: Size::mm(w, h),
        }
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self.label.eq_ignore_ascii_case(query)
            || slug(self.name) == slug(query)
    }
}

/// ISO A-series pages, portrait
pub const PAPER_PRESETS: &[Preset] = &[
    Preset::new("A6", "A6", 105.0, 148.0),
    Preset::new("A5", "A5", 148.0, 210.0),
    Preset::new("A4", "A4", 210.0, 297.0),
    Preset::new("A3", "A3", 297.0, 420.0),
    Preset::new("A2", "A2", 420.0, 594.0),
    Preset::new("A1", "A1", 594.0, 841.0),
];

pub const CARD_PRESETS: &[Preset] = &[
    Preset::new("Business Card UK", "Business Card UK (85x55mm)", 85.0, 55.0),
    Preset::new("Business Card US", "Business Card US (89x51mm)", 89.0, 51.0),
    Preset::new("Business Card EU", "Business Card EU (85x54mm)", 85.0, 54.0),
    Preset::new("Postcard 6x4", "Postcard 6\"x4\"", 152.0, 102.0),
    Preset::new("Postcard A6", "Postcard A6", 148.0, 105.0),
];

/// Name that selects the custom width/height parameters instead of a preset
pub const CUSTOM: &str = "Custom";

/// Either a table entry or the user's own dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeChoice {
    Preset(&'static Preset),
    Custom,
}

impl SizeChoice {
    /// Look up `name` in the table for `kind`; `"Custom"` selects [`SizeChoice::Custom`].
    pub fn lookup(kind: PresetKind, name: &str) -> Result<SizeChoice, ConfigError> {
        if name.trim().eq_ignore_ascii_case(CUSTOM) {
            return Ok(SizeChoice::Custom);
        }
        let table = table(kind);
        table
            .iter()
            .find(|p| p.matches(name))
            .map(SizeChoice::Preset)
            .ok_or_else(|| ConfigError::UnknownPreset {
                kind,
                name: name.to_string(),
                known: known_names(table),
            })
    }
}

/// Preset table for a kind
pub fn table(kind: PresetKind) -> &'static [Preset] {
    match kind {
        PresetKind::Paper => PAPER_PRESETS,
        PresetKind::Card => CARD_PRESETS,
    }
}

fn known_names(table: &[Preset]) -> String {
    let mut names: Vec<&str> = table.iter().map(|p| p.label).collect();
    names.push(CUSTOM);
    names.join(", ")
}

/// Lowercase, alphanumerics only, runs of anything else collapsed to `-`.
fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in s.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
