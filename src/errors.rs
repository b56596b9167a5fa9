//! Error types with rich diagnostics using miette
//!
//! Configuration problems are caught where parameters enter the system, so
//! layout code only ever sees positive, finite sizes.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Which preset table a name was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Paper,
    Card,
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetKind::Paper => write!(f, "paper size"),
            PresetKind::Card => write!(f, "card type"),
        }
    }
}

/// Errors raised while resolving layout parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown {kind}: {name:?}")]
    #[diagnostic(code(tickgrid::config::unknown_preset), help("expected one of: {known}"))]
    UnknownPreset {
        kind: PresetKind,
        name: String,
        known: String,
    },

    #[error("parameter `{name}` is not a number: {value:?}")]
    #[diagnostic(code(tickgrid::config::invalid_number))]
    InvalidNumber { name: &'static str, value: String },

    #[error("parameter `{name}` must be positive, got {value}")]
    #[diagnostic(
        code(tickgrid::config::non_positive),
        help("page and card dimensions are millimetres and must be greater than zero")
    )]
    NonPositive { name: &'static str, value: f64 },

    #[error("parameter `{name}` is NaN or infinite")]
    #[diagnostic(code(tickgrid::config::not_finite))]
    NotFinite { name: &'static str },

    #[error("parameter `{name}` = {value} is outside [{min}, {max}]")]
    #[diagnostic(code(tickgrid::config::out_of_range))]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("line {line} is not `key = value`: {text:?}")]
    #[diagnostic(
        code(tickgrid::config::malformed_line),
        help("blank lines and lines starting with `#` are ignored")
    )]
    MalformedLine { line: usize, text: String },
}

// ============================================================================
// Export Errors
// ============================================================================

/// Errors that occur while writing the vector document
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("XML serialization error: {message}")]
    #[diagnostic(code(tickgrid::export::serialize))]
    Serialize { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_lists_known_names_in_help() {
        let err = ConfigError::UnknownPreset {
            kind: PresetKind::Paper,
            name: "B5".to_string(),
            known: "A4, A3".to_string(),
        };
        assert_eq!(err.to_string(), "unknown paper size: \"B5\"");
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("expected one of: A4, A3"));
    }

    #[test]
    fn out_of_range_message() {
        let err = ConfigError::OutOfRange {
            name: "angle",
            value: 120.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(err.to_string(), "parameter `angle` = 120 is outside [-90, 90]");
    }

    #[test]
    fn malformed_line_names_line_and_code() {
        let err = ConfigError::MalformedLine {
            line: 3,
            text: "angle 30".to_string(),
        };
        assert_eq!(err.to_string(), "line 3 is not `key = value`: \"angle 30\"");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tickgrid::config::malformed_line"));
    }
}
