//! Error types with diagnostics using miette
//!
//! Every error is a configuration error raised at construction or parse
//! time. Region queries themselves never fail.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Result alias used throughout the crate
pub type Result<T, E = PitchError> = std::result::Result<T, E>;

/// Errors raised while building a pitch configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PitchError {
    #[error("invalid configuration: {field} = {value} ({reason})")]
    #[diagnostic(
        code(pitchgeo::config::invalid),
        help("pitch sizes and scale factors must be finite and positive; marking overrides must be finite and non-negative")
    )]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid half selection: {value:?}")]
    #[diagnostic(
        code(pitchgeo::config::invalid_half_selection),
        help("choose `left`, `right`, or `both`")
    )]
    InvalidHalfSelection { value: String },

    #[error("invalid orientation: {value:?}")]
    #[diagnostic(
        code(pitchgeo::config::invalid_orientation),
        help("choose `horizontal` or `vertical`")
    )]
    InvalidOrientation { value: String },

    #[error("invalid color: {value:?}")]
    #[diagnostic(
        code(pitchgeo::theme::invalid_color),
        help("use `#rrggbb`, `#rrggbbaa`, `transparent` or a CSS color name")
    )]
    InvalidColor { value: String },

    #[error("invalid theme variant: {value:?}")]
    #[diagnostic(code(pitchgeo::theme::invalid_variant), help("choose `light` or `dark`"))]
    InvalidThemeVariant { value: String },

    #[error("invalid {kind}: {value:?}")]
    #[diagnostic(code(pitchgeo::figure::invalid_style))]
    InvalidStyle { kind: &'static str, value: String },
}

impl PitchError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: NumericError) -> Self {
        PitchError::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_message_names_field() {
        let err = PitchError::invalid("pitch_length", -1.0, NumericError::Negative);
        assert_eq!(
            err.to_string(),
            "invalid configuration: pitch_length = -1 (value is negative)"
        );
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = PitchError::InvalidHalfSelection {
            value: "middle".into(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("pitchgeo::config::invalid_half_selection"));
        assert!(err.help().is_some());
    }
}
