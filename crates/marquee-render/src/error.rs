#![forbid(unsafe_code)]

//! Configuration errors.

use std::fmt;

use marquee_style::ParseColorError;

/// A configuration value the renderer refuses to guess about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Alignment other than `left`, `center` or `right`.
    UnknownAlign(String),
    /// Environment other than a terminal or `browser`.
    UnknownEnv(String),
    /// Color name that is not in the palette, a keyword, or hex.
    UnknownColor(String),
    /// A count that must not be negative was.
    Negative {
        /// Option name as the user spells it.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A count above what the renderer accepts.
    TooLarge {
        /// Option name as the user spells it.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Largest accepted value.
        max: usize,
    },
    /// `candy` only works as a foreground.
    CandyBackground,
    /// A gradient needs at least two stops.
    GradientTooShort(usize),
    /// Gradient stops must be concrete colors, not `candy` or `system`.
    GradientStop(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlign(value) => {
                write!(f, "unknown align {value:?} (expected left, center or right)")
            }
            Self::UnknownEnv(value) => {
                write!(f, "unknown env {value:?} (expected node or browser)")
            }
            Self::UnknownColor(value) => write!(f, "unknown color {value:?}"),
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::TooLarge { field, value, max } => {
                write!(f, "{field} must be at most {max}, got {value}")
            }
            Self::CandyBackground => f.write_str("candy cannot be used as a background"),
            Self::GradientTooShort(count) => {
                write!(f, "gradient needs at least two colors, got {count}")
            }
            Self::GradientStop(value) => {
                write!(f, "gradient color {value:?} is not a concrete color")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ParseColorError> for ConfigError {
    fn from(err: ParseColorError) -> Self {
        Self::UnknownColor(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigError::UnknownAlign("middle".into()).to_string(),
            "unknown align \"middle\" (expected left, center or right)"
        );
        assert_eq!(
            ConfigError::Negative {
                field: "letterSpacing",
                value: -2
            }
            .to_string(),
            "letterSpacing must not be negative, got -2"
        );
        assert_eq!(
            ConfigError::TooLarge {
                field: "lineHeight",
                value: 5000,
                max: 1000
            }
            .to_string(),
            "lineHeight must be at most 1000, got 5000"
        );
        assert_eq!(
            ConfigError::GradientTooShort(1).to_string(),
            "gradient needs at least two colors, got 1"
        );
    }

    #[test]
    fn color_parse_error_converts() {
        let err: ConfigError = ParseColorError("mauve".into()).into();
        assert_eq!(err, ConfigError::UnknownColor("mauve".into()));
    }
}
