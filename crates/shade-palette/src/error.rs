//! Errors surfaced by palette synthesis and option parsing.

use std::fmt;

use shade_color::ColorFormatError;

/// Everything that can go wrong in this crate.
///
/// Synthesis itself has exactly one failure, [`Error::InvalidInput`]: every
/// later step clamps or falls back instead of failing. The remaining
/// variants come from parsing option values out of text (command line,
/// configuration).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The seed is not a valid hex color code.
    InvalidInput {
        seed: String,
        source: ColorFormatError,
    },

    /// A mode other than `light`, `dark`, or `both`.
    UnknownMode(String),

    /// A gamut other than `srgb` or `p3`.
    UnknownGamut(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { seed, source } => {
                write!(f, "invalid seed color {seed:?}: {source}")
            }
            Self::UnknownMode(mode) => {
                write!(f, "unknown mode {mode:?}, expected light, dark, or both")
            }
            Self::UnknownGamut(gamut) => {
                write!(f, "unknown gamut {gamut:?}, expected srgb or p3")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput { source, .. } => Some(source),
            Self::UnknownMode(_) | Self::UnknownGamut(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn invalid_input_chains_parse_error() {
        let err = Error::InvalidInput {
            seed: "#12".to_string(),
            source: ColorFormatError::UnexpectedLength(2),
        };
        assert_eq!(
            err.to_string(),
            "invalid seed color \"#12\": hex color should have 3, 4, 6, or 8 digits but has 2"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn option_errors_have_no_source() {
        assert!(Error::UnknownMode("dim".to_string()).source().is_none());
        assert!(Error::UnknownGamut("rec2020".to_string()).source().is_none());
    }
}
