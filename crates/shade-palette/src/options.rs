//! Synthesis options.
//!
//! | Option             | Type    | Default | Notes                          |
//! |--------------------|---------|---------|--------------------------------|
//! | `steps`            | integer | 12      | clamped to 2..=24              |
//! | `mode`             | enum    | both    | `light`, `dark`, `both`        |
//! | `gamut`            | enum    | srgb    | `srgb`, `p3` (sRGB math only)  |
//! | `boost_low_chroma` | bool    | true    | lift near-gray seeds to 0.06 C |
//!
//! Modes and gamuts parse from text case-insensitively, so the same values
//! work from the command line and from configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Fewest shades a ramp can have.
pub const MIN_STEPS: usize = 2;

/// Most shades a ramp can have.
pub const MAX_STEPS: usize = 24;

/// Shades per ramp when nothing else is requested.
pub const DEFAULT_STEPS: usize = 12;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the two ramps a palette can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// For light backgrounds: runs from near-white down to a dim shade.
    Light,
    /// For dark backgrounds: runs from near-black up to a bright shade.
    Dark,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// The lightness of the first and last shade, in ramp order.
    ///
    /// Index order follows visual weight in each mode: step 1 is the
    /// background-most shade on either side.
    #[must_use]
    pub const fn lightness_range(self) -> (f64, f64) {
        match self {
            Self::Light => (0.99, 0.25),
            Self::Dark => (0.14, 0.93),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which sides a palette includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Light,
    Dark,
    #[default]
    Both,
}

impl Mode {
    /// Whether a palette in this mode carries the given side.
    #[must_use]
    pub const fn includes(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Self::Both, _) | (Self::Light, Side::Light) | (Self::Dark, Side::Dark)
        )
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "both" => Ok(Self::Both),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Both => "both",
        })
    }
}

// ---------------------------------------------------------------------------
// Gamut
// ---------------------------------------------------------------------------

/// The display gamut a palette targets.
///
/// Only sRGB bounds are ever checked. `DisplayP3` is accepted so callers
/// can state intent, but it produces the same palette as `Srgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gamut {
    #[default]
    Srgb,
    DisplayP3,
}

impl FromStr for Gamut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" => Ok(Self::Srgb),
            "p3" | "display-p3" => Ok(Self::DisplayP3),
            _ => Err(Error::UnknownGamut(s.to_string())),
        }
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Srgb => "srgb",
            Self::DisplayP3 => "p3",
        })
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Everything [`synthesize`](crate::synthesize) takes besides the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Requested shades per ramp. Out-of-range values are clamped, see
    /// [`Options::step_count`].
    pub steps: usize,
    pub mode: Mode,
    pub gamut: Gamut,
    /// Give near-gray seeds a modest chroma instead of a gray palette.
    pub boost_low_chroma: bool,
}

impl Options {
    #[must_use]
    pub const fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    #[must_use]
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub const fn with_gamut(self, gamut: Gamut) -> Self {
        Self { gamut, ..self }
    }

    #[must_use]
    pub const fn with_boost_low_chroma(self, boost_low_chroma: bool) -> Self {
        Self {
            boost_low_chroma,
            ..self
        }
    }

    /// The number of shades each ramp actually gets.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.clamp(MIN_STEPS, MAX_STEPS)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            mode: Mode::default(),
            gamut: Gamut::default(),
            boost_low_chroma: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.steps, 12);
        assert_eq!(opts.step_count(), 12);
        assert_eq!(opts.mode, Mode::Both);
        assert_eq!(opts.gamut, Gamut::Srgb);
        assert!(opts.boost_low_chroma);
    }

    #[test]
    fn step_count_clamps() {
        let opts = Options::default();
        assert_eq!(opts.with_steps(0).step_count(), 2);
        assert_eq!(opts.with_steps(1).step_count(), 2);
        assert_eq!(opts.with_steps(2).step_count(), 2);
        assert_eq!(opts.with_steps(24).step_count(), 24);
        assert_eq!(opts.with_steps(25).step_count(), 24);
        assert_eq!(opts.with_steps(usize::MAX).step_count(), 24);
    }

    #[test]
    fn builders_touch_one_field() {
        let opts = Options::default()
            .with_mode(Mode::Dark)
            .with_gamut(Gamut::DisplayP3)
            .with_boost_low_chroma(false);
        assert_eq!(opts.steps, DEFAULT_STEPS);
        assert_eq!(opts.mode, Mode::Dark);
        assert_eq!(opts.gamut, Gamut::DisplayP3);
        assert!(!opts.boost_low_chroma);
    }

    #[test]
    fn mode_includes() {
        assert!(Mode::Both.includes(Side::Light));
        assert!(Mode::Both.includes(Side::Dark));
        assert!(Mode::Light.includes(Side::Light));
        assert!(!Mode::Light.includes(Side::Dark));
        assert!(!Mode::Dark.includes(Side::Light));
        assert!(Mode::Dark.includes(Side::Dark));
    }

    #[test]
    fn mode_parse() {
        assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!("DARK".parse::<Mode>(), Ok(Mode::Dark));
        assert_eq!(" Both ".parse::<Mode>(), Ok(Mode::Both));
        assert_eq!(
            "dim".parse::<Mode>(),
            Err(Error::UnknownMode("dim".to_string()))
        );
    }

    #[test]
    fn mode_display_roundtrips() {
        for mode in [Mode::Light, Mode::Dark, Mode::Both] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn gamut_parse() {
        assert_eq!("srgb".parse::<Gamut>(), Ok(Gamut::Srgb));
        assert_eq!("P3".parse::<Gamut>(), Ok(Gamut::DisplayP3));
        assert_eq!("display-p3".parse::<Gamut>(), Ok(Gamut::DisplayP3));
        assert_eq!(
            "rec2020".parse::<Gamut>(),
            Err(Error::UnknownGamut("rec2020".to_string()))
        );
    }

    #[test]
    fn side_ranges() {
        assert_eq!(Side::Light.lightness_range(), (0.99, 0.25));
        assert_eq!(Side::Dark.lightness_range(), (0.14, 0.93));
        assert_eq!(Side::Light.to_string(), "light");
        assert_eq!(Side::Dark.to_string(), "dark");
    }
}
