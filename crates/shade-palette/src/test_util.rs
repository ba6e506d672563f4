//! Fixed palettes for adapter tests.

use shade_color::Oklch;

use crate::palette::{Palette, Ramp, Shade};

/// A ramp at hue 250 from `(lightness, chroma)` pairs, all in sRGB gamut.
pub fn ramp(colors: &[(f64, f64)]) -> Ramp {
    Ramp::new(
        colors
            .iter()
            .map(|&(l, c)| Shade::mapped(Oklch::new(l, c, 250.0)))
            .collect(),
    )
}

/// Two steps per side. Formats as:
///
/// - light: `oklch(95.0% 0.020 250.0)`, `oklch(40.0% 0.100 250.0)`
/// - dark: `oklch(20.0% 0.030 250.0)`, `oklch(85.0% 0.050 250.0)`
pub fn two_sided() -> Palette {
    Palette::from_ramps(
        Some(ramp(&[(0.95, 0.02), (0.4, 0.1)])),
        Some(ramp(&[(0.2, 0.03), (0.85, 0.05)])),
        250.0,
    )
}

/// Same dark side as [`two_sided`], no light side.
pub fn dark_only() -> Palette {
    Palette::from_ramps(None, Some(ramp(&[(0.2, 0.03), (0.85, 0.05)])), 250.0)
}
