//! Palette synthesis, from one seed color to light and dark ramps.
//!
//! The pipeline, per call:
//!
//! ```text
//! seed text ──► Rgb ──► Oklch ──► hue + target chroma
//!                                      │
//!                ┌─────────────────────┴──────────────────────┐
//!                ▼                                            ▼
//!   light ramp: L 0.99 → 0.25                    dark ramp: L 0.14 → 0.93
//!                │  smoothstep lightness, edge-damped chroma  │
//!                ▼                                            ▼
//!           map_to_gamut per shade                  map_to_gamut per shade
//!                └──────────────────────┬─────────────────────┘
//!                                       ▼
//!                          Palette { light?, dark?, meta }
//! ```
//!
//! Every shade of both ramps carries the seed's exact hue. Only lightness
//! and chroma vary.

use std::fmt;

use serde::{Serialize, Serializer};
use shade_color::{Oklch, Rgb, map_to_gamut};
use tracing::debug;

use crate::error::Error;
use crate::options::{Gamut, Options, Side};
use crate::ramp::{lightness_curve, shade_chroma, target_chroma};

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// One gamut-mapped entry of a ramp.
///
/// Displays (and serializes) as its `oklch()` color function, for example
/// `oklch(62.4% 0.153 271.2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    color: Oklch,
    rgb: Rgb,
}

impl Shade {
    /// Gamut-map `color` and keep the result.
    #[must_use]
    pub fn mapped(color: Oklch) -> Self {
        let (color, rgb) = map_to_gamut(color);
        Self { color, rgb }
    }

    /// The final OKLCH value, after any chroma reduction.
    #[must_use]
    pub const fn color(&self) -> Oklch {
        self.color
    }

    /// The sRGB value of [`Shade::color`]. Unclamped: if gamut mapping ran
    /// out of attempts, channels may lie outside `[0, 1]`.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[must_use]
    pub fn in_gamut(&self) -> bool {
        self.rgb.in_gamut()
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}

impl Serialize for Shade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Ramp
// ---------------------------------------------------------------------------

/// An ordered run of shades for one side of a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ramp {
    #[serde(rename = "brand")]
    shades: Vec<Shade>,
}

impl Ramp {
    pub(crate) const fn new(shades: Vec<Shade>) -> Self {
        Self { shades }
    }

    #[must_use]
    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    /// The `oklch()` strings of all shades, in ramp order.
    #[must_use]
    pub fn colors(&self) -> Vec<String> {
        self.shades.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shade> {
        self.shades.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shade> {
        self.shades.iter()
    }
}

impl<'a> IntoIterator for &'a Ramp {
    type Item = &'a Shade;
    type IntoIter = std::slice::Iter<'a, Shade>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Facts about the seed shared by every shade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Meta {
    /// The seed's OKLCH hue in degrees.
    pub hue: f64,
}

/// A synthesized palette: a light ramp, a dark ramp, or both.
///
/// Built once by [`synthesize`] and immutable afterwards. At least one
/// side is always present, and both sides have the same length.
///
/// Serializes as `{"light":{"brand":[...]},"dark":{"brand":[...]},"meta":{"hue":...}}`
/// with absent sides left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<Ramp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<Ramp>,
    meta: Meta,
}

impl Palette {
    pub(crate) const fn from_ramps(light: Option<Ramp>, dark: Option<Ramp>, hue: f64) -> Self {
        Self {
            light,
            dark,
            meta: Meta { hue },
        }
    }

    #[must_use]
    pub const fn light(&self) -> Option<&Ramp> {
        self.light.as_ref()
    }

    #[must_use]
    pub const fn dark(&self) -> Option<&Ramp> {
        self.dark.as_ref()
    }

    #[must_use]
    pub const fn side(&self, side: Side) -> Option<&Ramp> {
        match side {
            Side::Light => self.light(),
            Side::Dark => self.dark(),
        }
    }

    /// The present sides, light first.
    pub fn sides(&self) -> impl Iterator<Item = (Side, &Ramp)> {
        Side::ALL
            .into_iter()
            .filter_map(|side| self.side(side).map(|ramp| (side, ramp)))
    }

    #[must_use]
    pub const fn meta(&self) -> Meta {
        self.meta
    }

    /// The hue every shade shares.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.meta.hue
    }

    /// Shades per side, taken from the light side if present.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.light
            .as_ref()
            .or(self.dark.as_ref())
            .map_or(0, Ramp::len)
    }

    /// Pretty-printed JSON of the palette.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails, which plain strings and floats
    /// do not.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Generate a palette from a hex seed color.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `seed` is not a 3, 4, 6, or 8 digit
/// hex color. Nothing after parsing can fail.
///
/// # Examples
///
/// ```
/// use shade_palette::{Options, synthesize};
///
/// let palette = synthesize("#6753ff", &Options::default()).unwrap();
/// assert_eq!(palette.light().unwrap().len(), 12);
/// assert!(palette.dark().unwrap().colors()[0].starts_with("oklch(14.0% "));
/// ```
pub fn synthesize(seed: &str, options: &Options) -> Result<Palette, Error> {
    let seed_color = Rgb::hex(seed)
        .map_err(|source| Error::InvalidInput {
            seed: seed.to_string(),
            source,
        })?
        .to_oklch();

    let hue = seed_color.h;
    let steps = options.step_count();
    let chroma = target_chroma(seed_color.c, options.boost_low_chroma);

    if options.gamut == Gamut::DisplayP3 {
        debug!("display-p3 requested, shades are still mapped to sRGB bounds");
    }
    debug!(
        seed,
        hue,
        seed_chroma = seed_color.c,
        target_chroma = chroma,
        steps,
        mode = %options.mode,
        "synthesizing palette"
    );

    let ramp_for = |side: Side| {
        options
            .mode
            .includes(side)
            .then(|| build_ramp(side, steps, chroma, hue))
    };

    Ok(Palette::from_ramps(
        ramp_for(Side::Light),
        ramp_for(Side::Dark),
        hue,
    ))
}

fn build_ramp(side: Side, steps: usize, chroma: f64, hue: f64) -> Ramp {
    let (start, end) = side.lightness_range();
    let lightness = lightness_curve(steps, start, end);
    let len = lightness.len();

    let shades: Vec<Shade> = lightness
        .into_iter()
        .enumerate()
        .map(|(i, l)| Shade::mapped(Oklch::new(l, shade_chroma(chroma, i, len), hue)))
        .collect();

    let clipped = shades.iter().filter(|shade| !shade.in_gamut()).count();
    if clipped > 0 {
        debug!(%side, clipped, "some shades stayed outside sRGB after gamut mapping");
    }

    Ramp::new(shades)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
