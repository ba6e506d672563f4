// SPDX-License-Identifier: MIT
//
// Color spaces for palette synthesis: gamma-encoded sRGB, Oklab, and OKLCH.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   hex text → sRGB ↔ linear sRGB ↔ LMS ↔ Oklab ↔ OKLCH → oklch() text
//
// Linear sRGB and LMS are intermediates only and never leave this module.
// None of the conversions clamp: an OKLCH color outside the sRGB gamut
// converts to sRGB channels outside [0, 1], which is exactly what the gamut
// check in `gamut.rs` looks for.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorFormatError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A gamma-encoded sRGB color, the device color of a palette.
///
/// Channels are nominally in `[0.0, 1.0]`. Values parsed from hex always
/// are; values produced by [`Oklab::to_rgb`] may fall outside that range
/// when the source color is not displayable.
///
/// # Examples
///
/// ```
/// use shade_color::Rgb;
///
/// let seed = Rgb::hex("#6753ff").unwrap();
/// let lch = seed.to_oklch();
/// assert!(lch.h > 270.0 && lch.h < 290.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parse a hex color code.
    ///
    /// Accepts `RGB`, `RGBA`, `RRGGBB`, and `RRGGBBAA`, with or without a
    /// leading `#`, in either case. Short forms double each digit. The alpha
    /// digits are validated but not kept.
    ///
    /// # Errors
    ///
    /// Returns [`ColorFormatError`] if the digit count is not 3, 4, 6, or 8,
    /// or if any character is not a hex digit.
    pub fn hex(s: &str) -> Result<Self, ColorFormatError> {
        parse_hex(s)
    }

    /// Convert to Oklab.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (l, a, b) = linear_srgb_to_oklab(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        );
        Oklab { l, a, b }
    }

    /// Convert to OKLCH.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_oklch()
    }

    /// Whether every channel lies in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn in_gamut(self) -> bool {
        crate::gamut::is_in_gamut(self)
    }

    /// Convert to 8-bit sRGB, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Format as `#rrggbb`, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Oklab ───────────────────────────────────────────────────────────────────

/// A color in Björn Ottosson's Oklab space.
///
/// `l` is perceptual lightness (0.0 black, 1.0 white for displayable
/// colors); `a` and `b` are the green–red and blue–yellow opponent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert to gamma-encoded sRGB. The result is not clamped.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = oklab_to_linear_srgb(self.l, self.a, self.b);
        Rgb::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    /// Convert to the cylindrical OKLCH form.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = normalize_hue(self.b.atan2(self.a).to_degrees());
        Oklch { l: self.l, c, h }
    }
}

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A color in OKLCH, the cylindrical form of Oklab.
///
/// - `l`: lightness, same as [`Oklab::l`]
/// - `c`: chroma, the length of `(a, b)`; 0.0 is gray, ~0.37 is the most
///   vivid sRGB can show
/// - `h`: hue angle in degrees, `[0.0, 360.0)`
///
/// `Display` renders the CSS color function used for every palette entry:
///
/// ```
/// use shade_color::Oklch;
///
/// let c = Oklch::new(0.624, 0.153, 271.2);
/// assert_eq!(c.to_string(), "oklch(62.4% 0.153 271.2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Return a copy with the given chroma, keeping lightness and hue.
    #[inline]
    #[must_use]
    pub const fn with_chroma(self, c: f64) -> Self {
        Self { c, ..self }
    }

    /// Convert to the Cartesian Oklab form.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let h_rad = self.h.to_radians();
        Oklab {
            l: self.l,
            a: self.c * h_rad.cos(),
            b: self.c * h_rad.sin(),
        }
    }

    /// Convert to gamma-encoded sRGB. The result is not clamped.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        self.to_oklab().to_rgb()
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.1}% {:.3} {:.1})", self.l * 100.0, self.c, self.h)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<Rgb> for Oklab {
    fn from(rgb: Rgb) -> Self {
        rgb.to_oklab()
    }
}

impl From<Oklab> for Rgb {
    fn from(lab: Oklab) -> Self {
        lab.to_rgb()
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        lab.to_oklch()
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        lch.to_oklab()
    }
}

impl From<Rgb> for Oklch {
    fn from(rgb: Rgb) -> Self {
        rgb.to_oklch()
    }
}

impl From<Oklch> for Rgb {
    fn from(lch: Oklch) -> Self {
        lch.to_rgb()
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Oklab math as published by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// The matrices are domain constants and must not be re-derived.

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360.0.
    if h >= 360.0 {
        0.0
    } else {
        // + 0.0 turns -0.0 into 0.0
        h + 0.0
    }
}

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    // Linear sRGB → LMS
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    // Cube root (LMS → Oklab intermediate)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // Oklab intermediate → Oklab
    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Rgb, ColorFormatError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let len = s.chars().count();
    if !matches!(len, 3 | 4 | 6 | 8) {
        return Err(ColorFormatError::UnexpectedLength(len));
    }

    let mut digits = [0u8; 8];
    for (slot, ch) in digits.iter_mut().zip(s.chars()) {
        *slot = parse_hex_digit(ch).ok_or(ColorFormatError::MalformedHex(ch))?;
    }

    // Digits past the third channel are alpha, which palettes don't use.
    let [r, g, b] = if len <= 4 {
        [digits[0], digits[1], digits[2]].map(|d| d << 4 | d)
    } else {
        [
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
        ]
    };

    Ok(Rgb::from_rgb8(r, g, b))
}

#[inline]
fn parse_hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
