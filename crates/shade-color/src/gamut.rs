// SPDX-License-Identifier: MIT
//
// sRGB gamut check and greedy chroma reduction.
//
// Mapping only ever lowers chroma. Lightness and hue pass through untouched,
// so every shade of a ramp keeps the hue of its seed even when the most
// vivid version of that shade is not displayable.

use tracing::trace;

use crate::color::{Oklch, Rgb};

/// How many times [`map_to_gamut`] shrinks chroma before giving up.
pub const MAX_ATTEMPTS: usize = 6;

/// The factor chroma is multiplied by on each attempt.
pub const CHROMA_DECAY: f64 = 0.85;

/// Whether all three channels lie in `[0.0, 1.0]`, inclusive.
#[must_use]
pub fn is_in_gamut(rgb: Rgb) -> bool {
    [rgb.r, rgb.g, rgb.b]
        .iter()
        .all(|channel| (0.0..=1.0).contains(channel))
}

/// Reduce chroma until the color fits the sRGB gamut.
///
/// Starting from `color.c`, chroma is multiplied by [`CHROMA_DECAY`] and the
/// sRGB value recomputed, up to [`MAX_ATTEMPTS`] times. The search stops at
/// the first in-gamut result or once chroma is no longer positive.
///
/// Returns the final OKLCH color together with its (unclamped) sRGB value.
/// If every attempt is still out of gamut, the last one is returned as is:
/// callers always get a color, never an error.
///
/// ```
/// use shade_color::{Oklch, map_to_gamut};
///
/// let (mapped, rgb) = map_to_gamut(Oklch::new(0.6, 0.3, 150.0));
/// assert!(mapped.c < 0.3);
/// assert!(rgb.in_gamut());
/// ```
#[must_use]
pub fn map_to_gamut(color: Oklch) -> (Oklch, Rgb) {
    let mut chroma = color.c;
    let mut rgb = color.to_rgb();
    let mut attempts = 0;

    while !is_in_gamut(rgb) && chroma > 0.0 && attempts < MAX_ATTEMPTS {
        chroma *= CHROMA_DECAY;
        rgb = color.with_chroma(chroma).to_rgb();
        attempts += 1;
    }

    if !is_in_gamut(rgb) {
        trace!(
            l = color.l,
            c = color.c,
            h = color.h,
            final_c = chroma,
            "gamut mapping exhausted, keeping out-of-gamut color"
        );
    }

    (color.with_chroma(chroma), rgb)
}
