//! Ramp shaping: the lightness curve and the chroma rules.
//!
//! A ramp is a run of shades that share one hue and vary mostly in
//! lightness. Lightness follows a smoothstep curve between the side's
//! endpoints, which spends more steps near the extremes where small
//! differences are easiest to see. Chroma comes from the seed, pulled into
//! a usable band and softened at both ends of the ramp.

/// Seeds below this chroma count as gray.
pub const LOW_CHROMA_THRESHOLD: f64 = 0.03;

/// Chroma given to gray seeds when the boost is on.
pub const BOOSTED_CHROMA: f64 = 0.06;

/// Seeds above this chroma are capped.
pub const HIGH_CHROMA_THRESHOLD: f64 = 0.2;

/// The chroma cap for vivid seeds.
pub const CHROMA_CAP: f64 = 0.18;

/// Chroma multiplier for the first and last shade of a ramp.
pub const EDGE_DAMPING: f64 = 0.6;

/// Upper bound for any shade's chroma before gamut mapping.
pub const MAX_CHROMA: f64 = 0.37;

/// The smoothstep polynomial `t²(3 − 2t)`.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * 2.0f64.mul_add(-t, 3.0)
}

/// Linear interpolation from `start` (at `t = 0`) to `end` (at `t = 1`).
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    (end - start).mul_add(t, start)
}

/// Sample `steps` lightness values from `start` to `end` along a
/// smoothstep curve. Both endpoints are included.
///
/// ```
/// use shade_palette::ramp::lightness_curve;
///
/// let curve = lightness_curve(3, 0.0, 1.0);
/// assert_eq!(curve, vec![0.0, 0.5, 1.0]);
/// ```
#[must_use]
pub fn lightness_curve(steps: usize, start: f64, end: f64) -> Vec<f64> {
    if steps < 2 {
        return if steps == 1 { vec![start] } else { Vec::new() };
    }

    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| lerp(start, end, smoothstep(i as f64 / last)))
        .collect()
}

/// Derive the ramp's chroma from the seed's.
///
/// Gray seeds get [`BOOSTED_CHROMA`] when `boost` is on, vivid seeds are
/// capped at [`CHROMA_CAP`], everything else passes through.
#[must_use]
pub fn target_chroma(seed_chroma: f64, boost: bool) -> f64 {
    if boost && seed_chroma < LOW_CHROMA_THRESHOLD {
        BOOSTED_CHROMA
    } else if seed_chroma > HIGH_CHROMA_THRESHOLD {
        CHROMA_CAP
    } else {
        seed_chroma
    }
}

/// Chroma multiplier for shade `index` of a ramp with `len` shades.
#[inline]
#[must_use]
pub const fn edge_damping(index: usize, len: usize) -> f64 {
    if index == 0 || index + 1 == len {
        EDGE_DAMPING
    } else {
        1.0
    }
}

/// The chroma shade `index` starts from, before gamut mapping.
#[must_use]
pub fn shade_chroma(target: f64, index: usize, len: usize) -> f64 {
    (target * edge_damping(index, len)).clamp(0.0, MAX_CHROMA)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn smoothstep_fixed_points() {
        assert!(approx_eq(smoothstep(0.0), 0.0));
        assert!(approx_eq(smoothstep(0.5), 0.5));
        assert!(approx_eq(smoothstep(1.0), 1.0));
        assert!(approx_eq(smoothstep(0.25), 0.156_25));
    }

    #[test]
    fn curve_hits_endpoints() {
        let light = lightness_curve(12, 0.99, 0.25);
        assert_eq!(light.len(), 12);
        assert!(approx_eq(light[0], 0.99));
        assert!(approx_eq(light[11], 0.25));

        let dark = lightness_curve(12, 0.14, 0.93);
        assert!(approx_eq(dark[0], 0.14));
        assert!(approx_eq(dark[11], 0.93));
    }

    #[test]
    fn curve_is_monotonic() {
        let light = lightness_curve(24, 0.99, 0.25);
        assert!(light.windows(2).all(|w| w[0] > w[1]), "{light:?}");

        let dark = lightness_curve(24, 0.14, 0.93);
        assert!(dark.windows(2).all(|w| w[0] < w[1]), "{dark:?}");
    }

    #[test]
    fn curve_is_symmetric() {
        let curve = lightness_curve(7, 0.0, 1.0);
        for i in 0..7 {
            assert!(approx_eq(curve[i] + curve[6 - i], 1.0), "{curve:?}");
        }
    }

    #[test]
    fn curve_degenerate_lengths() {
        assert!(lightness_curve(0, 0.2, 0.8).is_empty());
        assert_eq!(lightness_curve(1, 0.2, 0.8), vec![0.2]);
        assert_eq!(lightness_curve(2, 0.2, 0.8), vec![0.2, 0.8]);
    }

    #[test]
    fn gray_seeds_are_boosted() {
        assert_eq!(target_chroma(0.0, true), BOOSTED_CHROMA);
        assert_eq!(target_chroma(0.029, true), BOOSTED_CHROMA);
        assert_eq!(target_chroma(0.03, true), 0.03);
    }

    #[test]
    fn boost_can_be_disabled() {
        assert_eq!(target_chroma(0.0, false), 0.0);
        assert_eq!(target_chroma(0.01, false), 0.01);
    }

    #[test]
    fn vivid_seeds_are_capped() {
        assert_eq!(target_chroma(0.2, true), 0.2);
        assert_eq!(target_chroma(0.21, true), CHROMA_CAP);
        assert_eq!(target_chroma(0.3, false), CHROMA_CAP);
    }

    #[test]
    fn moderate_seeds_pass_through() {
        assert_eq!(target_chroma(0.12, true), 0.12);
    }

    #[test]
    fn edges_are_damped() {
        assert_eq!(edge_damping(0, 12), EDGE_DAMPING);
        assert_eq!(edge_damping(11, 12), EDGE_DAMPING);
        assert_eq!(edge_damping(1, 12), 1.0);
        assert_eq!(edge_damping(10, 12), 1.0);
        assert_eq!(edge_damping(0, 2), EDGE_DAMPING);
        assert_eq!(edge_damping(1, 2), EDGE_DAMPING);
    }

    #[test]
    fn shade_chroma_clamps() {
        assert!(approx_eq(shade_chroma(0.18, 0, 12), 0.108));
        assert!(approx_eq(shade_chroma(0.18, 5, 12), 0.18));
        assert_eq!(shade_chroma(0.5, 5, 12), MAX_CHROMA);
        assert_eq!(shade_chroma(-0.1, 5, 12), 0.0);
    }
}
