//! # shade-palette: brand palettes from one seed color
//!
//! Turns a single hex color into a light ramp and a dark ramp of OKLCH
//! shades that share the seed's hue, then renders them as CSS custom
//! properties, a utility-CSS theme preset, or JSON.
//!
//! # Architecture
//!
//! ```text
//! seed hex + Options
//!     │
//!     ▼
//! shade-color: parse hex, convert to OKLCH (hue, chroma)
//!     │
//!     ▼
//! ramp.rs:     smoothstep lightness curve, target chroma, edge damping
//!     │
//!     ▼
//! palette.rs:  one shade per step, gamut-mapped into sRGB
//!     │
//!     ├──▶ css.rs:    `--brand-N` variables per selector
//!     └──▶ preset.rs: theme.extend.colors + base variables by side
//! ```
//!
//! # Example
//!
//! ```
//! use shade_palette::{CssOptions, Options, render_css_variables, synthesize};
//!
//! let palette = synthesize("#6753ff", &Options::default().with_steps(4)).unwrap();
//! let css = render_css_variables(&palette, &CssOptions::default());
//! assert!(css.starts_with(":root {\n  --brand-1: oklch(99.0% "));
//! assert!(css.contains(".dark {"));
//! ```
//!
//! Synthesis is pure and deterministic: the same seed and options always
//! give the same text, and nothing is cached between calls.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Step indices are small; usize to f64 is exact.
#![allow(clippy::cast_precision_loss)]
// Lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod css;
pub mod error;
pub mod options;
pub mod palette;
pub mod preset;
pub mod ramp;

#[cfg(test)]
mod test_util;

pub use css::{CssOptions, render_css_variables};
pub use error::Error;
pub use options::{Gamut, Mode, Options, Side};
pub use palette::{Meta, Palette, Ramp, Shade, synthesize};
pub use preset::{PresetOptions, ThemePreset, render_theme_preset};
pub use shade_color::{Oklch, Rgb};
