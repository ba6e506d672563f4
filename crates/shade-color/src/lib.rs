// SPDX-License-Identifier: MIT
//
// shade-color: the color math underneath shade.
//
// Three pure layers, leaves first:
//
//   color.rs  sRGB ↔ linear sRGB ↔ Oklab ↔ OKLCH, hex parsing, oklch() text
//   gamut.rs  sRGB gamut check and greedy chroma reduction
//   error.rs  hex parsing failures
//
// Nothing here allocates on the conversion path or holds state between
// calls. Validation happens once, at the hex boundary; the conversion
// functions accept any real input and never clamp.

pub mod color;
pub mod error;
pub mod gamut;

pub use color::{Oklab, Oklch, Rgb};
pub use error::ColorFormatError;
pub use gamut::{is_in_gamut, map_to_gamut};
