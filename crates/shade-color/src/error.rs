// SPDX-License-Identifier: MIT
//
// Errors raised while parsing hex color codes.

use std::fmt;

/// An erroneous hex color code.
///
/// Accepted codes have an optional leading `#` followed by exactly 3, 4, 6,
/// or 8 hexadecimal digits. Anything else is rejected with one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// The code has the wrong number of digits after stripping `#`. For
    /// example, `#12` has two digits and `#12345` has five.
    UnexpectedLength(usize),

    /// The code has an acceptable length but contains a character that is
    /// not a hexadecimal digit. For example, `#efg` fails on `g`.
    MalformedHex(char),
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnexpectedLength(len) => write!(
                f,
                "hex color should have 3, 4, 6, or 8 digits but has {len}"
            ),
            Self::MalformedHex(ch) => {
                write!(f, "hex color should contain only hex digits but has {ch:?}")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
