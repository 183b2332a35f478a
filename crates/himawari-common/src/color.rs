//! Hex colour values for background fill and band tinting.

use std::fmt;
use std::str::FromStr;

use crate::error::SatError;

/// An opaque RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Color {
    type Err = SatError;

    /// Parses `#RRGGBB`. Alpha is always fully opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| SatError::parse("color", s, "colours must start with a #"))?;

        if hex.len() != 6 {
            return Err(SatError::parse(
                "color",
                s,
                "expected exactly 7 characters in the form #RRGGBB",
            ));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SatError::parse("color", s, "invalid hexadecimal digit"));
        }

        // All six bytes are ASCII hex digits, so these slices and parses hold.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| SatError::parse("color", s, "invalid hexadecimal digit"))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
