//! Zoom level selection.
//!
//! | Zoom | Grid  | Resolution  |
//! |------|-------|-------------|
//! | 1    | 1x1   | 550 x 550   |
//! | 2    | 2x2   | 1100 x 1100 |
//! | 3    | 4x4   | 2200 x 2200 |
//! | 4    | 8x8   | 4400 x 4400 |
//! | 5    | 16x16 | 8800 x 8800 |

use std::fmt;
use std::str::FromStr;

use crate::error::{SatError, SatResult};

/// Edge length of every tile served by the upstream server.
pub const TILE_SIZE: u32 = 550;

/// A zoom level between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> SatResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(SatError::parse(
                "zoom",
                level.to_string(),
                "zoom must be an integer between 1 and 5",
            ))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Number of tiles along each edge of the square grid.
    pub fn grid_width(&self) -> u32 {
        1 << (self.0 - 1)
    }

    /// Edge length in pixels of the composited image.
    pub fn resolution(&self) -> u32 {
        self.grid_width() * TILE_SIZE
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl FromStr for ZoomLevel {
    type Err = SatError;

    /// Accepts decimal digits only; leading zeros are fine, whitespace and
    /// signs are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SatError::parse("zoom", s, "zoom must be an integer between 1 and 5");

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let trimmed = s.trim_start_matches('0');
        let level: u8 = if trimmed.is_empty() {
            0
        } else {
            trimmed.parse().map_err(|_| invalid())?
        };

        Self::new(level).map_err(|_| invalid())
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
