//! Spectral band selection and tile URL templates.
//!
//! | Band | Wavelength | Region    |
//! |------|------------|-----------|
//! | 01   | 0.47µm     | Blue      |
//! | 02   | 0.51µm     | Green     |
//! | 03   | 0.64µm     | Red       |
//! | 04   | 0.86µm     | Near-IR   |
//! | 05   | 1.6µm      | Near-IR   |
//! | 06   | 2.3µm      | Near-IR   |
//! | 07   | 3.9µm      | Short-IR  |
//! | 08   | 6.2µm      | Mid-IR    |
//! | 09   | 6.9µm      | Mid-IR    |
//! | 10   | 7.3µm      | Mid-IR    |
//! | 11   | 8.6µm      | Far-IR    |
//! | 12   | 9.6µm      | Far-IR    |
//! | 13   | 10.4µm     | Far-IR    |
//! | 14   | 11.2µm     | Far-IR    |
//! | 15   | 12.4µm     | Far-IR    |
//! | 16   | 13.3µm     | Far-IR    |
//!
//! `standard` selects the full-colour composite of the visible bands.

use std::fmt;
use std::str::FromStr;

use crate::error::{SatError, SatResult};
use crate::time::AcquisitionTime;

/// Root of the public Himawari tile server.
pub const DEFAULT_BASE_URL: &str = "http://himawari8-dl.nict.go.jp/himawari8/img/";

/// Path shared by every band, relative to the band directory.
const TILE_PATH: &str =
    "{width}d/550/{year}/{month}/{day}/{hour}{minute}00_{x}_{y}.png";

struct BandEntry {
    key: &'static str,
    directory: &'static str,
    description: &'static str,
}

/// Indexed by band number; entry 0 is the full-colour composite.
static BANDS: [BandEntry; 17] = [
    BandEntry { key: "standard", directory: "D531106/", description: "Full colour (true colour RGB composite)" },
    BandEntry { key: "01", directory: "FULL_24h/B01/", description: "0.47µm Blue" },
    BandEntry { key: "02", directory: "FULL_24h/B02/", description: "0.51µm Green" },
    BandEntry { key: "03", directory: "FULL_24h/B03/", description: "0.64µm Red" },
    BandEntry { key: "04", directory: "FULL_24h/B04/", description: "0.86µm Near-IR" },
    BandEntry { key: "05", directory: "FULL_24h/B05/", description: "1.6µm Near-IR" },
    BandEntry { key: "06", directory: "FULL_24h/B06/", description: "2.3µm Near-IR" },
    BandEntry { key: "07", directory: "FULL_24h/B07/", description: "3.9µm Short-IR" },
    BandEntry { key: "08", directory: "FULL_24h/B08/", description: "6.2µm Mid-IR" },
    BandEntry { key: "09", directory: "FULL_24h/B09/", description: "6.9µm Mid-IR" },
    BandEntry { key: "10", directory: "FULL_24h/B10/", description: "7.3µm Mid-IR" },
    BandEntry { key: "11", directory: "FULL_24h/B11/", description: "8.6µm Far-IR" },
    BandEntry { key: "12", directory: "FULL_24h/B12/", description: "9.6µm Far-IR" },
    BandEntry { key: "13", directory: "FULL_24h/B13/", description: "10.4µm Far-IR" },
    BandEntry { key: "14", directory: "FULL_24h/B14/", description: "11.2µm Far-IR" },
    BandEntry { key: "15", directory: "FULL_24h/B15/", description: "12.4µm Far-IR" },
    BandEntry { key: "16", directory: "FULL_24h/B16/", description: "13.3µm Far-IR" },
];

/// Which channel to request: the full-colour composite or one spectral band.
///
/// Always an index into the band table, so every value has a URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Band {
    number: u8,
}

impl Band {
    pub const FULL_COLOR: Band = Band { number: 0 };

    pub fn spectral(number: u8) -> SatResult<Self> {
        if (1..=16).contains(&number) {
            Ok(Band { number })
        } else {
            Err(SatError::parse(
                "band",
                number.to_string(),
                "band must be between 01 and 16",
            ))
        }
    }

    pub fn is_full_color(&self) -> bool {
        self.number == 0
    }

    /// Spectral band number, or `None` for the full-colour composite.
    pub fn number(&self) -> Option<u8> {
        (self.number != 0).then_some(self.number)
    }

    fn entry(&self) -> &'static BandEntry {
        &BANDS[usize::from(self.number)]
    }

    /// Key accepted on the command line (`standard`, `01`..`16`).
    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    pub fn description(&self) -> &'static str {
        self.entry().description
    }

    /// Tile URL template for this band rooted at `base_url`.
    pub fn url_template(&self, base_url: &str) -> UrlTemplate {
        let separator = if base_url.ends_with('/') { "" } else { "/" };
        UrlTemplate {
            pattern: format!("{}{}{}{}", base_url, separator, self.entry().directory, TILE_PATH),
        }
    }
}

impl FromStr for Band {
    type Err = SatError;

    /// Accepts `standard` (any case) or a zero-padded band number `01`..`16`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BANDS
            .iter()
            .position(|entry| entry.key.eq_ignore_ascii_case(s))
            .map(|index| Band { number: index as u8 })
            .ok_or_else(|| {
                SatError::parse(
                    "band",
                    s,
                    "expected 'standard' or a two-digit band number between 01 and 16",
                )
            })
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A band's tile address pattern.
///
/// Placeholders are filled in a fixed order: grid width, year, month, day,
/// hour, minute, then the outer and inner grid indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    pattern: String,
}

impl UrlTemplate {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Address of one tile. `x` is the outer (horizontal) grid index and `y`
    /// the inner (vertical) one.
    pub fn tile_url(&self, grid_width: u32, time: &AcquisitionTime, x: u32, y: u32) -> String {
        self.pattern
            .replace("{width}", &grid_width.to_string())
            .replace("{year}", &format!("{:04}", time.year()))
            .replace("{month}", &format!("{:02}", time.month()))
            .replace("{day}", &format!("{:02}", time.day()))
            .replace("{hour}", &format!("{:02}", time.hour()))
            .replace("{minute}", &format!("{:02}", time.minute()))
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}
