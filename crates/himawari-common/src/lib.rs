//! Common types shared across the Himawari mosaic crates.
//!
//! Every value that arrives from outside (command-line flags, environment)
//! is parsed and validated here before any network activity happens.

pub mod band;
pub mod color;
pub mod error;
pub mod time;
pub mod zoom;

pub use band::{Band, UrlTemplate, DEFAULT_BASE_URL};
pub use color::Color;
pub use error::{SatError, SatResult};
pub use time::{AcquisitionTime, SLOT_MINUTES};
pub use zoom::{ZoomLevel, TILE_SIZE};
