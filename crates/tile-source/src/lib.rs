//! Tile acquisition for Himawari imagery.
//!
//! - [`fetch`]: retrieve and decode a single tile over HTTP
//! - [`tile`]: decoded tiles and "no image yet" placeholder detection
//! - [`acquire`]: fetch a full square grid, rolling back to earlier slots
//!   while the newest one is still unpublished

pub mod acquire;
pub mod fetch;
pub mod grid;
pub mod tile;

pub use acquire::{AcquireConfig, Acquisition, GridAcquirer};
pub use fetch::{FetchConfig, HttpTileFetcher, TileFetcher};
pub use grid::Grid;
pub use tile::{content_digest, is_placeholder_digest, Tile, PLACEHOLDER_DIGEST};
