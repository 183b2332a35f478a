//! Image rendering for Himawari tile mosaics.
//!
//! - [`composite`]: lay a tile grid out on one canvas, tinting spectral
//!   band tiles
//! - [`png`]: persist the finished canvas

pub mod composite;
pub mod png;

pub use composite::{recolor, render, Canvas};
pub use png::write_png;
