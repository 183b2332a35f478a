//! Himawari mosaic command-line tool library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod cli;
pub mod logging;
pub mod pipeline;

pub use cli::{Args, LogFormat, MosaicConfig};
pub use pipeline::{run, MosaicSummary};
