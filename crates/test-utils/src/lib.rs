//! Shared test utilities for the Himawari mosaic workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic tile generators (decoded and PNG-encoded)
//! - Temporary output locations
//! - Capture of `tracing` output
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;
pub mod logs;
pub mod paths;

// Re-export commonly used items at the crate root
pub use generators::*;
pub use logs::*;
pub use paths::*;
