//! Error types for the Himawari mosaic crates.

use thiserror::Error;

/// Result type alias using SatError.
pub type SatResult<T> = Result<T, SatError>;

/// Primary error type for tile acquisition and compositing.
#[derive(Debug, Error)]
pub enum SatError {
    // === Input Errors ===
    #[error("Invalid {param} '{value}': {message}")]
    Parse {
        param: &'static str,
        value: String,
        message: String,
    },

    // === Fetch Errors ===
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to decode image from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),

    // === Output Errors ===
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}

impl SatError {
    pub fn parse(param: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        SatError::Parse {
            param,
            value: value.into(),
            message: message.into(),
        }
    }

    /// True for errors raised while retrieving or decoding a tile.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            SatError::Transport { .. } | SatError::Decode { .. } | SatError::Client(_)
        )
    }

    /// Process exit status for this error.
    ///
    /// Acquisition failures exit with 1, bad input and output failures with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            SatError::Transport { .. } | SatError::Decode { .. } | SatError::Client(_) => 1,
            SatError::Parse { .. } | SatError::Io { .. } => 2,
        }
    }
}
