//! Decoded tiles and placeholder detection.
//!
//! When a slot has not been published yet the server still answers with a
//! valid PNG: a fixed "No Image" picture. It is recognised by the MD5 of
//! the response body. If the server ever changes that picture, detection
//! stops working; there is no fuzzy matching.

use image::{ImageFormat, RgbaImage};
use md5::{Digest, Md5};

use himawari_common::{SatError, SatResult, TILE_SIZE};

/// MD5 (lowercase hex) of the server's "No Image" placeholder tile.
pub const PLACEHOLDER_DIGEST: &str = "b697574875d3b8eb5dd80e9b2bc9c749";

/// Lowercase hex MD5 of raw response bytes.
pub fn content_digest(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}

pub fn is_placeholder_digest(digest: &str) -> bool {
    digest == PLACEHOLDER_DIGEST
}

/// One downloaded grid cell: the decoded raster plus the digest of the bytes
/// it was decoded from.
#[derive(Debug, Clone)]
pub struct Tile {
    image: RgbaImage,
    digest: String,
}

impl Tile {
    pub fn from_parts(image: RgbaImage, digest: impl Into<String>) -> Self {
        Self {
            image,
            digest: digest.into(),
        }
    }

    /// Decode a PNG body. `url` is only used to label errors.
    ///
    /// Anything other than a `TILE_SIZE` square is rejected, so every tile
    /// fills exactly one grid cell.
    pub fn decode(url: &str, bytes: &[u8]) -> SatResult<Self> {
        let decode_error = |message: String| SatError::Decode {
            url: url.to_string(),
            message,
        };

        let digest = content_digest(bytes);
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| decode_error(e.to_string()))?
            .to_rgba8();

        let (width, height) = image.dimensions();
        if width != TILE_SIZE || height != TILE_SIZE {
            return Err(decode_error(format!(
                "unexpected tile size {}x{}, expected {}x{}",
                width, height, TILE_SIZE, TILE_SIZE
            )));
        }

        Ok(Self { image, digest })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// True if this is the server's "imagery not yet published" response.
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_digest(&self.digest)
    }
}
