//! Synthetic tile generators.
//!
//! Tiles are full size (550x550) unless a helper says otherwise, so grids
//! built from them composite to the same canvas sizes as real imagery.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

/// Edge length of a server tile.
pub const TILE_EDGE: u32 = 550;

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// A full-size tile filled with one colour.
pub fn solid_tile(color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(TILE_EDGE, TILE_EDGE, color)
}

/// PNG bytes of [`solid_tile`].
pub fn solid_tile_png(color: Rgba<u8>) -> Vec<u8> {
    encode_png(&solid_tile(color))
}

/// A full-size greyscale-like band tile whose alpha varies across it.
///
/// Pixel `(x, y)` is `(v, v, v, a)` with `v = (x + y) % 256` and
/// `a = (x * 7 + y * 3) % 256`, so every alpha value appears and the colour
/// channels differ from any single tint.
pub fn alpha_ramp_tile() -> RgbaImage {
    RgbaImage::from_fn(TILE_EDGE, TILE_EDGE, |x, y| {
        let v = ((x + y) % 256) as u8;
        let a = ((x * 7 + y * 3) % 256) as u8;
        Rgba([v, v, v, a])
    })
}

/// Creates a tile where pixel values encode its grid position.
///
/// Every pixel is `(x * 16, y * 16, 0, 255)` so a composited canvas can be
/// checked for tile placement.
pub fn position_tile(x: u32, y: u32) -> RgbaImage {
    solid_tile(Rgba([(x * 16) as u8, (y * 16) as u8, 0, 255]))
}
