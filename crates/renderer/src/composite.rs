//! Grid compositing.
//!
//! The canvas is filled with an opaque background, then every tile is drawn
//! over it at its grid position with alpha blending. Tiles of a single
//! spectral band are greyscale with meaningful transparency; they are tinted
//! to the foreground colour first so the band shows as a coloured overlay.

use image::{imageops, Rgba, RgbaImage};
use tracing::debug;

use himawari_common::{Band, Color, TILE_SIZE};
use tile_source::Grid;

/// The composited output image.
pub type Canvas = RgbaImage;

/// Replace every pixel's colour with `foreground`, keeping its alpha.
pub fn recolor(image: &mut RgbaImage, foreground: Color) {
    let [r, g, b, _] = foreground.to_rgba();
    for pixel in image.pixels_mut() {
        let alpha = pixel[3];
        *pixel = Rgba([r, g, b, alpha]);
    }
}

/// Composite `grid` into a `width * 550` square canvas.
///
/// Tile `[x][y]` lands at pixel offset `(x * 550, y * 550)` and is clipped
/// to that cell. Full-colour tiles are drawn as-is; spectral band tiles are
/// recoloured first.
pub fn render(band: Band, grid: Grid, background: Color, foreground: Color) -> Canvas {
    let edge = grid.width() as u32 * TILE_SIZE;
    let mut canvas = RgbaImage::from_pixel(edge, edge, Rgba(background.to_rgba()));

    let tint = !band.is_full_color();
    debug!(
        width = edge,
        height = edge,
        band = %band,
        tint = tint,
        "Compositing grid"
    );

    for (x, y, tile) in grid.into_tiles() {
        let mut image = tile.into_image();
        if image.width() > TILE_SIZE || image.height() > TILE_SIZE {
            image = imageops::crop_imm(&image, 0, 0, TILE_SIZE, TILE_SIZE).to_image();
        }
        if tint {
            recolor(&mut image, foreground);
        }

        imageops::overlay(
            &mut canvas,
            &image,
            i64::from(x as u32 * TILE_SIZE),
            i64::from(y as u32 * TILE_SIZE),
        );
    }

    canvas
}
