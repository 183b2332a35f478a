//! PNG output for composited canvases.

use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::info;

use himawari_common::{SatError, SatResult};

use crate::composite::Canvas;

/// Encode `canvas` as PNG at `path`, replacing any existing file.
///
/// The image is encoded in memory and written to a `.partial` sibling that
/// is renamed into place, so `path` never holds a truncated PNG.
pub fn write_png(canvas: &Canvas, path: &Path) -> SatResult<()> {
    let io_error = |message: String| SatError::Io {
        path: path.display().to_string(),
        message,
    };

    let mut encoded = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| io_error(e.to_string()))?;

    let partial = partial_path(path);
    if let Err(e) = fs::write(&partial, &encoded) {
        fs::remove_file(&partial).ok();
        return Err(io_error(e.to_string()));
    }
    if let Err(e) = fs::rename(&partial, path) {
        fs::remove_file(&partial).ok();
        return Err(io_error(e.to_string()));
    }

    info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        bytes = encoded.len(),
        "Saved mosaic"
    );
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}
