//! Temporary output locations for tests that write images.

use std::path::PathBuf;

use tempfile::TempDir;

/// A temp directory plus a file path inside it.
///
/// The directory (and anything written to the path) is removed when the
/// returned `TempDir` is dropped, so keep it alive for the whole test.
pub fn temp_output(file_name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(file_name);
    (dir, path)
}

/// A path whose parent directory does not exist, for exercising write
/// failures.
pub fn unwritable_output(dir: &TempDir) -> PathBuf {
    dir.path().join("missing-dir").join("output.png")
}
