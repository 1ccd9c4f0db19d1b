//! Temporary directory helpers for file-based tests.

use std::path::{Path, PathBuf};

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
///
/// # Returns
///
/// A `tempfile::TempDir` that will be automatically cleaned up.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Writes raw bytes to `dir/name` and returns the full path.
pub fn write_test_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write test file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_test_dir() {
        let dir = temp_test_dir();
        assert!(dir.path().exists());
        // Dir is cleaned up when dropped
    }

    #[test]
    fn test_write_test_file() {
        let dir = temp_test_dir();
        let path = write_test_file(dir.path(), "raw.dat", &[1, 2, 3]);
        assert_eq!(std::fs::read(path).unwrap(), vec![1, 2, 3]);
    }
}
