//! Grid metadata encoded in surface filenames.
//!
//! Filenames follow a loose convention: an `rrNNNN` token gives the
//! resolution as `1/NNNN` degrees, and exactly three underscores mark a
//! type-A (MDT) grid whose sentinels are interpreted on read.

use std::path::Path;

use crate::config::{MDT_UNDERSCORE_COUNT, RESOLUTION_DIGITS, RESOLUTION_TOKEN};

/// Parse the resolution from the first `rrNNNN` token.
///
/// Returns `None` when there is no token, when the four characters after it
/// are not all digits, or when the digits are zero.
pub fn parse_res(filename: &str) -> Option<f64> {
    let start = filename.find(RESOLUTION_TOKEN)? + RESOLUTION_TOKEN.len();
    let digits = filename.get(start..start + RESOLUTION_DIGITS)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let n: u32 = digits.parse().ok()?;
    if n == 0 {
        return None;
    }
    Some(1.0 / n as f64)
}

/// True iff the filename contains exactly three underscores.
pub fn parse_mdt(filename: &str) -> bool {
    filename.matches('_').count() == MDT_UNDERSCORE_COUNT
}

/// Metadata derived from the final component of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileMetadata {
    pub resolution: Option<f64>,
    pub mdt: bool,
}

impl FileMetadata {
    pub fn from_name(name: &str) -> Self {
        Self {
            resolution: parse_res(name),
            mdt: parse_mdt(name),
        }
    }

    /// Directory components are ignored so that underscores or `rr`
    /// sequences in parent folders do not leak into the classification.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        Self::from_name(&name)
    }
}
