//! Error types for surface record I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, writing or combining surfaces.
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// Resolution could not be parsed from the filename and was not supplied.
    #[error("cannot determine grid geometry for '{}': no resolution given and no rrNNNN token in the filename", path.display())]
    GeometryUndetermined { path: PathBuf },

    /// Resolution is not a finite, strictly positive number of degrees.
    #[error("invalid grid resolution: {0}")]
    InvalidResolution(f64),

    /// The record on disk does not match the expected layout.
    #[error("malformed record in '{}': {reason}", path.display())]
    RecordShapeMismatch { path: PathBuf, reason: String },

    /// Write target exists and overwriting was not requested.
    #[error("file already exists: {} (pass overwrite=true to replace it)", .0.display())]
    FileAlreadyExists(PathBuf),

    /// Two surfaces (or a surface and its mask) have different shapes.
    #[error("surfaces are not the same shape: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Payload length does not fit in the record marker.
    #[error("payload of {0} bytes does not fit in a record marker")]
    RecordTooLarge(usize),

    /// Underlying file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SurfaceError {
    /// Create a GeometryUndetermined error.
    pub fn geometry_undetermined(path: impl Into<PathBuf>) -> Self {
        Self::GeometryUndetermined { path: path.into() }
    }

    /// Create a RecordShapeMismatch error.
    pub fn record_shape_mismatch(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::RecordShapeMismatch {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for surface operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;
