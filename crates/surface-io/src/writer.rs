//! Writing surfaces back to `.dat` records.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::{WriteOptions, DAT_EXTENSION, MISSING_WRITE_SENTINEL};
use crate::error::{Result, SurfaceError};
use crate::record::encode_record;
use crate::surface::Surface;

/// Write `data` as a single record.
///
/// Refuses to replace an existing file unless `overwrite` is set. Returns the
/// path actually written, which always ends in `.dat`.
pub fn write_dat(
    data: &Surface,
    path: impl AsRef<Path>,
    nan_mask: Option<&Surface>,
    overwrite: bool,
) -> Result<PathBuf> {
    let options = WriteOptions {
        nan_mask,
        overwrite,
        ..WriteOptions::default()
    };
    write_surface(data, path, &options)
}

/// Write a surface record using explicit options.
pub fn write_surface(
    data: &Surface,
    path: impl AsRef<Path>,
    options: &WriteOptions<'_>,
) -> Result<PathBuf> {
    let requested = path.as_ref();
    let target = with_dat_extension(requested);

    if !options.overwrite {
        for candidate in [requested, target.as_path()] {
            if candidate.exists() {
                return Err(SurfaceError::FileAlreadyExists(candidate.to_path_buf()));
            }
        }
    }

    let values = prepare_values(data, options.nan_mask)?;
    let bytes = encode_record(&values, options.marker)?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&bytes)?;
    staged.as_file().sync_all()?;

    if options.overwrite {
        staged.persist(&target).map_err(|e| e.error)?;
    } else {
        staged.persist_noclobber(&target).map_err(|e| {
            if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                SurfaceError::FileAlreadyExists(target.clone())
            } else {
                SurfaceError::Io(e.error)
            }
        })?;
    }

    let (jj, ii) = data.shape();
    debug!(
        path = %target.display(),
        ii,
        jj,
        marker = %options.marker,
        bytes = bytes.len(),
        "Wrote surface record"
    );

    Ok(target)
}

/// Append `.dat` unless the name already ends with it.
pub fn with_dat_extension(path: &Path) -> PathBuf {
    let suffix = format!(".{}", DAT_EXTENSION);
    if path.as_os_str().to_string_lossy().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(DAT_EXTENSION);
    PathBuf::from(name)
}

/// Flatten, apply the mask and swap NaN for the on-disk sentinel.
fn prepare_values(data: &Surface, nan_mask: Option<&Surface>) -> Result<Vec<f32>> {
    let mut values = data.as_slice().to_vec();

    if let Some(mask) = nan_mask {
        if mask.shape() != data.shape() {
            return Err(SurfaceError::ShapeMismatch {
                left: data.shape(),
                right: mask.shape(),
            });
        }
        for (v, m) in values.iter_mut().zip(mask.as_slice()) {
            *v *= m;
        }
    }

    for v in values.iter_mut().filter(|v| v.is_nan()) {
        *v = MISSING_WRITE_SENTINEL;
    }

    Ok(values)
}
