//! Reading `.dat` surface records into 2D surfaces.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::{ReadOptions, MISSING_READ_THRESHOLD};
use crate::error::{Result, SurfaceError};
use crate::filename::FileMetadata;
use crate::grid::define_dims;
use crate::record::{decode_record, RecordMarker};
use crate::surface::Surface;

/// A surface read from disk together with how it was interpreted.
#[derive(Debug, Clone)]
pub struct LoadedSurface {
    pub surface: Surface,
    /// Resolution used to shape the grid.
    pub resolution: f64,
    /// Whether the file was treated as a type-A (MDT) grid.
    pub mdt: bool,
    /// Marker width found in the file.
    pub marker: RecordMarker,
}

/// Read a surface, deriving anything not given explicitly from the filename.
///
/// Returns the surface and the type-A flag that was used. Sentinels are
/// turned into NaN only for type-A grids.
pub fn reshape_data(
    path: impl AsRef<Path>,
    res: Option<f64>,
    mdt: Option<bool>,
) -> Result<(Surface, bool)> {
    let options = ReadOptions {
        resolution: res,
        mdt,
        ..ReadOptions::default()
    };
    let loaded = read_surface(path, &options)?;
    Ok((loaded.surface, loaded.mdt))
}

/// Read a surface record using explicit options.
pub fn read_surface(path: impl AsRef<Path>, options: &ReadOptions) -> Result<LoadedSurface> {
    let path = path.as_ref();
    let meta = FileMetadata::from_path(path);

    let resolution = options
        .resolution
        .or(meta.resolution)
        .ok_or_else(|| SurfaceError::geometry_undetermined(path))?;
    let mdt = options.mdt.unwrap_or(meta.mdt);
    let dims = define_dims(resolution)?;

    // Sized from the file, not the geometry, which may be wrong for it
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;

    let record = decode_record(&bytes)
        .map_err(|e| SurfaceError::record_shape_mismatch(path, e.to_string()))?;

    if record.values.len() != dims.len() {
        return Err(SurfaceError::record_shape_mismatch(
            path,
            format!(
                "record holds {} values but a {} degree grid needs {} ({} x {})",
                record.values.len(),
                resolution,
                dims.len(),
                dims.jj,
                dims.ii
            ),
        ));
    }

    let marker = record.marker;
    let mut surface = Surface::new(record.values, dims.ii, dims.jj)?;

    let mut masked = 0usize;
    if mdt || options.symmetric_sentinels {
        for v in surface.as_mut_slice() {
            if *v < MISSING_READ_THRESHOLD {
                *v = f32::NAN;
                masked += 1;
            }
        }
    }

    debug!(
        path = %path.display(),
        ii = dims.ii,
        jj = dims.jj,
        mdt,
        marker = %marker,
        masked,
        "Read surface record"
    );

    Ok(LoadedSurface {
        surface,
        resolution,
        mdt,
        marker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::encode_record;
    use crate::config::MISSING_WRITE_SENTINEL;

    fn write_raw(dir: &Path, name: &str, values: &[f32], marker: RecordMarker) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, encode_record(values, marker).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_geometry_undetermined() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(dir.path(), "plain.dat", &[0.0; 2], RecordMarker::FourByte);

        let err = reshape_data(&path, None, None).unwrap_err();
        assert!(matches!(err, SurfaceError::GeometryUndetermined { .. }));
    }

    #[test]
    fn test_explicit_resolution_overrides_name() {
        let dir = tempfile::tempdir().unwrap();
        // 90 degree cells: 4 x 2
        let values: Vec<f32> = (0..8).map(|v| v as f32).collect();
        let path = write_raw(dir.path(), "grid_rr0001.dat", &values, RecordMarker::FourByte);

        let (surface, mdt) = reshape_data(&path, Some(90.0), None).unwrap();
        assert!(!mdt);
        assert_eq!(surface.shape(), (2, 4));
        assert_eq!(surface.get(1, 0), Some(4.0));
    }

    #[test]
    fn test_sentinels_only_masked_for_mdt() {
        let dir = tempfile::tempdir().unwrap();
        let values = [1.0, MISSING_WRITE_SENTINEL, 3.0, -1.85e19, 5.0, 6.0, 7.0, 8.0];
        let path = write_raw(dir.path(), "grid.dat", &values, RecordMarker::FourByte);

        let (plain, _) = reshape_data(&path, Some(90.0), Some(false)).unwrap();
        assert_eq!(plain.missing_count(), 0);
        assert_eq!(plain.get(0, 1), Some(MISSING_WRITE_SENTINEL));

        let (mdt, flag) = reshape_data(&path, Some(90.0), Some(true)).unwrap();
        assert!(flag);
        assert_eq!(mdt.missing_count(), 2);
        assert!(mdt.get(0, 1).unwrap().is_nan());
        assert!(mdt.get(0, 3).unwrap().is_nan());

        let options = ReadOptions::new()
            .with_resolution(90.0)
            .with_mdt(false)
            .with_symmetric_sentinels(true);
        let loaded = read_surface(&path, &options).unwrap();
        assert_eq!(loaded.surface.missing_count(), 2);
        assert!(!loaded.mdt);
    }

    #[test]
    fn test_geometry_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(dir.path(), "grid.dat", &[0.0; 6], RecordMarker::FourByte);

        let err = reshape_data(&path, Some(90.0), Some(false)).unwrap_err();
        assert!(matches!(err, SurfaceError::RecordShapeMismatch { .. }));
    }

    #[test]
    fn test_short_file_with_fine_resolution_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(dir.path(), "x_rr9999.dat", &[1.0, 2.0], RecordMarker::FourByte);

        let err = reshape_data(&path, None, None).unwrap_err();
        assert!(matches!(err, SurfaceError::RecordShapeMismatch { .. }));
    }

    #[test]
    fn test_extreme_explicit_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(dir.path(), "grid.dat", &[0.0; 8], RecordMarker::FourByte);

        let err = reshape_data(&path, Some(1e-9), Some(false)).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidResolution(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = reshape_data(dir.path().join("gone_rr0001.dat"), None, None).unwrap_err();
        assert!(matches!(err, SurfaceError::Io(_)));
    }
}
