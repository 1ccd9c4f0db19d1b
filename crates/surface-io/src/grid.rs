//! Dimensions of full-globe regular lat/lon grids.

use serde::{Deserialize, Serialize};

use crate::config::{FULL_LATITUDE, FULL_LONGITUDE};
use crate::error::{Result, SurfaceError};

/// Cell counts of a global grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    /// Number of points in the longitude direction (columns, `II`).
    pub ii: usize,
    /// Number of points in the latitude direction (rows, `JJ`).
    pub jj: usize,
}

impl GridDims {
    pub fn new(ii: usize, jj: usize) -> Self {
        Self { ii, jj }
    }

    /// Array shape as `(rows, cols)`, i.e. `(JJ, II)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.jj, self.ii)
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.ii * self.jj
    }

    pub fn is_empty(&self) -> bool {
        self.ii == 0 || self.jj == 0
    }

    /// Size of the float payload in bytes.
    pub fn payload_bytes(&self) -> usize {
        self.len() * std::mem::size_of::<f32>()
    }
}

/// Derive grid dimensions from a resolution in degrees per cell.
///
/// Both counts are truncated, so a resolution that does not divide 360 or
/// 180 evenly drops the trailing partial column or row.
pub fn define_dims(res: f64) -> Result<GridDims> {
    if !res.is_finite() || res <= 0.0 {
        return Err(SurfaceError::InvalidResolution(res));
    }

    let ii = (FULL_LONGITUDE / res).floor();
    let jj = (FULL_LATITUDE / res).floor();
    if !ii.is_finite() || !jj.is_finite() || ii > usize::MAX as f64 {
        return Err(SurfaceError::InvalidResolution(res));
    }

    let (ii, jj) = (ii as usize, jj as usize);
    // Payload length must be representable
    ii.checked_mul(jj)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<f32>()))
        .ok_or(SurfaceError::InvalidResolution(res))?;

    Ok(GridDims::new(ii, jj))
}
