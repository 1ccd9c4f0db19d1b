//! In-memory 2D surfaces.

use serde::Serialize;

use crate::error::{Result, SurfaceError};
use crate::grid::GridDims;

/// A 2D grid of `f32` values with NaN marking missing cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// The grid values (row-major order, `height` rows of `width` values).
    data: Vec<f32>,
    /// Columns (`II`).
    width: usize,
    /// Rows (`JJ`).
    height: usize,
}

impl Surface {
    /// Wrap row-major data, checking that it fills `width * height` cells.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(SurfaceError::ShapeMismatch {
                left: (height, width),
                right: (1, data.len()),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A surface with every cell set to `value`.
    pub fn filled(dims: GridDims, value: f32) -> Self {
        Self {
            data: vec![value; dims.len()],
            width: dims.ii,
            height: dims.jj,
        }
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn dims(&self) -> GridDims {
        GridDims::new(self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at a specific grid cell.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Row-major view of the values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of NaN cells.
    pub fn missing_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Basic statistics over the finite cells.
    pub fn summary(&self) -> SurfaceSummary {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut valid = 0usize;

        for &v in self.data.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
            valid += 1;
        }

        SurfaceSummary {
            rows: self.height,
            cols: self.width,
            missing: self.missing_count(),
            valid,
            min: (valid > 0).then_some(min),
            max: (valid > 0).then_some(max),
            mean: (valid > 0).then(|| sum / valid as f64),
        }
    }
}

/// Shape and value statistics of a surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceSummary {
    pub rows: usize,
    pub cols: usize,
    pub missing: usize,
    pub valid: usize,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub mean: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(Surface::new(vec![0.0; 6], 3, 2).is_ok());
        let err = Surface::new(vec![0.0; 5], 3, 2).unwrap_err();
        assert!(matches!(err, SurfaceError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let err = Surface::new(vec![0.0; 4], usize::MAX, 2).unwrap_err();
        assert!(matches!(err, SurfaceError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_row_major_indexing() {
        let surface = Surface::new(vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0], 3, 2).unwrap();
        assert_eq!(surface.shape(), (2, 3));
        assert_eq!(surface.get(0, 2), Some(2.0));
        assert_eq!(surface.get(1, 0), Some(10.0));
        assert_eq!(surface.get(2, 0), None);
        assert_eq!(surface.get(0, 3), None);
    }

    #[test]
    fn test_summary_skips_missing() {
        let surface = Surface::new(vec![1.0, f32::NAN, 3.0, f32::NAN], 2, 2).unwrap();
        let summary = surface.summary();
        assert_eq!(summary.missing, 2);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(3.0));
        assert_eq!(summary.mean, Some(2.0));
    }

    #[test]
    fn test_summary_all_missing() {
        let surface = Surface::filled(GridDims::new(2, 1), f32::NAN);
        let summary = surface.summary();
        assert_eq!(summary.valid, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.mean, None);
    }
}
