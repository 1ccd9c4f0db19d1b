//! Differences between surfaces.

use tracing::warn;

use crate::error::{Result, SurfaceError};
use crate::surface::Surface;

/// Elementwise `a - b`.
///
/// NaN in either input gives NaN in the result. Surfaces of different shape
/// are rejected without touching the data.
pub fn calc_residual(a: &Surface, b: &Surface) -> Result<Surface> {
    if a.shape() != b.shape() {
        warn!(
            left = ?a.shape(),
            right = ?b.shape(),
            "Cannot compute residual: surfaces are not same shape"
        );
        return Err(SurfaceError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x - y)
        .collect();

    Surface::new(data, a.width(), a.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_values() {
        let a = Surface::new(vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0], 3, 2).unwrap();
        let b = Surface::new(vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0], 3, 2).unwrap();
        let r = calc_residual(&a, &b).unwrap();
        assert_eq!(r.shape(), (2, 3));
        assert_eq!(r.as_slice(), &[4.0, 3.0, 2.0, 0.0, -1.0, -2.0]);
    }

    #[test]
    fn test_residual_propagates_nan() {
        let a = Surface::new(vec![f32::NAN, 1.0, 2.0, 3.0], 2, 2).unwrap();
        let b = Surface::new(vec![0.0, f32::NAN, 1.0, 1.0], 2, 2).unwrap();
        let r = calc_residual(&a, &b).unwrap();
        assert!(r.get(0, 0).unwrap().is_nan());
        assert!(r.get(0, 1).unwrap().is_nan());
        assert_eq!(r.get(1, 0), Some(1.0));
        assert_eq!(r.missing_count(), 2);
    }

    #[test]
    fn test_residual_shape_mismatch() {
        let a = Surface::new(vec![0.0; 6], 3, 2).unwrap();
        let b = Surface::new(vec![0.0; 6], 2, 3).unwrap();
        match calc_residual(&a, &b) {
            Err(SurfaceError::ShapeMismatch { left, right }) => {
                assert_eq!(left, (2, 3));
                assert_eq!(right, (3, 2));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }
}
