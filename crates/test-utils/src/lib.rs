//! Shared test utilities for the surface workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Temporary directory helpers
//! - Grid data generators
//! - Filename fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Compare two grids cell by cell, treating NaN as equal to NaN.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_grids_match;
///
/// assert_grids_match!(&[1.0, f32::NAN], &[1.0, f32::NAN], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_grids_match {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: &[f32] = $left;
        let right: &[f32] = $right;
        assert_eq!(left.len(), right.len(), "grid lengths differ");
        for (idx, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            if l.is_nan() || r.is_nan() {
                assert!(
                    l.is_nan() && r.is_nan(),
                    "missing value mismatch at index {}: {} vs {}",
                    idx,
                    l,
                    r
                );
            } else {
                let diff = (l - r).abs();
                assert!(
                    diff <= $epsilon,
                    "value mismatch at index {}: {} vs {} (diff {})",
                    idx,
                    l,
                    r,
                    diff
                );
            }
        }
    }};
}
