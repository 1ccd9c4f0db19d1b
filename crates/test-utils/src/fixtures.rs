//! Common test fixtures for surface tests.
//!
//! This module provides pre-defined filenames and grid shapes that
//! represent common scenarios in surface processing.

/// Filenames following the `rrNNNN` / underscore convention.
pub mod filenames {
    /// Type-A (three underscores), quarter-degree MDT
    pub const MDT_QUARTER_DEGREE: &str = "dtu_cls_rr0004_mdt.dat";

    /// Type-A, one-degree MDT
    pub const MDT_ONE_DEGREE: &str = "dtu_cls_rr0001_mdt.dat";

    /// Plain grid (two underscores), quarter-degree sea surface height
    pub const SSH_QUARTER_DEGREE: &str = "cls_ssh_rr0004.dat";

    /// Plain grid at 1/100 degree
    pub const SSH_CENTIDEGREE: &str = "surface_rr0100_foo";

    /// No resolution token at all
    pub const NO_RESOLUTION: &str = "mean_surface.dat";

    /// Token present but not followed by four digits
    pub const BAD_RESOLUTION: &str = "surface_rrXX04.dat";
}

/// Common grid shapes as (resolution, II, JJ).
pub mod grid {
    /// One-degree global grid
    pub const ONE_DEGREE: (f64, usize, usize) = (1.0, 360, 180);

    /// Quarter-degree global grid
    pub const QUARTER_DEGREE: (f64, usize, usize) = (0.25, 1440, 720);

    /// Ten-degree grid, small enough for fast file tests
    pub const TEN_DEGREE: (f64, usize, usize) = (10.0, 36, 18);

    /// Ninety-degree grid (4 x 2)
    pub const NINETY_DEGREE: (f64, usize, usize) = (90.0, 4, 2);
}
