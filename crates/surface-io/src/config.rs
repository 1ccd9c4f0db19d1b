//! Shared constants and per-call options for the record codec.

use crate::record::RecordMarker;
use crate::surface::Surface;

/// Values strictly below this are treated as missing on read.
pub const MISSING_READ_THRESHOLD: f32 = -1.8e19;

/// Value written to disk in place of NaN.
///
/// Sits below [`MISSING_READ_THRESHOLD`] so a written sentinel is always
/// recognised again on read.
pub const MISSING_WRITE_SENTINEL: f32 = -1.9e19;

/// Token that precedes the resolution digits in a filename.
pub const RESOLUTION_TOKEN: &str = "rr";

/// Number of digits after [`RESOLUTION_TOKEN`].
pub const RESOLUTION_DIGITS: usize = 4;

/// Underscore count that marks a type-A (MDT) filename.
pub const MDT_UNDERSCORE_COUNT: usize = 3;

/// Canonical extension of surface records.
pub const DAT_EXTENSION: &str = "dat";

/// Longitude span of a full-globe grid, in degrees.
pub const FULL_LONGITUDE: f64 = 360.0;

/// Latitude span of a full-globe grid, in degrees.
pub const FULL_LATITUDE: f64 = 180.0;

/// Options for reading a surface record.
///
/// Unset fields are derived from the filename.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadOptions {
    /// Grid resolution in degrees per cell.
    pub resolution: Option<f64>,
    /// Whether the file is a type-A (MDT) grid.
    pub mdt: Option<bool>,
    /// Convert sentinels to NaN even for plain grids.
    pub symmetric_sentinels: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_mdt(mut self, mdt: bool) -> Self {
        self.mdt = Some(mdt);
        self
    }

    pub fn with_symmetric_sentinels(mut self, symmetric: bool) -> Self {
        self.symmetric_sentinels = symmetric;
        self
    }
}

/// Options for writing a surface record.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions<'a> {
    /// Multiplied into the data before NaN values become sentinels.
    pub nan_mask: Option<&'a Surface>,
    /// Replace an existing file instead of refusing.
    pub overwrite: bool,
    /// Width of the header and footer markers.
    pub marker: RecordMarker,
}

impl Default for WriteOptions<'_> {
    fn default() -> Self {
        Self {
            nan_mask: None,
            overwrite: false,
            marker: RecordMarker::FourByte,
        }
    }
}

impl<'a> WriteOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nan_mask(mut self, mask: &'a Surface) -> Self {
        self.nan_mask = Some(mask);
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_marker(mut self, marker: RecordMarker) -> Self {
        self.marker = marker;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_below_threshold() {
        assert!(MISSING_WRITE_SENTINEL < MISSING_READ_THRESHOLD);
    }

    #[test]
    fn test_write_defaults() {
        let opts = WriteOptions::default();
        assert!(!opts.overwrite);
        assert!(opts.nan_mask.is_none());
        assert_eq!(opts.marker, RecordMarker::FourByte);
    }

    #[test]
    fn test_read_builder() {
        let opts = ReadOptions::new().with_resolution(0.25).with_mdt(true);
        assert_eq!(opts.resolution, Some(0.25));
        assert_eq!(opts.mdt, Some(true));
        assert!(!opts.symmetric_sentinels);
    }
}
