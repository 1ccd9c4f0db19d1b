//! Test data generators for creating synthetic surface data.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a mean-dynamic-topography-like grid in metres.
///
/// Ocean cells follow a smooth zonal pattern between roughly -1.5 m and
/// 1.5 m. A rectangular "continent" in the middle of the grid and the
/// polar rows are land and set to NaN.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
pub fn create_mdt_like_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let polar = row == 0 || row + 1 == height;
            let continent = col >= width / 3
                && col < width / 2
                && row >= height / 4
                && row < height / 2;
            if polar || continent {
                data.push(f32::NAN);
                continue;
            }
            let lat = row as f32 / height.max(1) as f32 * std::f32::consts::PI;
            let lon = col as f32 / width.max(1) as f32 * 2.0 * std::f32::consts::PI;
            data.push(1.5 * lat.cos() * (0.5 + 0.5 * lon.sin()));
        }
    }
    data
}

/// Creates a grid with all cells set to the same value.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `value` - The constant value to fill
///
/// # Returns
///
/// A `Vec<f32>` filled with the constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates a grid with NaN values at specified positions.
///
/// Useful for testing missing data handling.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (col, row) positions that should be NaN
///
/// # Returns
///
/// A `Vec<f32>` with NaN at specified positions, `col + row` elsewhere.
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f32> {
    let mut data: Vec<f32> = (0..width * height)
        .map(|idx| (idx % width.max(1) + idx / width.max(1)) as f32)
        .collect();
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f32::NAN;
        }
    }
    data
}

/// Encodes values as a raw single-record file body.
///
/// Built by hand rather than through the codec so tests can check the
/// codec against an independent byte layout. `marker_width` is 4 or 8.
pub fn raw_record_bytes(values: &[f32], marker_width: usize) -> Vec<u8> {
    let payload = values.len() * 4;
    let marker: Vec<u8> = match marker_width {
        8 => (payload as i64).to_ne_bytes().to_vec(),
        _ => (payload as i32).to_ne_bytes().to_vec(),
    };

    let mut bytes = Vec::with_capacity(payload + 2 * marker.len());
    bytes.extend_from_slice(&marker);
    for v in values {
        bytes.extend_from_slice(&v.to_ne_bytes());
    }
    bytes.extend_from_slice(&marker);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0); // col=0, row=0
        assert_eq!(grid[1], 1000.0); // col=1, row=0
        assert_eq!(grid[10], 1.0); // col=0, row=1
        assert_eq!(grid[11], 1001.0); // col=1, row=1
    }

    #[test]
    fn test_create_mdt_like_grid() {
        let grid = create_mdt_like_grid(36, 18);
        assert_eq!(grid.len(), 36 * 18);
        // Polar rows are land
        assert!(grid[0].is_nan());
        assert!(grid[17 * 36].is_nan());
        // Continent
        assert!(grid[5 * 36 + 12].is_nan());
        // Ocean values stay in range
        assert!(grid
            .iter()
            .filter(|v| !v.is_nan())
            .all(|v| (-1.5..=1.5).contains(v)));
    }

    #[test]
    fn test_create_constant_grid() {
        let grid = create_constant_grid(10, 10, 42.0);
        assert_eq!(grid.len(), 100);
        assert!(grid.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_create_grid_with_nans() {
        let grid = create_grid_with_nans(10, 10, &[(5, 5), (0, 0)]);
        assert!(grid[0].is_nan()); // (0, 0)
        assert!(grid[55].is_nan()); // (5, 5) = row 5 * 10 + col 5
        assert_eq!(grid[1], 1.0); // (1, 0)
        assert_eq!(grid[12], 3.0); // (2, 1)
    }

    #[test]
    fn test_raw_record_bytes() {
        let bytes = raw_record_bytes(&[1.0, 2.0], 4);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..4], &8i32.to_ne_bytes());
        assert_eq!(&bytes[12..], &8i32.to_ne_bytes());

        let bytes = raw_record_bytes(&[1.0, 2.0], 8);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[..8], &8i64.to_ne_bytes());
    }
}
