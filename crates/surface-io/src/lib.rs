//! Fortran unformatted surface records.
//!
//! Reads and writes global 2D grids (mean dynamic topography, sea surface
//! height) stored as a single sequential unformatted record:
//!
//! ```text
//! [i32 B][B bytes of f32, row-major (JJ, II)][i32 B]
//! ```
//!
//! Grid dimensions are not stored in the file. They come from the
//! resolution, which is usually encoded in the filename as `rrNNNN`
//! (`1/NNNN` degrees). Missing cells are NaN in memory and a large negative
//! sentinel on disk.
//!
//! # Example
//!
//! ```ignore
//! use surface_io::{calc_residual, reshape_data, write_dat};
//!
//! let (mdt, _) = reshape_data("dtu_cls_rr0004_mdt.dat", None, None)?;
//! let (ref_mdt, _) = reshape_data("cnes_cls_rr0004_mdt.dat", None, None)?;
//!
//! let residual = calc_residual(&mdt, &ref_mdt)?;
//! write_dat(&residual, "dtu_minus_cnes_rr0004", None, false)?;
//! ```

pub mod config;
pub mod error;
pub mod filename;
pub mod grid;
pub mod reader;
pub mod record;
pub mod residual;
pub mod surface;
pub mod writer;

// Re-export commonly used types at crate root
pub use config::{ReadOptions, WriteOptions, MISSING_READ_THRESHOLD, MISSING_WRITE_SENTINEL};
pub use error::{Result, SurfaceError};
pub use filename::{parse_mdt, parse_res, FileMetadata};
pub use grid::{define_dims, GridDims};
pub use reader::{read_surface, reshape_data, LoadedSurface};
pub use record::{decode_record, encode_record, LayoutError, Record, RecordMarker};
pub use residual::calc_residual;
pub use surface::{Surface, SurfaceSummary};
pub use writer::{with_dat_extension, write_dat, write_surface};
