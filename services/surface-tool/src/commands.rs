//! Subcommand implementations.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use surface_io::{
    calc_residual, read_surface, write_dat, GridDims, ReadOptions, RecordMarker, SurfaceSummary,
};
use tracing::info;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Record to inspect
    pub file: PathBuf,

    /// Resolution in degrees (default: parsed from the rrNNNN filename token)
    #[arg(long)]
    pub res: Option<f64>,

    /// Treat as a type-A grid (default: three underscores in the filename)
    #[arg(long)]
    pub mdt: Option<bool>,

    /// Convert sentinels to missing values even for plain grids
    #[arg(long)]
    pub symmetric: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ResidualArgs {
    /// Minuend record
    pub a: PathBuf,

    /// Subtrahend record
    pub b: PathBuf,

    /// Output path (".dat" is appended if missing)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Resolution of both inputs (default: parsed from each filename)
    #[arg(long)]
    pub res: Option<f64>,

    /// Replace the output file if it exists
    #[arg(long)]
    pub overwrite: bool,
}

/// What `inspect` reports about a record.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub path: PathBuf,
    pub resolution: f64,
    pub dims: GridDims,
    pub mdt: bool,
    pub marker: RecordMarker,
    pub summary: SurfaceSummary,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file:       {}", self.path.display())?;
        writeln!(f, "resolution: {} deg", self.resolution)?;
        writeln!(f, "grid:       {} x {} (JJ x II)", self.dims.jj, self.dims.ii)?;
        writeln!(f, "type-A:     {}", self.mdt)?;
        writeln!(f, "markers:    {}", self.marker)?;
        writeln!(
            f,
            "cells:      {} valid, {} missing",
            self.summary.valid, self.summary.missing
        )?;
        match (self.summary.min, self.summary.max, self.summary.mean) {
            (Some(min), Some(max), Some(mean)) => {
                writeln!(f, "range:      {} .. {} (mean {:.6})", min, max, mean)
            }
            _ => writeln!(f, "range:      n/a"),
        }
    }
}

pub fn inspect(args: &InspectArgs) -> Result<InspectReport> {
    let options = ReadOptions {
        resolution: args.res,
        mdt: args.mdt,
        symmetric_sentinels: args.symmetric,
    };
    let loaded = read_surface(&args.file, &options)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    Ok(InspectReport {
        path: args.file.clone(),
        resolution: loaded.resolution,
        dims: loaded.surface.dims(),
        mdt: loaded.mdt,
        marker: loaded.marker,
        summary: loaded.surface.summary(),
    })
}

pub fn residual(args: &ResidualArgs) -> Result<PathBuf> {
    // Sentinels in either input are missing, whatever the grid type
    let mut options = ReadOptions::new().with_symmetric_sentinels(true);
    options.resolution = args.res;

    let a = read_surface(&args.a, &options)
        .with_context(|| format!("failed to read {}", args.a.display()))?;
    let b = read_surface(&args.b, &options)
        .with_context(|| format!("failed to read {}", args.b.display()))?;

    let diff = calc_residual(&a.surface, &b.surface)?;
    let written = write_dat(&diff, &args.output, None, args.overwrite)?;

    info!(
        a = %args.a.display(),
        b = %args.b.display(),
        output = %written.display(),
        missing = diff.missing_count(),
        "Wrote residual"
    );

    Ok(written)
}
