//! Command-line access to `.dat` surface records.
//!
//! `inspect` reports the geometry and statistics of a single file;
//! `residual` writes the difference of two files as a new record.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use commands::{InspectArgs, ResidualArgs};

#[derive(Parser, Debug)]
#[command(name = "surface-tool")]
#[command(about = "Inspect Fortran unformatted surface records and compute residuals")]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print grid geometry and value statistics for a record
    Inspect(InspectArgs),
    /// Write the elementwise difference A - B of two records
    Residual(ResidualArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!(command = ?args.command, "Starting surface-tool");

    match args.command {
        Command::Inspect(inspect) => {
            let report = commands::inspect(&inspect)?;
            if inspect.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Command::Residual(residual) => {
            let written = commands::residual(&residual)?;
            println!("{}", written.display());
        }
    }

    Ok(())
}
