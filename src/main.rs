pub mod convert;
pub mod table;

use crate::convert::converter::convert;
use crate::convert::source::GeometrySource;
use anyhow::anyhow;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Convert a CSV file into a WGS84 GeoJSON feature collection.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input CSV file.
    #[arg(short, long)]
    input_filepath: PathBuf,
    /// Path to the output GeoJSON file.
    #[arg(short, long)]
    output_filepath: PathBuf,
    /// Name of the column containing latitude values.
    #[arg(long)]
    lat_col: Option<String>,
    /// Name of the column containing longitude values.
    #[arg(long)]
    lon_col: Option<String>,
    /// Name of the column containing WKT or GeoJSON geometries.
    #[arg(long)]
    geometry_col: Option<String>,
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    if !Path::new(&args.input_filepath).exists() {
        return Err(anyhow!("Input file {:?} not found", &args.input_filepath));
    }
    let source = GeometrySource::from_columns(args.lat_col, args.lon_col, args.geometry_col)?;
    convert(&args.input_filepath, &args.output_filepath, &source)?;
    println!(
        "GeoJSON file has been saved to {}",
        args.output_filepath.display()
    );
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
