use std::io;

use thiserror::Error;

/// Everything that can abort a conversion. No variant is retried internally;
/// each one surfaces to the caller and the run produces no new output file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Column '{0}' not found in the CSV file.")]
    MissingColumn(String),
    #[error("Columns '{lat_col}' and/or '{lon_col}' not found in the CSV file.")]
    MissingCoordinateColumns { lat_col: String, lon_col: String },
    #[error("Either a geometry column or both a latitude and a longitude column must be provided.")]
    NoGeometrySource,
    #[error("A geometry column and coordinate columns are mutually exclusive; provide only one.")]
    AmbiguousGeometrySource,
    #[error("Invalid WKT geometry format: {raw}")]
    InvalidWkt { raw: String },
    #[error("Invalid GeoJSON geometry: {raw}")]
    InvalidGeoJson { raw: String },
    #[error("Row {row} has no geometry value.")]
    NullGeometry { row: usize },
    #[error("Row {row}: cannot build a point from value '{value}' in column '{column}'.")]
    InvalidCoordinate {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Could not read the input CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
