use std::io::Write;
use std::path::Path;

use super::error::ConvertError;
use super::geometry::{coordinate_from_cell, geometry_from_cell};
use super::source::GeometrySource;
use crate::table::dataset::Dataset;

/// Column positions for the selected geometry source, checked against the
/// header before any row is touched.
#[derive(Clone, Copy)]
enum ColumnPlan {
    CoordinatePair { lat: usize, lon: usize },
    Geometry(usize),
}

fn plan_columns(dataset: &Dataset, source: &GeometrySource) -> Result<ColumnPlan, ConvertError> {
    match source {
        GeometrySource::CoordinatePair { lat_col, lon_col } => {
            match (
                dataset.column_index(lat_col),
                dataset.column_index(lon_col),
            ) {
                (Some(lat), Some(lon)) => Ok(ColumnPlan::CoordinatePair { lat, lon }),
                _ => Err(ConvertError::MissingCoordinateColumns {
                    lat_col: lat_col.clone(),
                    lon_col: lon_col.clone(),
                }),
            }
        }
        GeometrySource::GeometryColumn { column } => dataset
            .column_index(column)
            .map(ColumnPlan::Geometry)
            .ok_or_else(|| ConvertError::MissingColumn(column.clone())),
    }
}

/// Convert a CSV file into a WGS84 GeoJSON feature collection.
///
/// One feature is written per input row, in row order, with every
/// non-geometry column carried into the feature's properties. The first
/// unresolvable geometry aborts the whole run and a pre-existing output file
/// is left untouched on failure.
pub fn convert(
    input_filepath: &Path,
    output_filepath: &Path,
    source: &GeometrySource,
) -> Result<(), ConvertError> {
    let dataset = Dataset::from_csv_file(input_filepath)?;
    let plan = plan_columns(&dataset, source)?;
    log::info!(
        "Converting {} records from {:?}",
        dataset.len(),
        input_filepath
    );

    let mut features = Vec::with_capacity(dataset.len());
    for (row_index, row) in dataset.rows().iter().enumerate() {
        let row_number = row_index + 1;
        let geometry = match plan {
            ColumnPlan::CoordinatePair { lat, lon } => {
                let longitude = coordinate_from_cell(&row[lon], row_number, &dataset.headers()[lon])?;
                let latitude = coordinate_from_cell(&row[lat], row_number, &dataset.headers()[lat])?;
                // GeoJSON axis order: longitude first.
                geo::Geometry::Point(geo::Point::new(longitude, latitude))
            }
            ColumnPlan::Geometry(column) => geometry_from_cell(&row[column], row_number)?,
        };

        let geometry_column = match plan {
            ColumnPlan::Geometry(column) => Some(column),
            ColumnPlan::CoordinatePair { .. } => None,
        };
        let properties: geojson::JsonObject = dataset
            .headers()
            .iter()
            .zip(row.iter())
            .enumerate()
            .filter(|(column, _)| Some(*column) != geometry_column)
            .map(|(_, (header, value))| (header.clone(), value.clone()))
            .collect();

        features.push(geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(&geometry))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    let feature_collection = geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(wgs84_foreign_members()),
    };
    write_geojson_atomically(&geojson::GeoJson::from(feature_collection), output_filepath)?;
    log::info!("GeoJSON file has been saved to {:?}", output_filepath);
    Ok(())
}

/// The named CRS member written for WGS84 output, matching what common
/// GeoJSON writers emit for EPSG:4326.
fn wgs84_foreign_members() -> geojson::JsonObject {
    let mut members = geojson::JsonObject::new();
    members.insert(
        "crs".to_string(),
        serde_json::json!({
            "type": "name",
            "properties": { "name": "urn:ogc:def:crs:OGC:1.3:CRS84" }
        }),
    );
    members
}

/// Serialise to a temporary file next to the destination and rename it into
/// place, so a failed run never leaves a partial output file behind.
fn write_geojson_atomically(
    geojson_contents: &geojson::GeoJson,
    output_filepath: &Path,
) -> Result<(), ConvertError> {
    let output_dir = match output_filepath.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    let mut tmpfile = tempfile::NamedTempFile::new_in(output_dir)?;
    tmpfile.write_all(geojson_contents.to_string().as_bytes())?;
    tmpfile
        .persist(output_filepath)
        .map_err(|persist_error| persist_error.error)?;
    Ok(())
}
