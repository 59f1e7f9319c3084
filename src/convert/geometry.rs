use serde_json::Value as JsonValue;
use wkt::TryFromWkt;

use super::error::ConvertError;

/// Parse a geometry from the text held in a geometry column.
///
/// Text starting with `{` is read as a GeoJSON geometry object; anything else
/// is read as WKT. The raw value is echoed back in the error so a bad row can
/// be located in the source file.
pub fn geometry_from_text(raw: &str) -> Result<geo::Geometry, ConvertError> {
    if raw.trim_start().starts_with('{') {
        let parsed: geojson::GeoJson = raw.parse().map_err(|_| ConvertError::InvalidGeoJson {
            raw: raw.to_string(),
        })?;
        let geometry =
            geojson::Geometry::try_from(parsed).map_err(|_| ConvertError::InvalidGeoJson {
                raw: raw.to_string(),
            })?;
        return geo::Geometry::try_from(geometry).map_err(|_| ConvertError::InvalidGeoJson {
            raw: raw.to_string(),
        });
    }
    geo::Geometry::try_from_wkt_str(raw).map_err(|_| ConvertError::InvalidWkt {
        raw: raw.to_string(),
    })
}

/// Resolve one record's geometry column cell.
pub fn geometry_from_cell(value: &JsonValue, row: usize) -> Result<geo::Geometry, ConvertError> {
    match value {
        JsonValue::String(text) => geometry_from_text(text),
        JsonValue::Null => Err(ConvertError::NullGeometry { row }),
        other => Err(ConvertError::InvalidWkt {
            raw: other.to_string(),
        }),
    }
}

/// Read one coordinate component out of a latitude or longitude cell.
pub fn coordinate_from_cell(
    value: &JsonValue,
    row: usize,
    column: &str,
) -> Result<f64, ConvertError> {
    let parsed = match value {
        JsonValue::Number(number) => number.as_f64(),
        JsonValue::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ConvertError::InvalidCoordinate {
        row,
        column: column.to_string(),
        value: match value {
            JsonValue::String(text) => text.clone(),
            other => other.to_string(),
        },
    })
}
