use super::error::ConvertError;

/// How a geometry is obtained for each record. The two strategies are
/// mutually exclusive; `from_columns` rejects calls that supply both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometrySource {
    /// Build a point per record from a latitude column and a longitude column.
    CoordinatePair { lat_col: String, lon_col: String },
    /// Parse each record's geometry from a column holding WKT or GeoJSON text.
    GeometryColumn { column: String },
}

impl Default for GeometrySource {
    fn default() -> Self {
        GeometrySource::CoordinatePair {
            lat_col: "Latitude".to_string(),
            lon_col: "Longitude".to_string(),
        }
    }
}

impl GeometrySource {
    /// Map the optional-parameter surface (e.g. CLI flags) onto a source.
    ///
    /// # Returns
    /// The selected source, or a configuration error when no usable
    /// combination of columns was supplied.
    pub fn from_columns(
        lat_col: Option<String>,
        lon_col: Option<String>,
        geometry_col: Option<String>,
    ) -> Result<Self, ConvertError> {
        match (lat_col, lon_col, geometry_col) {
            (None, None, Some(column)) => Ok(GeometrySource::GeometryColumn { column }),
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => {
                Err(ConvertError::AmbiguousGeometrySource)
            }
            (Some(lat_col), Some(lon_col), None) => {
                Ok(GeometrySource::CoordinatePair { lat_col, lon_col })
            }
            _ => Err(ConvertError::NoGeometrySource),
        }
    }
}
