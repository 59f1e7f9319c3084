use std::path::Path;

use serde_json::Value as JsonValue;

use super::value::parse_scalar;
use crate::convert::error::ConvertError;

/// A fully materialised CSV file: one header and one typed row per record.
/// Rows keep the input order; every row has one value per header column.
#[derive(Debug)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<JsonValue>>,
}

impl Dataset {
    pub fn from_csv_file(filepath: &Path) -> Result<Self, ConvertError> {
        let mut reader = csv::Reader::from_path(filepath)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(parse_scalar).collect());
        }
        log::debug!(
            "Read {} records with {} columns from {:?}",
            rows.len(),
            headers.len(),
            filepath
        );
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn rows(&self) -> &[Vec<JsonValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
