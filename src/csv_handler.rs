use crate::error::{CrateError, Result};
use crate::taxon::normalizer::genus_of;
use crate::vernacular::VernacularNamed;
use csv::StringRecord;
use log::debug;
use serde::Serialize;
use std::path::Path;

// Represents a species row from the input CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRecord {
    pub scientific_name: String,
    pub vernacular_name: Option<String>,
    pub genus: Option<String>,
    pub family: Option<String>,
}

impl VernacularNamed for InputRecord {
    fn vernacular_name(&self) -> Option<&str> {
        self.vernacular_name.as_deref()
    }
}

/// Header names for the columns the loader reads.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    pub scientific_name: String,
    pub vernacular_name: String,
    pub genus: String,
    pub family: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            scientific_name: "scientific_name".to_string(),
            vernacular_name: "vernacular_name".to_string(),
            genus: "genus".to_string(),
            family: "family".to_string(),
        }
    }
}

fn field(row: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

// Loads and validates the input CSV file.
pub fn load_and_validate_csv(file_path: &Path, columns: &ColumnConfig) -> Result<Vec<InputRecord>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    // 1. Validate Headers
    let scientific_idx = position(&columns.scientific_name)
        .ok_or_else(|| CrateError::MissingHeader(columns.scientific_name.clone()))?;
    let vernacular_idx = position(&columns.vernacular_name)
        .ok_or_else(|| CrateError::MissingHeader(columns.vernacular_name.clone()))?;
    let genus_idx = position(&columns.genus);
    let family_idx = position(&columns.family);
    if genus_idx.is_none() {
        debug!(
            "No '{}' column; genus will be taken from the scientific name.",
            columns.genus
        );
    }

    let mut valid_records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = result?;
        let row_num = i + 2; // +1 for header, +1 for 0-based index

        // 2. Validate Required Values are not empty
        let scientific_name =
            field(&row, Some(scientific_idx)).ok_or_else(|| CrateError::MissingValue {
                column: columns.scientific_name.clone(),
                row: row_num,
            })?;
        let genus = field(&row, genus_idx).or_else(|| genus_of(&scientific_name));

        valid_records.push(InputRecord {
            vernacular_name: field(&row, Some(vernacular_idx)),
            family: field(&row, family_idx),
            genus,
            scientific_name,
        });
    }

    Ok(valid_records)
}
