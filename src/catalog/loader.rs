//! City dataset loading
//!
//! Parses the JSON dataset into validated [`CityRecord`]s. A record that
//! fails validation is skipped with a diagnostic, not fatal to the whole
//! load; only a malformed top-level document is the caller's error.

use crate::core::{CityError, CityRecord};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Wire shape of one dataset entry
///
/// Coordinates arrive as strings ("55.7963") and must parse to floats;
/// population arrives signed so out-of-range values reach validation
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct RawCity {
    name: String,
    population: i64,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    district: String,
    coords: RawCoords,
}

#[derive(Debug, Deserialize)]
struct RawCoords {
    lat: String,
    lon: String,
}

/// One dataset entry that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Name as it appeared in the dataset, or "<unnamed>"
    pub name: String,
    /// Human-readable reason the record was dropped
    pub reason: String,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped city '{}': {}", self.name, self.reason)
    }
}

/// Result of loading a dataset: the surviving records plus diagnostics
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<CityRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// Error type for dataset loading
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read city dataset: {e}"),
            Self::Json(e) => write!(f, "city dataset is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Parse a JSON dataset into validated records
///
/// Entries that fail validation (empty name, non-positive population,
/// unparsable coordinates) are collected in `skipped`; loading continues.
///
/// # Errors
/// Returns a `serde_json::Error` only when the document itself is malformed.
///
/// # Examples
/// ```
/// use city_chain::catalog::records_from_json;
///
/// let json = r#"[{"name": "Анапа", "population": 89905,
///                 "subject": "Краснодарский край", "district": "Южный",
///                 "coords": {"lat": "44.89", "lon": "37.31"}}]"#;
/// let outcome = records_from_json(json).unwrap();
/// assert_eq!(outcome.records.len(), 1);
/// assert!(outcome.skipped.is_empty());
/// ```
pub fn records_from_json(json: &str) -> Result<LoadOutcome, serde_json::Error> {
    let raw: Vec<RawCity> = serde_json::from_str(json)?;

    let mut outcome = LoadOutcome::default();
    for item in raw {
        match build_record(&item) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => outcome.skipped.push(SkippedRecord {
                name: display_name(&item),
                reason,
            }),
        }
    }

    Ok(outcome)
}

/// Load and parse a dataset file
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Json`
/// if its top-level structure is malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LoadOutcome, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(records_from_json(&content)?)
}

fn build_record(item: &RawCity) -> Result<CityRecord, String> {
    let latitude = parse_coord("lat", &item.coords.lat)?;
    let longitude = parse_coord("lon", &item.coords.lon)?;

    CityRecord::new(
        &item.name,
        item.population,
        &item.subject,
        &item.district,
        latitude,
        longitude,
    )
    .map_err(|e: CityError| e.to_string())
}

fn parse_coord(axis: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("cannot parse coordinate {axis}={value:?}"))
}

fn display_name(item: &RawCity) -> String {
    let trimmed = item.name.trim();
    if trimmed.is_empty() {
        "<unnamed>".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_valid_entries() {
        let json = r#"[
            {"name": "Анапа", "population": 89905, "subject": "Краснодарский край",
             "district": "Южный", "coords": {"lat": "44.8945", "lon": "37.3166"}},
            {"name": "Абакан", "population": 187239, "subject": "Хакасия",
             "district": "Сибирский", "coords": {"lat": "53.7156", "lon": "91.4292"}}
        ]"#;

        let outcome = records_from_json(json).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.records[0].name(), "Анапа");
        assert!((outcome.records[0].latitude() - 44.8945).abs() < 1e-9);
    }

    #[test]
    fn skips_unparsable_coordinates() {
        let json = r#"[
            {"name": "Анапа", "population": 89905, "subject": "", "district": "",
             "coords": {"lat": "not-a-number", "lon": "37.3"}},
            {"name": "Омск", "population": 1125695, "subject": "", "district": "",
             "coords": {"lat": "54.9885", "lon": "73.3242"}}
        ]"#;

        let outcome = records_from_json(json).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name(), "Омск");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].name, "Анапа");
        assert!(outcome.skipped[0].reason.contains("lat"));
    }

    #[test]
    fn skips_non_positive_population() {
        let json = r#"[
            {"name": "Анапа", "population": 0, "subject": "", "district": "",
             "coords": {"lat": "44.8", "lon": "37.3"}}
        ]"#;

        let outcome = records_from_json(json).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].reason.contains("positive"));
    }

    #[test]
    fn skips_blank_name_with_placeholder() {
        let json = r#"[
            {"name": "  ", "population": 10, "subject": "", "district": "",
             "coords": {"lat": "1.0", "lon": "2.0"}}
        ]"#;

        let outcome = records_from_json(json).unwrap();
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].name, "<unnamed>");
    }

    #[test]
    fn missing_subject_and_district_default_to_empty() {
        let json = r#"[
            {"name": "Омск", "population": 10, "coords": {"lat": "1.0", "lon": "2.0"}}
        ]"#;

        let outcome = records_from_json(json).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].subject(), "");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(records_from_json("{not json").is_err());
        // Missing coords is a document-shape error, not a per-record skip
        assert!(records_from_json(r#"[{"name": "Омск", "population": 1}]"#).is_err());
    }

    #[test]
    fn load_error_display() {
        let err = records_from_json("[").unwrap_err();
        let wrapped = LoadError::from(err);
        assert!(wrapped.to_string().contains("not valid JSON"));
    }
}
