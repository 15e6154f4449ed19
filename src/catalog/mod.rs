//! City catalog
//!
//! An immutable, validated collection of city records in dataset order, with
//! an index from normalized name to record for O(1) lookup. Built once at
//! startup; read-only for the lifetime of the process.

pub mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_CITIES_JSON;
pub use loader::{LoadError, LoadOutcome, SkippedRecord, load_from_file, records_from_json};

use crate::core::{CityRecord, normalize_name};
use rustc_hash::FxHashMap;

/// Ordered, uniquely-named collection of playable cities
///
/// Dataset order is load order and is observable: the automated opponent
/// always answers with the first eligible record in this order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CityRecord>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from validated records
    ///
    /// Records whose normalized name collides with an earlier record are
    /// dropped (first record wins) and returned as duplicates so the caller
    /// can report them. The surviving records keep their input order.
    #[must_use]
    pub fn from_records(records: Vec<CityRecord>) -> (Self, Vec<CityRecord>) {
        let mut kept = Vec::with_capacity(records.len());
        let mut index = FxHashMap::default();
        let mut duplicates = Vec::new();

        for record in records {
            let key = record.key();
            if index.contains_key(&key) {
                duplicates.push(record);
            } else {
                index.insert(key, kept.len());
                kept.push(record);
            }
        }

        (
            Self {
                records: kept,
                index,
            },
            duplicates,
        )
    }

    /// Look up a city by name, case- and whitespace-insensitively
    ///
    /// The raw input goes through the same normalization used when the index
    /// was built, so "  кАзАнь " finds "Казань".
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&CityRecord> {
        let key = normalize_name(raw);
        self.index.get(&key).map(|&i| &self.records[i])
    }

    /// The value cities are ordered by
    ///
    /// Equal populations compare equal; callers wanting a stable order must
    /// supply their own secondary key.
    #[must_use]
    pub const fn ordering_key(record: &CityRecord) -> u64 {
        record.population()
    }

    /// The most populous city, first of equals in dataset order
    #[must_use]
    pub fn largest(&self) -> Option<&CityRecord> {
        self.records
            .iter()
            .reduce(|best, c| if c.population() > best.population() { c } else { best })
    }

    /// Iterate records in dataset order
    pub fn iter(&self) -> std::slice::Iter<'_, CityRecord> {
        self.records.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CityRecord;
    type IntoIter = std::slice::Iter<'a, CityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, population: i64) -> CityRecord {
        CityRecord::new(name, population, "субъект", "округ", 50.0, 50.0).unwrap()
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let (catalog, _) = Catalog::from_records(vec![city("Казань", 100), city("Омск", 200)]);

        assert_eq!(catalog.lookup("казань").unwrap().name(), "Казань");
        assert_eq!(catalog.lookup("  КАЗАНЬ ").unwrap().name(), "Казань");
        assert!(catalog.lookup("Тверь").is_none());
    }

    #[test]
    fn lookup_multi_token_name() {
        let (catalog, _) = Catalog::from_records(vec![city("Нижний Новгород", 100)]);

        assert!(catalog.lookup("нижний   новгород").is_some());
        assert!(catalog.lookup("нижний").is_none());
    }

    #[test]
    fn duplicates_first_record_wins() {
        let (catalog, duplicates) = Catalog::from_records(vec![
            city("Омск", 100),
            city("омск", 999),
            city("Тверь", 50),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].population(), 999);
        assert_eq!(catalog.lookup("омск").unwrap().population(), 100);
    }

    #[test]
    fn iteration_preserves_dataset_order() {
        let (catalog, _) =
            Catalog::from_records(vec![city("Омск", 3), city("Анапа", 1), city("Тверь", 2)]);

        let names: Vec<&str> = catalog.iter().map(CityRecord::name).collect();
        assert_eq!(names, vec!["Омск", "Анапа", "Тверь"]);
    }

    #[test]
    fn ordering_key_is_population() {
        let a = city("Абаза", 15_335);
        let b = city("Абакан", 187_239);
        assert!(Catalog::ordering_key(&a) < Catalog::ordering_key(&b));

        // Equal populations compare equal, no tie-break
        let c = city("Тверь", 15_335);
        assert_eq!(Catalog::ordering_key(&a), Catalog::ordering_key(&c));
    }

    #[test]
    fn largest_by_population() {
        let (catalog, _) =
            Catalog::from_records(vec![city("Омск", 3), city("Анапа", 9), city("Тверь", 2)]);
        assert_eq!(catalog.largest().unwrap().name(), "Анапа");
    }

    #[test]
    fn largest_prefers_earlier_of_equals() {
        let (catalog, _) = Catalog::from_records(vec![city("Омск", 5), city("Анапа", 5)]);
        assert_eq!(catalog.largest().unwrap().name(), "Омск");
    }

    #[test]
    fn empty_catalog() {
        let (catalog, _) = Catalog::from_records(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.largest().is_none());
        assert!(catalog.lookup("Омск").is_none());
    }
}
