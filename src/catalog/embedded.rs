//! Embedded default dataset
//!
//! A curated list of Russian cities compiled into the binary, so the game
//! runs without any external file. Includes soft-sign endings (Казань,
//! Пермь, Тюмень) to exercise the chain rule out of the box.

/// Default city dataset in the standard wire shape
pub const EMBEDDED_CITIES_JSON: &str = include_str!("../../data/cities.json");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, records_from_json};

    #[test]
    fn embedded_dataset_parses_cleanly() {
        let outcome = records_from_json(EMBEDDED_CITIES_JSON).unwrap();
        assert!(outcome.skipped.is_empty(), "embedded entries must all validate");
        assert!(outcome.records.len() >= 30);
    }

    #[test]
    fn embedded_dataset_has_no_duplicate_names() {
        let outcome = records_from_json(EMBEDDED_CITIES_JSON).unwrap();
        let total = outcome.records.len();
        let (catalog, duplicates) = Catalog::from_records(outcome.records);
        assert!(duplicates.is_empty());
        assert_eq!(catalog.len(), total);
    }

    #[test]
    fn embedded_dataset_contains_soft_sign_cities() {
        let outcome = records_from_json(EMBEDDED_CITIES_JSON).unwrap();
        let (catalog, _) = Catalog::from_records(outcome.records);

        let kazan = catalog.lookup("казань").unwrap();
        assert_eq!(kazan.chain_letter(), Some('н'));
    }
}
