//! Catalog statistics command
//!
//! Summarizes the loaded dataset: how many cities are playable, which is the
//! largest, and which first letters dominate (a crowded letter is easy to
//! answer, a rare one is a dead-end).

use crate::catalog::Catalog;
use rustc_hash::FxHashMap;

/// Summary of a loaded catalog
pub struct CatalogStats {
    pub total: usize,
    /// Most populous city with its population, if the catalog is non-empty
    pub largest: Option<(String, u64)>,
    /// First letters by frequency, most common first
    pub first_letters: Vec<(char, usize)>,
}

/// Compute statistics over a catalog
#[must_use]
pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let largest = catalog
        .largest()
        .map(|c| (c.name().to_string(), c.population()));

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for record in catalog {
        if let Some(letter) = record.first_letter() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    let mut first_letters: Vec<(char, usize)> = counts.into_iter().collect();
    // Most common first; alphabetical among equals so output is stable
    first_letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    CatalogStats {
        total: catalog.len(),
        largest,
        first_letters,
    }
}
