//! Command implementations

pub mod lookup;
pub mod play;
pub mod stats;

pub use lookup::{LookupResult, lookup_city};
pub use play::{PlayOutcome, run_play};
pub use stats::{CatalogStats, catalog_stats};
