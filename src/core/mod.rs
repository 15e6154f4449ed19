//! Core domain types for the city-chain game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure and testable: the validated city record, the
//! chain-letter rules, and the shared name normalization.

mod city;
pub mod letters;
mod normalize;

pub use city::{CityError, CityRecord};
pub use normalize::{NamePolicy, normalize_name};
