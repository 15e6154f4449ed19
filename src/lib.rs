//! City Chain
//!
//! Engine and CLI for the classic "Cities" word-chain game: players
//! alternately name cities, each starting with the last significant letter
//! of the previous one (trailing 'ь'/'ъ' don't count), no repeats, and the
//! side with no legal city left loses.
//!
//! # Quick Start
//!
//! ```rust
//! use city_chain::catalog::{Catalog, records_from_json, EMBEDDED_CITIES_JSON};
//! use city_chain::engine::CityGame;
//!
//! let outcome = records_from_json(EMBEDDED_CITIES_JSON).unwrap();
//! let (catalog, _duplicates) = Catalog::from_records(outcome.records);
//!
//! let mut game = CityGame::new(&catalog);
//! game.human_turn("анапа").unwrap();
//!
//! // The computer answers with the first unused 'а' city in dataset order
//! let reply = game.computer_turn().unwrap();
//! assert_eq!(reply.first_letter(), Some('а'));
//! ```

// Core domain types
pub mod core;

// City dataset
pub mod catalog;

// Game rules and termination
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
