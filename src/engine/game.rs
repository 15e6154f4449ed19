//! The city-chain game engine
//!
//! Owns one game session over a borrowed catalog: the cities played so far,
//! the letter the next city must start with, and the three operations the
//! turn loop drives — the human move, the automated reply, and the
//! terminal check.

use crate::catalog::Catalog;
use crate::core::{CityRecord, letters, normalize_name};
use rustc_hash::FxHashSet;
use std::fmt;

/// A rejected human move, with the reason play was refused
///
/// These are ordinary rule violations, not failures: the game state is left
/// untouched and play continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Input was empty or whitespace-only
    EmptyInput,
    /// No catalog entry matches the normalized name
    UnknownCity(String),
    /// The city was already played this session
    AlreadyPlayed(String),
    /// The name does not start with the required letter
    WrongFirstLetter { required: char, found: char },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "enter a city name"),
            Self::UnknownCity(name) => write!(f, "city '{name}' is not in the catalog"),
            Self::AlreadyPlayed(name) => write!(f, "city '{name}' has already been played"),
            Self::WrongFirstLetter { required, found } => write!(
                f,
                "city must start with '{}', got '{}'",
                required.to_uppercase(),
                found.to_uppercase()
            ),
        }
    }
}

impl std::error::Error for MoveError {}

/// One game session of the city-chain game
///
/// The engine does not enforce whose turn it is: `human_turn` and
/// `computer_turn` are independently callable, and alternating them is the
/// driving loop's obligation. The intended flow has the human move first;
/// the automated side never opens.
pub struct CityGame<'a> {
    catalog: &'a Catalog,
    played: Vec<&'a CityRecord>,
    used_keys: FxHashSet<String>,
    required_letter: Option<char>,
}

impl<'a> CityGame<'a> {
    /// Start a new session over a catalog
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            played: Vec::new(),
            used_keys: FxHashSet::default(),
            required_letter: None,
        }
    }

    /// Play the human's city
    ///
    /// The raw input is trimmed and case-folded through the same
    /// normalization the catalog index uses. On success the record is
    /// appended to the play history and the required letter becomes the
    /// name's last significant letter.
    ///
    /// # Errors
    /// Returns a [`MoveError`] naming the violated rule; the game state is
    /// unchanged on any error.
    pub fn human_turn(&mut self, raw_input: &str) -> Result<&'a CityRecord, MoveError> {
        let normalized = normalize_name(raw_input);
        if normalized.is_empty() {
            return Err(MoveError::EmptyInput);
        }

        let record = self
            .catalog
            .lookup(&normalized)
            .ok_or_else(|| MoveError::UnknownCity(raw_input.trim().to_string()))?;

        if self.used_keys.contains(&record.key()) {
            return Err(MoveError::AlreadyPlayed(record.name().to_string()));
        }

        if let Some(required) = self.required_letter {
            // Normalization keeps the first char, so this cannot be None here
            let found = letters::first_letter(&normalized).ok_or(MoveError::EmptyInput)?;
            if !letters::letters_match(found, required) {
                return Err(MoveError::WrongFirstLetter { required, found });
            }
        }

        self.play(record);
        Ok(record)
    }

    /// Play the automated opponent's reply
    ///
    /// Scans the catalog in dataset order and plays the FIRST record that is
    /// unused and starts with the required letter — deterministic, no
    /// randomness or quality heuristic. Returns `None` when no required
    /// letter is active yet (the human opens) or when no eligible city
    /// remains, which is the concession signal.
    pub fn computer_turn(&mut self) -> Option<&'a CityRecord> {
        let required = self.required_letter?;

        let record = self
            .catalog
            .iter()
            .find(|c| self.is_eligible(c, required))?;

        self.play(record);
        Some(record)
    }

    /// Whether the side to move has no legal city left
    ///
    /// `false` before the first move (no required letter yet). Pure and
    /// idempotent; call it after either side's move to check whether the
    /// other side is stuck.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        match self.required_letter {
            None => false,
            Some(required) => !self.catalog.iter().any(|c| self.is_eligible(c, required)),
        }
    }

    /// The letter the next city must start with, if a move has been made
    #[must_use]
    pub const fn required_letter(&self) -> Option<char> {
        self.required_letter
    }

    /// Cities played so far, in play order
    #[must_use]
    pub fn played(&self) -> &[&'a CityRecord] {
        &self.played
    }

    /// The most recently played city
    #[must_use]
    pub fn last_played(&self) -> Option<&'a CityRecord> {
        self.played.last().copied()
    }

    /// Number of cities played so far
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.played.len()
    }

    fn is_eligible(&self, record: &CityRecord, required: char) -> bool {
        if self.used_keys.contains(&record.key()) {
            return false;
        }
        record
            .first_letter()
            .is_some_and(|first| letters::letters_match(first, required))
    }

    fn play(&mut self, record: &'a CityRecord) {
        self.used_keys.insert(record.key());
        self.played.push(record);
        self.required_letter = record.chain_letter();
    }
}
