//! City record
//!
//! A validated city entry: the engine plays with its name, orders by its
//! population, and carries the rest (region, coordinates) for display only.

use super::letters;
use super::normalize::normalize_name;
use std::fmt;

/// One validated city
///
/// Constructed once at catalog load; immutable afterwards. Population is the
/// only ordering key — two records with equal population compare equal for
/// ordering purposes, with no tie-break.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    name: String,
    population: u64,
    subject: String,
    district: String,
    latitude: f64,
    longitude: f64,
}

/// Error type for records that fail validation
#[derive(Debug, Clone, PartialEq)]
pub enum CityError {
    EmptyName,
    InvalidPopulation(i64),
    InvalidCoordinate { axis: &'static str, value: f64 },
}

impl fmt::Display for CityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "city name must be a non-empty string"),
            Self::InvalidPopulation(pop) => {
                write!(f, "population must be a positive integer, got {pop}")
            }
            Self::InvalidCoordinate { axis, value } => {
                write!(f, "coordinate {axis} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for CityError {}

impl CityRecord {
    /// Create a validated city record
    ///
    /// The name is stored trimmed but otherwise as spelled in the dataset;
    /// lookups go through the normalized [`key`](Self::key) instead.
    ///
    /// # Errors
    /// Returns `CityError` if:
    /// - the name is empty or whitespace-only
    /// - the population is not strictly positive
    /// - a coordinate is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use city_chain::core::CityRecord;
    ///
    /// let city = CityRecord::new("Анапа", 89_905, "Краснодарский край", "Южный", 44.8945, 37.3166)
    ///     .unwrap();
    /// assert_eq!(city.name(), "Анапа");
    ///
    /// assert!(CityRecord::new("  ", 1, "", "", 0.0, 0.0).is_err());
    /// assert!(CityRecord::new("Анапа", 0, "", "", 0.0, 0.0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        population: i64,
        subject: impl Into<String>,
        district: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CityError> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(CityError::EmptyName);
        }

        if population <= 0 {
            return Err(CityError::InvalidPopulation(population));
        }

        if !latitude.is_finite() {
            return Err(CityError::InvalidCoordinate {
                axis: "lat",
                value: latitude,
            });
        }

        if !longitude.is_finite() {
            return Err(CityError::InvalidCoordinate {
                axis: "lon",
                value: longitude,
            });
        }

        Ok(Self {
            name,
            population: population as u64,
            subject: subject.into(),
            district: district.into(),
            latitude,
            longitude,
        })
    }

    /// Display name, as spelled in the dataset
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized lookup key for this record
    #[must_use]
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Population — the only ordering key
    #[inline]
    #[must_use]
    pub const fn population(&self) -> u64 {
        self.population
    }

    /// Federal subject (region), display only
    #[inline]
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Federal district, display only
    #[inline]
    #[must_use]
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Latitude in degrees, display only
    #[inline]
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, display only
    #[inline]
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The letter this name must start with to answer, lowercased
    ///
    /// Never `None` in practice: the name is validated non-empty.
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        letters::first_letter(&self.name)
    }

    /// The letter this name hands over to the next player
    ///
    /// Skips trailing soft/hard signs; see
    /// [`letters::last_significant_letter`].
    #[must_use]
    pub fn chain_letter(&self) -> Option<char> {
        letters::last_significant_letter(&self.name)
    }
}

impl fmt::Display for CityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.subject, self.district)
    }
}
