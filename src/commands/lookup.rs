//! City lookup command
//!
//! Inspects one catalog entry: where it is, how big it is, and which letter
//! an opponent would have to answer with if it were played.

use crate::catalog::Catalog;

/// Result of looking up a city
#[derive(Debug)]
pub struct LookupResult {
    pub name: String,
    pub population: u64,
    pub subject: String,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    /// The letter the next player must answer with after this city
    pub hands_over: char,
}

/// Look up a city by name, case-insensitively
///
/// # Errors
///
/// Returns an error if the name is blank or no catalog entry matches.
pub fn lookup_city(catalog: &Catalog, name: &str) -> Result<LookupResult, String> {
    if name.trim().is_empty() {
        return Err("enter a city name".to_string());
    }

    let record = catalog
        .lookup(name)
        .ok_or_else(|| format!("city '{}' is not in the catalog", name.trim()))?;

    // Names are validated non-empty, so a chain letter always exists
    let hands_over = record
        .chain_letter()
        .ok_or_else(|| format!("city '{}' has no usable letters", record.name()))?;

    Ok(LookupResult {
        name: record.name().to_string(),
        population: record.population(),
        subject: record.subject().to_string(),
        district: record.district().to_string(),
        latitude: record.latitude(),
        longitude: record.longitude(),
        hands_over,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CityRecord;

    fn fixture() -> Catalog {
        let records = vec![
            CityRecord::new("Казань", 1_308_660, "Татарстан", "Приволжский", 55.8, 49.1).unwrap(),
            CityRecord::new("Анапа", 89_905, "Краснодарский край", "Южный", 44.9, 37.3).unwrap(),
        ];
        Catalog::from_records(records).0
    }

    #[test]
    fn lookup_known_city() {
        let catalog = fixture();
        let result = lookup_city(&catalog, "  казань ").unwrap();

        assert_eq!(result.name, "Казань");
        assert_eq!(result.population, 1_308_660);
        assert_eq!(result.hands_over, 'н'); // soft sign skipped
    }

    #[test]
    fn lookup_unknown_city() {
        let catalog = fixture();
        let err = lookup_city(&catalog, "Атлантида").unwrap_err();
        assert_eq!(err, "city 'Атлантида' is not in the catalog");
    }

    #[test]
    fn lookup_result_is_debuggable() {
        let catalog = fixture();
        let result = lookup_city(&catalog, "Анапа").unwrap();
        assert!(format!("{result:?}").contains("Анапа"));
    }

    #[test]
    fn error_messages_share_the_engine_register() {
        // Lowercase throughout, like MoveError
        let catalog = fixture();
        for input in ["   ", "Атлантида"] {
            let err = lookup_city(&catalog, input).unwrap_err();
            assert!(
                err.chars().next().unwrap().is_lowercase(),
                "message should start lowercase: {err}"
            );
        }
    }

    #[test]
    fn lookup_blank_input() {
        let catalog = fixture();
        assert!(lookup_city(&catalog, "   ").is_err());
    }
}
