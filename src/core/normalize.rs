//! Name normalization
//!
//! One normalization point shared by catalog construction, lookup, and move
//! validation, so "  нижний   НОВГОРОД " and "Нижний Новгород" key to the
//! same record. Two policies cover the two input shapes.

/// How a raw name gets normalized, chosen from the shape of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePolicy {
    /// One token: trim and lowercase
    SingleToken,
    /// Several tokens: trim, collapse interior whitespace runs, lowercase
    MultiToken,
}

impl NamePolicy {
    /// Pick the policy for a raw input
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        if raw.trim().split_whitespace().nth(1).is_some() {
            Self::MultiToken
        } else {
            Self::SingleToken
        }
    }

    /// Apply this policy to a raw name
    #[must_use]
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::SingleToken => raw.trim().to_lowercase(),
            Self::MultiToken => {
                let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
                joined.to_lowercase()
            }
        }
    }
}

/// Normalize a raw city name into its lookup key
///
/// # Examples
/// ```
/// use city_chain::core::normalize_name;
///
/// assert_eq!(normalize_name("  Анапа "), "анапа");
/// assert_eq!(normalize_name("Нижний   Новгород"), "нижний новгород");
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    NamePolicy::detect(raw).apply(raw)
}
