//! Chain-letter rules
//!
//! The game links cities by letters: each name must start with the letter the
//! previous name "hands over". Two Cyrillic letters (the soft and hard signs)
//! can never start a Russian word, so a name ending in one hands over the
//! nearest earlier letter instead.

/// Letters that cannot open a city name and are skipped when scanning for
/// the hand-over letter.
pub const EXCLUDED_LETTERS: [char; 2] = ['ь', 'ъ'];

/// First letter of a name, lowercased
///
/// Returns `None` for an empty string.
#[must_use]
pub fn first_letter(name: &str) -> Option<char> {
    name.chars().next().map(fold)
}

/// The letter a name hands over to the next player
///
/// Lowercases the name and scans from the end, skipping members of
/// [`EXCLUDED_LETTERS`]. If every character is excluded (degenerate name),
/// falls back to the literal last character of the lowercased name.
///
/// Returns `None` only for an empty string.
///
/// # Examples
/// ```
/// use city_chain::core::letters::last_significant_letter;
///
/// assert_eq!(last_significant_letter("Анапа"), Some('а'));
/// assert_eq!(last_significant_letter("Казань"), Some('н'));
/// assert_eq!(last_significant_letter(""), None);
/// ```
#[must_use]
pub fn last_significant_letter(name: &str) -> Option<char> {
    let lowered = name.to_lowercase();

    lowered
        .chars()
        .rev()
        .find(|c| !EXCLUDED_LETTERS.contains(c))
        .or_else(|| lowered.chars().last())
}

/// Case-insensitive letter comparison
#[must_use]
pub fn letters_match(a: char, b: char) -> bool {
    fold(a) == fold(b)
}

/// Lowercase a single char, keeping it as-is when case folding expands
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
