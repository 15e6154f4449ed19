//! Formatting utilities for terminal output

/// Format a population with thousands separators
///
/// # Examples
/// ```
/// use city_chain::output::formatters::format_population;
///
/// assert_eq!(format_population(1_125_695), "1,125,695");
/// assert_eq!(format_population(618), "618");
/// ```
#[must_use]
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Uppercase a letter for display in prompts and summaries
#[must_use]
pub fn letter_display(letter: char) -> String {
    letter.to_uppercase().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_under_a_thousand() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
    }

    #[test]
    fn population_grouping() {
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(89_905), "89,905");
        assert_eq!(format_population(12_655_050), "12,655,050");
    }

    #[test]
    fn letter_display_uppercases() {
        assert_eq!(letter_display('н'), "Н");
        assert_eq!(letter_display('a'), "A");
    }
}
