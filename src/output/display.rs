//! Display functions for command results

use super::formatters::{format_population, letter_display};
use crate::commands::{CatalogStats, LookupResult};
use crate::core::CityRecord;
use colored::Colorize;

/// Print the rules banner shown at the start of an interactive game
pub fn print_rules_banner(catalog_size: usize) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!("{}", "  Cities — the city-chain game".bold());
    println!("{}", "═".repeat(62).bright_cyan());
    println!("\nName a city starting with the last letter of the previous one.");
    println!("Trailing 'ь' and 'ъ' don't count — use the letter before them.");
    println!("No repeats. You move first; the computer answers.");
    println!(
        "{} cities in play. Type 'stop' to leave.\n",
        catalog_size.to_string().bright_yellow()
    );
}

/// Print the automated opponent's reply and the letter it demands back
pub fn print_computer_reply(city: &CityRecord) {
    let demand = city
        .chain_letter()
        .map(letter_display)
        .unwrap_or_default();
    println!(
        "{} {} — your turn on '{}'\n",
        "Computer:".bright_blue(),
        city.name().bold(),
        demand.bright_yellow()
    );
}

/// Print the end-of-game summary
pub fn print_game_summary(total: usize, last_city: Option<&str>) {
    println!("\n{}", "─".repeat(62).bright_black());
    println!("Cities named: {}", total.to_string().bright_yellow());
    if let Some(name) = last_city {
        println!("Last city: {}", name.bold());
    }
    println!("{}\n", "─".repeat(62).bright_black());
}

/// Print the result of a city lookup
pub fn print_lookup_result(result: &LookupResult) {
    println!("\n{}", result.name.bright_yellow().bold());
    println!(
        "  Population: {}",
        format_population(result.population).bright_white()
    );
    if !result.subject.is_empty() {
        println!("  Subject:    {}", result.subject);
    }
    if !result.district.is_empty() {
        println!("  District:   {}", result.district);
    }
    println!(
        "  Location:   {:.4}, {:.4}",
        result.latitude, result.longitude
    );
    println!(
        "  Hands over: '{}' to the next player\n",
        letter_display(result.hands_over).bright_cyan()
    );
}

/// Print catalog statistics
pub fn print_catalog_stats(stats: &CatalogStats) {
    println!(
        "\nCities in catalog: {}",
        stats.total.to_string().bright_yellow()
    );

    if let Some((name, population)) = &stats.largest {
        println!(
            "Largest city: {} ({})",
            name.bold(),
            format_population(*population).bright_white()
        );
    }

    if !stats.first_letters.is_empty() {
        println!("\nMost common first letters:");
        for (letter, count) in stats.first_letters.iter().take(5) {
            println!(
                "  {} — {} {}",
                letter_display(*letter).bright_cyan(),
                count,
                if *count == 1 { "city" } else { "cities" }
            );
        }
    }
    println!();
}
