//! Interactive game mode
//!
//! The turn-taking loop: the human names a city, the engine validates it,
//! the automated opponent answers with the first eligible city, and play
//! continues until one side is stuck or the human quits.

use crate::catalog::Catalog;
use crate::engine::CityGame;
use crate::output::display::{print_computer_reply, print_game_summary, print_rules_banner};
use colored::Colorize;
use std::io::{self, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The human typed a stop word
    Quit,
    /// The automated side had no answer
    HumanWon,
    /// The human's side had no answer
    ComputerWon,
}

/// Words that end the session instead of being played
const STOP_WORDS: [&str; 4] = ["stop", "quit", "exit", "стоп"];

/// Whether an input asks to end the session
#[must_use]
pub fn is_stop_word(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    STOP_WORDS.contains(&lowered.as_str())
}

/// Run the interactive game loop
///
/// The human always moves first; the engine leaves turn order to this loop.
///
/// # Errors
///
/// Returns an error only for I/O failures reading user input; rejected
/// moves are printed and re-prompted.
pub fn run_play(catalog: &Catalog) -> Result<PlayOutcome, String> {
    if catalog.is_empty() {
        return Err("the city catalog is empty, nothing to play with".to_string());
    }

    print_rules_banner(catalog.len());

    let mut game = CityGame::new(catalog);

    let outcome = loop {
        let prompt = match game.required_letter() {
            Some(letter) => format!("Your move, a city starting with '{}'", letter.to_uppercase()),
            None => "Your move (any city)".to_string(),
        };

        let input = get_user_input(&prompt)?;

        if is_stop_word(&input) {
            println!("\n{}", "You left the game.".bright_black());
            break PlayOutcome::Quit;
        }

        match game.human_turn(&input) {
            Err(reason) => {
                println!("{} {reason}\n", "✗".bright_red());
                continue;
            }
            Ok(record) => {
                println!("{} {} accepted", "✓".bright_green(), record.name().bold());
            }
        }

        // Human moved; is the computer already stuck?
        if game.is_game_over() {
            println!(
                "\n{}",
                "The computer has no city to answer with — you win!"
                    .bright_green()
                    .bold()
            );
            break PlayOutcome::HumanWon;
        }

        match game.computer_turn() {
            Some(reply) => {
                print_computer_reply(reply);
                if game.is_game_over() {
                    println!(
                        "\n{}",
                        "No city left for you to answer with — the computer wins."
                            .bright_red()
                            .bold()
                    );
                    break PlayOutcome::ComputerWon;
                }
            }
            None => {
                println!(
                    "\n{}",
                    "The computer concedes — you win!".bright_green().bold()
                );
                break PlayOutcome::HumanWon;
            }
        }
    };

    print_game_summary(game.move_count(), game.last_played().map(|c| c.name()));
    Ok(outcome)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_recognized() {
        assert!(is_stop_word("stop"));
        assert!(is_stop_word("  QUIT "));
        assert!(is_stop_word("exit"));
        assert!(is_stop_word("стоп"));
        assert!(is_stop_word("СТОП"));
    }

    #[test]
    fn city_names_are_not_stop_words() {
        assert!(!is_stop_word("Москва"));
        assert!(!is_stop_word(""));
        assert!(!is_stop_word("стоп-кран"));
    }
}
