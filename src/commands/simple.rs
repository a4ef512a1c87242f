//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: type a full word per turn.

use crate::core::Word;
use crate::game::{GameError, GameState, GameStatus, KeyboardHints, MAX_ATTEMPTS};
use crate::output::{print_board, print_game_over, print_keyboard};
use crate::wordlists::random_target;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(pool: &[Word], target: Word) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle - Simple Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("You have {MAX_ATTEMPTS} guesses to find the hidden word. After each guess:");
    println!("  - 🟩 letter is in the right spot");
    println!("  - 🟨 letter is in the word, wrong spot");
    println!("  - ⬜ letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut state = GameState::new(target);
    let mut hints = KeyboardHints::new();

    loop {
        print_board(&state);
        print_keyboard(&hints);

        let remaining = MAX_ATTEMPTS - state.attempt_index();
        let input = get_user_input(&format!("Guess ({remaining} left)"))?.to_uppercase();

        match input.as_str() {
            "QUIT" | "Q" | "EXIT" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "NEW" | "N" => {
                state = GameState::new(random_target(pool));
                hints.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if !input.chars().all(|c| c.is_ascii_alphabetic()) {
            println!("{}", "❌ Letters only, please!".red());
            continue;
        }

        // Drive the row through the command interface: extra letters are
        // ignored with a note, exactly like mashing keys on a full row
        for letter in input.chars() {
            if state.append_letter(letter) == Err(GameError::RowFull) {
                println!("{}", "Row is full - ignoring extra letters".yellow());
                break;
            }
        }

        match state.commit_attempt() {
            Err(error) => {
                println!("{}", format!("❌ {error}").red());
                // Reset the half-typed row for the next prompt
                while state.remove_letter().is_ok() {}
            }
            Ok(outcome) => {
                let record = state.history().last().expect("commit stores a record");
                hints.record(&record.word, record.feedback);

                match outcome.status {
                    GameStatus::InProgress => {}
                    GameStatus::Won | GameStatus::Lost => {
                        print_board(&state);
                        print_game_over(&state);

                        match get_user_input("Play again? (yes/no)")?
                            .to_lowercase()
                            .as_str()
                        {
                            "yes" | "y" => {
                                state = GameState::new(random_target(pool));
                                hints.reset();
                                println!("\n🔄 New game started!\n");
                            }
                            _ => {
                                println!("\n👋 Thanks for playing!\n");
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
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
