//! Display functions for command results

use super::formatters::{keyboard_rows, share_grid, tile_row};
use crate::commands::ScoreResult;
use crate::core::WORD_LENGTH;
use crate::game::{GameState, GameStatus, KeyboardHints, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the board: committed rows as colored tiles, the in-progress row
/// as typed letters, the rest as empty slots
pub fn print_board(state: &GameState) {
    println!();
    for row in 0..MAX_ATTEMPTS {
        if let Some(record) = state.history().get(row) {
            println!("  {}", tile_row(&record.word, record.feedback));
        } else if row == state.attempt_index() && !state.is_over() {
            let typed = state.current_text();
            let mut cells: Vec<String> = typed
                .chars()
                .map(|c| format!(" {c} ").bold().to_string())
                .collect();
            cells.resize(WORD_LENGTH, " _ ".bright_black().to_string());
            println!("  {}", cells.join(" "));
        } else {
            let empty = vec![" · ".bright_black().to_string(); WORD_LENGTH];
            println!("  {}", empty.join(" "));
        }
    }
    println!();
}

/// Print the hint-shaded keyboard
pub fn print_keyboard(hints: &KeyboardHints) {
    for (i, row) in keyboard_rows(hints).iter().enumerate() {
        println!("{}{row}", " ".repeat(2 + i * 2));
    }
    println!();
}

/// Print the win/loss banner and the share grid for a finished game
pub fn print_game_over(state: &GameState) {
    let attempts = state.history().len();

    match state.status() {
        GameStatus::Won => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                "  🎉  C O N G R A T U L A T I O N S !  🎉"
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());

            let performance = match attempts {
                1 => "🏆 Genius! First try!",
                2 => "⭐ Magnificent!",
                3 => "💫 Impressive!",
                4 => "✨ Splendid!",
                5 => "👍 Great!",
                _ => "😅 Phew!",
            };
            println!(
                "\n  {} Solved in {} {}.",
                performance.bright_yellow().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("{}", "  💀  G A M E   O V E R  💀".bright_red().bold());
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "\n  The word was {}.",
                state.target().text().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => return,
    }

    println!(
        "\n{}\n",
        share_grid(state.history().iter().map(|r| r.feedback))
    );
}

/// Print the feedback for a one-shot guess/target scoring
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "  {} vs {}",
        result.guess.text().bright_yellow().bold(),
        result.target.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", tile_row(&result.guess, result.feedback));
    println!("  {}\n", result.feedback.to_emoji());
}
