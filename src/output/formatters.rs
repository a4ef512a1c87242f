//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, Word};
use crate::game::{KEY_ROWS, KeyboardHints};
use colored::{ColoredString, Colorize};

/// Color one letter as a board tile according to its score
#[must_use]
pub fn tile(letter: char, score: LetterScore) -> ColoredString {
    let cell = format!(" {letter} ");
    match score {
        LetterScore::Correct => cell.black().on_green().bold(),
        LetterScore::Present => cell.black().on_yellow().bold(),
        LetterScore::Absent => cell.white().on_bright_black(),
    }
}

/// Format a committed guess as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: Feedback) -> String {
    word.letters()
        .iter()
        .enumerate()
        .map(|(i, &letter)| tile(letter as char, feedback.score_at(i)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the share-style emoji grid for a finished game
#[must_use]
pub fn share_grid(feedbacks: impl IntoIterator<Item = Feedback>) -> String {
    feedbacks
        .into_iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the on-screen keyboard with per-letter hints, one string per row
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEY_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| {
                    let key = letter as char;
                    match hints.best(letter) {
                        Some(LetterScore::Correct) => key.to_string().black().on_green().bold(),
                        Some(LetterScore::Present) => key.to_string().black().on_yellow().bold(),
                        Some(LetterScore::Absent) => key.to_string().bright_black(),
                        None => key.to_string().white(),
                    }
                    .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{Absent, Correct, Present};

    #[test]
    fn share_grid_one_line_per_attempt() {
        let grid = share_grid([
            Feedback::new([Correct, Present, Absent, Absent, Absent]),
            Feedback::PERFECT,
        ]);

        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "🟩🟨⬜⬜⬜");
        assert_eq!(lines[1], "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tile_row_covers_every_letter() {
        // Force colors off so the test sees plain text
        colored::control::set_override(false);

        let word = Word::new("crane").unwrap();
        let row = tile_row(&word, Feedback::PERFECT);

        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn keyboard_rows_render_all_three() {
        colored::control::set_override(false);

        let rows = keyboard_rows(&KeyboardHints::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains('Q'));
        assert!(rows[1].contains('A'));
        assert!(rows[2].contains('Z'));
    }
}
