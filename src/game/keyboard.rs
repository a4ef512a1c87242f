//! Per-letter keyboard hints
//!
//! Tracks the best score each letter has earned across committed attempts,
//! so collaborators can shade their on-screen keyboard. Scores only ever
//! upgrade (`Absent < Present < Correct`); a letter that once scored
//! Correct never falls back to Present because of a later duplicate.

use crate::core::{Feedback, LetterScore, Word};
use rustc_hash::FxHashMap;

/// Letters of the on-screen keyboard, row by row
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known score per guessed letter
#[derive(Debug, Clone, Default)]
pub struct KeyboardHints {
    best: FxHashMap<u8, LetterScore>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one committed attempt into the hints
    pub fn record(&mut self, word: &Word, feedback: Feedback) {
        for (i, &letter) in word.letters().iter().enumerate() {
            let score = feedback.score_at(i);
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(score))
                .or_insert(score);
        }
    }

    /// Best score seen for a letter, if it was ever guessed
    #[must_use]
    pub fn best(&self, letter: u8) -> Option<LetterScore> {
        self.best.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Forget everything (new game)
    pub fn reset(&mut self) {
        self.best.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unguessed_letters_have_no_hint() {
        let hints = KeyboardHints::new();
        assert_eq!(hints.best(b'A'), None);
    }

    #[test]
    fn records_scores_per_letter() {
        let mut hints = KeyboardHints::new();
        let guess = word("world");
        let feedback = Feedback::evaluate(&guess, &word("words"));

        hints.record(&guess, feedback);

        assert_eq!(hints.best(b'W'), Some(Correct));
        assert_eq!(hints.best(b'L'), Some(Absent));
        assert_eq!(hints.best(b'D'), Some(Present));
    }

    #[test]
    fn hints_only_upgrade() {
        let mut hints = KeyboardHints::new();

        // E scores Present against SPEED here
        let first = word("erase");
        hints.record(&first, Feedback::evaluate(&first, &word("speed")));
        assert_eq!(hints.best(b'E'), Some(Present));

        // Now E lands exactly; the hint upgrades
        let second = word("tepid");
        hints.record(&second, Feedback::evaluate(&second, &word("tenor")));
        assert_eq!(hints.best(b'E'), Some(Correct));

        // A later miss for E must not downgrade it
        let third = word("eerie");
        hints.record(&third, Feedback::evaluate(&third, &word("blunt")));
        assert_eq!(hints.best(b'E'), Some(Correct));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut hints = KeyboardHints::new();
        let guess = word("crane");
        hints.record(&guess, Feedback::evaluate(&guess, &word("crane")));

        assert_eq!(hints.best(b'c'), Some(Correct));
        assert_eq!(hints.best(b'C'), Some(Correct));
    }

    #[test]
    fn reset_clears_hints() {
        let mut hints = KeyboardHints::new();
        let guess = word("crane");
        hints.record(&guess, Feedback::evaluate(&guess, &word("slate")));

        hints.reset();
        assert_eq!(hints.best(b'A'), None);
    }

    #[test]
    fn key_rows_cover_the_alphabet() {
        let letters: String = KEY_ROWS.concat();
        assert_eq!(letters.len(), 26);
        for c in b'A'..=b'Z' {
            assert!(letters.contains(c as char));
        }
    }
}
