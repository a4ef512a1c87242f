//! Guess feedback calculation and representation
//!
//! Feedback scores a guess against the target word, one tag per position:
//! - Correct: right letter, right spot
//! - Present: letter is in the word, wrong spot
//! - Absent: letter has no remaining unmatched occurrence in the word
//!
//! Duplicate letters follow the official rules: each target letter backs at
//! most one Correct or Present tag, with exact matches claimed first.

use super::{WORD_LENGTH, Word};

/// Score for a single guessed letter
///
/// Ordered by strength: `Absent < Present < Correct`, so the best-known
/// score for a letter is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    Absent,
    Present,
    Correct,
}

/// Per-position feedback for one committed guess
///
/// Immutable once produced; one `LetterScore` per guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

impl Feedback {
    /// All correct (winning guess)
    pub const PERFECT: Self = Self([LetterScore::Correct; WORD_LENGTH]);

    /// Create feedback from explicit per-position scores
    #[inline]
    #[must_use]
    pub const fn new(scores: [LetterScore; WORD_LENGTH]) -> Self {
        Self(scores)
    }

    /// Score `guess` against `target`
    ///
    /// Pure function of its inputs; rendering is the caller's concern.
    ///
    /// # Algorithm
    /// Two passes over working copies of both words, consuming letters as
    /// they match so a letter is never counted twice:
    /// 1. Exact positions become Correct; both copies drop that letter.
    /// 2. Each remaining guess letter claims the first remaining occurrence
    ///    of itself in the target (scanning from position 0) as Present.
    ///
    /// Everything unclaimed stays Absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(feedback.score_at(2), LetterScore::Correct);
    /// assert_eq!(feedback.score_at(4), LetterScore::Correct);
    /// assert_eq!(feedback.score_at(0), LetterScore::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LENGTH];
        let mut guess_pool: [Option<u8>; WORD_LENGTH] = guess.letters().map(Some);
        let mut target_pool: [Option<u8>; WORD_LENGTH] = target.letters().map(Some);

        // First pass: exact position matches, removed from both pools
        for i in 0..WORD_LENGTH {
            if guess_pool[i] == target_pool[i] {
                scores[i] = LetterScore::Correct;
                guess_pool[i] = None;
                target_pool[i] = None;
            }
        }

        // Second pass: displaced letters claim the leftmost remaining
        // occurrence in the target, one occurrence per tag
        for i in 0..WORD_LENGTH {
            let Some(letter) = guess_pool[i] else {
                continue;
            };
            if let Some(slot) = target_pool.iter_mut().find(|slot| **slot == Some(letter)) {
                scores[i] = LetterScore::Present;
                *slot = None;
            }
        }

        Self(scores)
    }

    /// Get all five scores in guess-position order
    #[inline]
    #[must_use]
    pub const fn scores(self) -> [LetterScore; WORD_LENGTH] {
        self.0
    }

    /// Get the score at a specific guess position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn score_at(self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// Check if every position is Correct (winning guess)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the number of Correct tags
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Correct)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|score| match score {
                LetterScore::Correct => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterScore::{Absent, Correct, Present};

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
    }

    #[test]
    fn feedback_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        assert_eq!(feedback, Feedback::new([Absent; 5]));
    }

    #[test]
    fn feedback_all_correct() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::evaluate(&word, &word);

        assert!(feedback.is_perfect());
    }

    #[test]
    fn feedback_self_match_any_word() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::evaluate(&w, &w).is_perfect());
        }
    }

    #[test]
    fn feedback_duplicate_guess_letters_single_target_occurrence() {
        // ERASE vs SPEED: manual two-pass trace.
        // No exact matches. Then E claims SPEED's first E (pos 2),
        // R and A find nothing, S claims pos 0, the final E claims pos 3.
        let guess = Word::new("erase").unwrap();
        let target = Word::new("speed").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        assert_eq!(
            feedback,
            Feedback::new([Present, Absent, Absent, Present, Present])
        );
    }

    #[test]
    fn feedback_duplicate_letters_correct_takes_priority() {
        // ROBOT vs FLOOR: second O is an exact match and is removed from
        // the pool before the first O scans for a Present slot.
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        assert_eq!(
            feedback,
            Feedback::new([Present, Present, Absent, Correct, Absent])
        );
    }

    #[test]
    fn feedback_repeated_letter_only_one_tag() {
        // Target has one S; guessing two means only the first gets Present.
        let guess = Word::new("sassy").unwrap();
        let target = Word::new("snail").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        assert_eq!(feedback.score_at(0), Correct); // S exact
        assert_eq!(feedback.score_at(2), Absent); // second S: pool exhausted
        assert_eq!(feedback.score_at(3), Absent); // third S too
    }

    #[test]
    fn feedback_world_vs_words() {
        let guess = Word::new("world").unwrap();
        let target = Word::new("words").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        assert_eq!(
            feedback,
            Feedback::new([Correct, Correct, Correct, Absent, Present])
        );
    }

    #[test]
    fn feedback_deterministic() {
        let guess = Word::new("erase").unwrap();
        let target = Word::new("speed").unwrap();

        let first = Feedback::evaluate(&guess, &target);
        for _ in 0..10 {
            assert_eq!(Feedback::evaluate(&guess, &target), first);
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn letter_score_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }
}
