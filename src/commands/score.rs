//! One-shot guess scoring
//!
//! Exposes the evaluator without playing a session: score one guess
//! against one target and hand the result to the output layer.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring a single guess against a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
/// Returns `WordError` if either word is not a valid 5-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
