//! Core domain types for the Wordle game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{Word, WordError};

/// Number of letters in every guess and target word
pub const WORD_LENGTH: usize = 5;
