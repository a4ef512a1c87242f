//! Wordle Game
//!
//! A terminal Wordle game: guess a hidden 5-letter word in 6 attempts,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterScore, Word};
//! use wordle_game::game::GameState;
//!
//! let target = Word::new("words").unwrap();
//! let mut game = GameState::new(target);
//!
//! for letter in "WORLD".chars() {
//!     game.append_letter(letter).unwrap();
//! }
//! let outcome = game.commit_attempt().unwrap();
//!
//! // W, O, R land on their spots; L is absent; D is elsewhere in WORDS
//! assert_eq!(outcome.feedback.score_at(0), LetterScore::Correct);
//! assert_eq!(outcome.feedback.score_at(3), LetterScore::Absent);
//! assert_eq!(outcome.feedback.score_at(4), LetterScore::Present);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
