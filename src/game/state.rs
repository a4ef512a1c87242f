//! Game state machine
//!
//! `GameState` owns one game session: the target word, committed attempts
//! with their feedback, the in-progress row, and the terminal status. Every
//! mutation returns a result descriptor and is all-or-nothing; the caller
//! decides how to surface failures.

use crate::core::{Feedback, WORD_LENGTH, Word};
use std::fmt;

/// Number of guess rows per game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle status of a game session
///
/// Monotonic: once `Won` or `Lost`, no further mutation is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Recoverable command failures
///
/// None of these mutate state; the game cannot crash from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Append attempted with all five tiles of the row filled
    RowFull,
    /// Remove attempted on an empty row
    RowEmpty,
    /// Commit attempted with fewer than five letters typed
    IncompleteSubmission,
    /// Any mutation attempted after the game ended
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowFull => write!(f, "Row is full"),
            Self::RowEmpty => write!(f, "No letters to delete"),
            Self::IncompleteSubmission => {
                write!(f, "Please enter {WORD_LENGTH} letters!")
            }
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// One committed guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// What a successful commit produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// State of one game session
///
/// Created per session with an empty board; discarded when a new game
/// starts. The cursor always equals the length of the in-progress row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    history: Vec<AttemptRecord>,
    current: Vec<u8>,
    status: GameStatus,
}

impl GameState {
    /// Start a new game session against `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            current: Vec::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
        }
    }

    /// Append a letter to the in-progress row
    ///
    /// The letter is normalized to uppercase. Callers filter input to
    /// ASCII letters; anything else is a contract violation.
    ///
    /// # Errors
    /// `GameError::GameOver` after a terminal state, `GameError::RowFull`
    /// when all five tiles are filled. State is untouched on error.
    pub fn append_letter(&mut self, letter: char) -> Result<(), GameError> {
        debug_assert!(letter.is_ascii_alphabetic(), "caller filters input keys");

        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.current.len() == WORD_LENGTH {
            return Err(GameError::RowFull);
        }

        self.current.push(letter.to_ascii_uppercase() as u8);
        Ok(())
    }

    /// Remove the last letter of the in-progress row
    ///
    /// Returns the removed letter so the caller can report it.
    ///
    /// # Errors
    /// `GameError::GameOver` after a terminal state, `GameError::RowEmpty`
    /// when the row has no letters. State is untouched on error.
    pub fn remove_letter(&mut self) -> Result<char, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        match self.current.pop() {
            Some(letter) => Ok(letter as char),
            None => Err(GameError::RowEmpty),
        }
    }

    /// Commit the in-progress row as a guess
    ///
    /// Evaluates feedback, records the attempt, and resolves the turn:
    /// a matching guess wins, a sixth miss loses, otherwise play moves to
    /// the next row with an empty cursor.
    ///
    /// # Errors
    /// `GameError::GameOver` after a terminal state,
    /// `GameError::IncompleteSubmission` with fewer than five letters
    /// typed. State is untouched on error.
    ///
    /// # Panics
    /// Will not panic - the row holds exactly five validated uppercase
    /// letters at this point.
    pub fn commit_attempt(&mut self) -> Result<CommitOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.current.len() != WORD_LENGTH {
            return Err(GameError::IncompleteSubmission);
        }

        let text = String::from_utf8(self.current.clone()).expect("row holds ASCII letters");
        let guess = Word::new(text).expect("row holds five uppercase letters");

        let feedback = Feedback::evaluate(&guess, &self.target);
        let won = guess == self.target;

        self.history.push(AttemptRecord {
            word: guess,
            feedback,
        });
        self.current.clear();

        if won {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        Ok(CommitOutcome {
            feedback,
            status: self.status,
        })
    }

    /// The session's target word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session reached a terminal state
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Index of the next empty tile in the in-progress row (0-5)
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.current.len()
    }

    /// Index of the row being typed (equals attempts already committed)
    #[inline]
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.history.len()
    }

    /// Committed attempts in play order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// Letters typed so far in the in-progress row
    #[must_use]
    pub fn current_text(&self) -> String {
        self.current.iter().map(|&b| b as char).collect()
    }
}
