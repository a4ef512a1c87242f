//! Game state machine and session-level helpers
//!
//! The state machine accepts three commands (append, remove, commit) and
//! reports every outcome as a value; presentation lives elsewhere.

mod keyboard;
mod state;

pub use keyboard::{KEY_ROWS, KeyboardHints};
pub use state::{
    AttemptRecord, CommitOutcome, GameError, GameState, GameStatus, MAX_ATTEMPTS,
};
