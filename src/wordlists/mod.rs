//! Word lists for target selection
//!
//! Provides the embedded answer pool compiled into the binary plus loaders
//! for custom pools.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::seq::IndexedRandom;

/// Pick a random target word from a pool
///
/// # Panics
/// Panics if `pool` is empty.
#[must_use]
pub fn random_target(pool: &[Word]) -> Word {
    let mut rng = rand::rng();
    pool.choose(&mut rng)
        .expect("answer pool must not be empty")
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, uppercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let set: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(set.len(), ANSWERS.len());
    }

    #[test]
    fn answers_include_the_classics() {
        for word in ["WORDS", "SPEED", "ERASE", "CRANE", "SLATE"] {
            assert!(ANSWERS.contains(&word), "'{word}' missing from pool");
        }
    }

    #[test]
    fn random_target_comes_from_pool() {
        let pool = words_from_slice(&["crane", "slate", "words"]);

        for _ in 0..20 {
            let target = random_target(&pool);
            assert!(pool.contains(&target));
        }
    }
}
