//! Word lists for the unscramble game
//!
//! Provides the embedded word list compiled into the binary and the validated
//! repository the game draws words from.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::{WORDS, WORDS_COUNT};
pub use repository::{RepositoryError, WordRepository};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_NO_OF_WORDS;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All words should be lowercase ASCII letters
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn enough_words_for_a_game() {
        assert!(WORDS_COUNT >= MAX_NO_OF_WORDS);
    }

    #[test]
    fn incorrect_guess_fixture_absent() {
        // Game tests rely on "and" never matching a word
        let repository = WordRepository::embedded().unwrap();
        assert!(repository.unscramble("and").is_none());
    }
}
