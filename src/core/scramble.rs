//! Letter scrambling
//!
//! Produces a random reordering of a word that is guaranteed to differ from it.

use super::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Shuffles attempted before falling back to a rotation
///
/// A shuffle reproduces the original word with probability of at most one half
/// (two letters), so running out of attempts is practically impossible.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Error type for words that cannot be scrambled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrambleError {
    #[error("Word '{0}' needs at least two distinct letters to be scrambled")]
    Unscramblable(String),
}

/// Scramble the letters of a word
///
/// Returns a permutation of the word's letters that is never equal to the word.
///
/// # Errors
/// Returns `ScrambleError::Unscramblable` if the word has fewer than two
/// distinct letters, as every reordering would equal the word.
///
/// # Examples
/// ```
/// use unscramble::core::{Word, scramble};
///
/// let word = Word::new("puzzle").unwrap();
/// let scrambled = scramble(&word, &mut rand::rng()).unwrap();
/// assert_ne!(scrambled, "puzzle");
/// assert!(word.is_anagram_of(&scrambled));
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Result<String, ScrambleError> {
    if !word.is_scramblable() {
        return Err(ScrambleError::Unscramblable(word.text().to_string()));
    }

    let mut letters: Vec<char> = word.text().chars().collect();

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word.text() {
            return Ok(candidate);
        }
    }

    // Rotating by one only yields the same text when every letter is identical
    Ok(rotate_left(word.text()))
}

fn rotate_left(text: &str) -> String {
    let mut letters: Vec<char> = text.chars().collect();
    letters.rotate_left(1);
    letters.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_differs_from_word() {
        let mut rng = StdRng::seed_from_u64(7);
        let word = Word::new("animal").unwrap();

        for _ in 0..100 {
            let scrambled = scramble(&word, &mut rng).unwrap();
            assert_ne!(scrambled, word.text());
            assert!(word.is_anagram_of(&scrambled));
        }
    }

    #[test]
    fn scramble_two_letter_word_swaps() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = Word::new("ox").unwrap();

        for _ in 0..20 {
            assert_eq!(scramble(&word, &mut rng).unwrap(), "xo");
        }
    }

    #[test]
    fn scramble_repeated_letters() {
        let mut rng = StdRng::seed_from_u64(3);
        let word = Word::new("mama").unwrap();

        for _ in 0..50 {
            let scrambled = scramble(&word, &mut rng).unwrap();
            assert_ne!(scrambled, "mama");
            assert!(word.is_anagram_of(&scrambled));
        }
    }

    #[test]
    fn scramble_rejects_single_letter() {
        let word = Word::new("a").unwrap();
        assert_eq!(
            scramble(&word, &mut rand::rng()),
            Err(ScrambleError::Unscramblable("a".to_string()))
        );
    }

    #[test]
    fn scramble_rejects_identical_letters() {
        let word = Word::new("zzz").unwrap();
        assert!(scramble(&word, &mut rand::rng()).is_err());
    }

    #[test]
    fn scramble_is_deterministic_for_seed() {
        let word = Word::new("kaleidoscope").unwrap();
        let first = scramble(&word, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = scramble(&word, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rotate_left_moves_first_letter_to_end() {
        assert_eq!(rotate_left("abc"), "bca");
        assert_eq!(rotate_left("abab"), "baba");
        assert_eq!(rotate_left("aaa"), "aaa");
    }
}
