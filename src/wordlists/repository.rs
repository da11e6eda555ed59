//! Word repository
//!
//! Validated, immutable word list with word selection, scrambling and lookup of
//! the canonical word behind a scramble.

use crate::core::{ScrambleError, Word, scramble};
use crate::game::MAX_NO_OF_WORDS;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Errors raised while building or drawing from a repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Word list has {found} words, at least {required} are needed for one game")]
    TooFewWords { found: usize, required: usize },

    #[error("Word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("Word '{0}' needs at least two distinct letters")]
    Unscramblable(String),

    #[error("Words '{first}' and '{second}' are anagrams of each other")]
    AmbiguousAnagram { first: String, second: String },

    #[error("All {0} words have already been used")]
    Exhausted(usize),
}

/// Ordered, fixed set of candidate words
#[derive(Debug, Clone)]
pub struct WordRepository {
    words: Vec<Word>,
    by_anagram: FxHashMap<String, usize>,
}

impl WordRepository {
    /// Build a repository from a word list
    ///
    /// # Errors
    /// Returns `RepositoryError` if the list is shorter than `MAX_NO_OF_WORDS`,
    /// contains a duplicate, contains a word that cannot be scrambled, or
    /// contains two anagrams of each other (which would make `unscramble`
    /// ambiguous).
    pub fn new(words: Vec<Word>) -> Result<Self, RepositoryError> {
        if words.len() < MAX_NO_OF_WORDS {
            return Err(RepositoryError::TooFewWords {
                found: words.len(),
                required: MAX_NO_OF_WORDS,
            });
        }

        let mut by_anagram: FxHashMap<String, usize> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            if !word.is_scramblable() {
                return Err(RepositoryError::Unscramblable(word.text().to_string()));
            }

            if let Some(&existing) = by_anagram.get(&word.anagram_key()) {
                let first = words[existing].text().to_string();
                if first == word.text() {
                    return Err(RepositoryError::DuplicateWord(first));
                }
                return Err(RepositoryError::AmbiguousAnagram {
                    first,
                    second: word.text().to_string(),
                });
            }
            by_anagram.insert(word.anagram_key(), index);
        }

        Ok(Self { words, by_anagram })
    }

    /// Repository over the embedded word list
    ///
    /// # Errors
    /// Returns `RepositoryError` if the embedded list fails validation.
    pub fn embedded() -> Result<Self, RepositoryError> {
        Self::new(super::loader::words_from_slice(super::WORDS))
    }

    /// All words in their original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word (case-insensitive) is in the list
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.matches_guess(text))
    }

    /// Pick a random word that is not in `used_words`
    ///
    /// # Errors
    /// Returns `RepositoryError::Exhausted` if every word has been used.
    pub fn pick_next_word<R: Rng + ?Sized>(
        &self,
        used_words: &FxHashSet<String>,
        rng: &mut R,
    ) -> Result<&Word, RepositoryError> {
        let unused: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| !used_words.contains(w.text()))
            .collect();

        unused
            .choose(rng)
            .copied()
            .ok_or(RepositoryError::Exhausted(self.words.len()))
    }

    /// Scramble a word's letters so the result differs from the word
    ///
    /// # Errors
    /// Returns `ScrambleError` if the word has fewer than two distinct letters.
    pub fn scramble<R: Rng + ?Sized>(
        &self,
        word: &Word,
        rng: &mut R,
    ) -> Result<String, ScrambleError> {
        scramble(word, rng)
    }

    /// Recover the canonical word behind a scrambled word
    ///
    /// Matches by letter multiset, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use unscramble::wordlists::WordRepository;
    ///
    /// let repository = WordRepository::embedded().unwrap();
    /// let word = repository.unscramble("LAMINA").unwrap();
    /// assert_eq!(word.text(), "animal");
    /// assert!(repository.unscramble("xyzzy").is_none());
    /// ```
    #[must_use]
    pub fn unscramble(&self, scrambled_word: &str) -> Option<&Word> {
        let key = Word::new(scrambled_word).ok()?.anagram_key();
        self.by_anagram.get(&key).map(|&index| &self.words[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLE: &[&str] = &[
        "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
        "bench", "best", "birthday",
    ];

    fn sample_repository() -> WordRepository {
        WordRepository::new(words_from_slice(SAMPLE)).unwrap()
    }

    #[test]
    fn new_accepts_valid_list() {
        let repository = sample_repository();
        assert_eq!(repository.len(), SAMPLE.len());
        assert!(!repository.is_empty());
        assert_eq!(repository.words()[0].text(), "animal");
    }

    #[test]
    fn new_rejects_short_list() {
        let result = WordRepository::new(words_from_slice(&SAMPLE[..3]));
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::TooFewWords {
                found: 3,
                required: MAX_NO_OF_WORDS
            }
        );
    }

    #[test]
    fn new_rejects_duplicate() {
        let mut words = words_from_slice(SAMPLE);
        words.push(Word::new("Auto").unwrap());

        let result = WordRepository::new(words);
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::DuplicateWord("auto".to_string())
        );
    }

    #[test]
    fn new_rejects_anagrams() {
        let mut words = words_from_slice(SAMPLE);
        words.push(Word::new("lamina").unwrap());

        let result = WordRepository::new(words);
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::AmbiguousAnagram {
                first: "animal".to_string(),
                second: "lamina".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_unscramblable() {
        let mut words = words_from_slice(SAMPLE);
        words.push(Word::new("aaa").unwrap());

        let result = WordRepository::new(words);
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::Unscramblable("aaa".to_string())
        );
    }

    #[test]
    fn embedded_repository_is_valid() {
        let repository = WordRepository::embedded().unwrap();
        assert_eq!(repository.len(), crate::wordlists::WORDS_COUNT);
    }

    #[test]
    fn pick_next_word_skips_used() {
        let repository = sample_repository();
        let mut rng = StdRng::seed_from_u64(11);
        let used: FxHashSet<String> = SAMPLE[1..].iter().map(|s| (*s).to_string()).collect();

        for _ in 0..10 {
            let word = repository.pick_next_word(&used, &mut rng).unwrap();
            assert_eq!(word.text(), "animal");
        }
    }

    #[test]
    fn pick_next_word_exhausted() {
        let repository = sample_repository();
        let used: FxHashSet<String> = SAMPLE.iter().map(|s| (*s).to_string()).collect();

        let result = repository.pick_next_word(&used, &mut rand::rng());
        assert_eq!(result, Err(RepositoryError::Exhausted(SAMPLE.len())));
    }

    #[test]
    fn scramble_uses_same_letters() {
        let repository = sample_repository();
        let mut rng = StdRng::seed_from_u64(5);

        for word in repository.words() {
            let scrambled = repository.scramble(word, &mut rng).unwrap();
            assert_ne!(scrambled, word.text());
            assert!(word.is_anagram_of(&scrambled));
        }
    }

    #[test]
    fn unscramble_recovers_canonical_word() {
        let repository = sample_repository();
        let mut rng = StdRng::seed_from_u64(9);

        for word in repository.words() {
            let scrambled = repository.scramble(word, &mut rng).unwrap();
            assert_eq!(repository.unscramble(&scrambled), Some(word));
        }
    }

    #[test]
    fn unscramble_unknown_word() {
        let repository = sample_repository();
        assert!(repository.unscramble("and").is_none());
        assert!(repository.unscramble("").is_none());
        assert!(repository.unscramble("two words").is_none());
    }

    #[test]
    fn unscramble_very_long_input() {
        let repository = sample_repository();
        assert!(repository.unscramble(&("a".repeat(256) + "b")).is_none());
        assert!(repository.unscramble(&"ab".repeat(200)).is_none());
    }

    #[test]
    fn contains_ignores_case() {
        let repository = sample_repository();
        assert!(repository.contains("Basket"));
        assert!(!repository.contains("basketball"));
    }
}
