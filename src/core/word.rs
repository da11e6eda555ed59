//! Word representation
//!
//! A Word stores a lowercase ASCII word along with its letter counts, which is
//! all the game needs to compare scrambled and canonical forms.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A candidate word with letter count tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_counts: FxHashMap<u8, usize>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,

    #[error("Word must contain only ASCII letters")]
    NonAscii,

    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("Animal").unwrap();
    /// assert_eq!(word.text(), "animal");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let text = text.trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letter_counts = letter_counts(&text);

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_counts.len()
    }

    /// Whether some reordering of the letters differs from the word itself
    #[inline]
    #[must_use]
    pub fn is_scramblable(&self) -> bool {
        self.distinct_letters() >= 2
    }

    /// Get the count of each letter in the word
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> &FxHashMap<u8, usize> {
        &self.letter_counts
    }

    /// Letters sorted alphabetically, identical for all anagrams of the word
    #[must_use]
    pub fn anagram_key(&self) -> String {
        let mut letters: Vec<char> = self.text.chars().collect();
        letters.sort_unstable();
        letters.into_iter().collect()
    }

    /// Check whether `other` uses exactly the same letters, ignoring case
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("animal").unwrap();
    /// assert!(word.is_anagram_of("LAMINA"));
    /// assert!(word.is_anagram_of("animal"));
    /// assert!(!word.is_anagram_of("animals"));
    /// ```
    #[must_use]
    pub fn is_anagram_of(&self, other: &str) -> bool {
        let other = other.trim().to_lowercase();
        other.len() == self.text.len() && letter_counts(&other) == self.letter_counts
    }

    /// Check whether a player's guess names this word
    ///
    /// Surrounding whitespace is ignored and the comparison is case-insensitive.
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn letter_counts(text: &str) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for &ch in text.as_bytes() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
