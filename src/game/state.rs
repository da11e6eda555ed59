//! UI-facing game state snapshot

use super::{MAX_NO_OF_WORDS, MAX_SCORE};

/// Immutable view of the game handed to the UI layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUiState {
    pub current_scrambled_word: String,
    /// Number of words presented so far, starting at 1
    pub current_word_count: usize,
    pub score: u32,
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
}

impl GameUiState {
    /// Words still to come after the current one
    #[must_use]
    pub const fn words_remaining(&self) -> usize {
        MAX_NO_OF_WORDS.saturating_sub(self.current_word_count)
    }

    /// Whether every word of the game was guessed correctly
    #[must_use]
    pub const fn is_perfect_score(&self) -> bool {
        self.score == MAX_SCORE
    }
}
