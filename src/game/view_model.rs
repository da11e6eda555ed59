//! Game view-model
//!
//! Holds the game state and applies player actions to it. All transitions are
//! synchronous; readers get the latest snapshot through [`GameViewModel::ui_state`].

use super::{GameUiState, MAX_NO_OF_WORDS, SCORE_INCREASE};
use crate::core::Word;
use crate::wordlists::WordRepository;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Single-player game session over a word repository
#[derive(Debug)]
pub struct GameViewModel<'a> {
    repository: &'a WordRepository,
    rng: StdRng,
    ui_state: GameUiState,
    user_guess: String,
    current_word: &'a Word,
    used_words: FxHashSet<String>,
}

impl<'a> GameViewModel<'a> {
    /// Start a new game with an OS-seeded random number generator
    ///
    /// # Panics
    /// Panics if the repository cannot supply a scrambled first word, which a
    /// validated `WordRepository` rules out.
    #[must_use]
    pub fn new(repository: &'a WordRepository) -> Self {
        Self::with_rng(repository, StdRng::from_os_rng())
    }

    /// Start a new game whose word order and scrambles are fixed by `seed`
    ///
    /// # Panics
    /// Panics under the same conditions as [`GameViewModel::new`].
    #[must_use]
    pub fn with_seed(repository: &'a WordRepository, seed: u64) -> Self {
        Self::with_rng(repository, StdRng::seed_from_u64(seed))
    }

    fn with_rng(repository: &'a WordRepository, mut rng: StdRng) -> Self {
        let mut used_words = FxHashSet::default();
        let (current_word, scrambled) =
            Self::pick_random_word_and_shuffle(repository, &mut used_words, &mut rng);
        debug!(word_count = repository.len(), "Game view-model created");

        Self {
            repository,
            rng,
            ui_state: new_game_state(scrambled),
            user_guess: String::new(),
            current_word,
            used_words,
        }
    }

    /// Current state snapshot
    #[inline]
    #[must_use]
    pub const fn ui_state(&self) -> &GameUiState {
        &self.ui_state
    }

    /// Text the player has entered so far
    #[inline]
    #[must_use]
    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// Canonical form of the word currently shown scrambled
    #[inline]
    #[must_use]
    pub const fn current_word(&self) -> &'a Word {
        self.current_word
    }

    #[inline]
    #[must_use]
    pub const fn repository(&self) -> &'a WordRepository {
        self.repository
    }

    /// Throw away the current game and start a new one
    ///
    /// # Panics
    /// Panics under the same conditions as [`GameViewModel::new`].
    pub fn reset(&mut self) {
        self.used_words.clear();
        self.user_guess.clear();

        let (current_word, scrambled) =
            Self::pick_random_word_and_shuffle(self.repository, &mut self.used_words, &mut self.rng);
        self.current_word = current_word;
        self.ui_state = new_game_state(scrambled);

        debug!("Game reset");
    }

    /// Replace the player's input buffer
    pub fn update_user_guess(&mut self, guessed_word: impl Into<String>) {
        self.user_guess = guessed_word.into();
    }

    /// Check the input buffer against the current word
    ///
    /// A correct guess scores and advances to the next word. A wrong guess only
    /// raises `is_guessed_word_wrong`. The input buffer is cleared either way.
    /// Ignored once the game is over.
    ///
    /// # Panics
    /// Panics under the same conditions as [`GameViewModel::new`].
    pub fn check_user_guess(&mut self) {
        if self.ui_state.is_game_over {
            warn!("Guess checked after game over; ignoring");
            return;
        }

        if self.current_word.matches_guess(&self.user_guess) {
            let updated_score = self.ui_state.score + SCORE_INCREASE;
            debug!(word = %self.current_word, score = updated_score, "Correct guess");
            self.update_game_state(updated_score);
        } else {
            debug!(guess = %self.user_guess, "Wrong guess");
            self.ui_state.is_guessed_word_wrong = true;
        }

        self.user_guess.clear();
    }

    /// Move on to the next word without scoring
    ///
    /// Ignored once the game is over.
    ///
    /// # Panics
    /// Panics under the same conditions as [`GameViewModel::new`].
    pub fn skip_word(&mut self) {
        if self.ui_state.is_game_over {
            warn!("Skip requested after game over; ignoring");
            return;
        }

        debug!(word = %self.current_word, "Word skipped");
        self.update_game_state(self.ui_state.score);
        self.user_guess.clear();
    }

    fn update_game_state(&mut self, updated_score: u32) {
        self.ui_state.is_guessed_word_wrong = false;
        self.ui_state.score = updated_score;

        if self.ui_state.current_word_count == MAX_NO_OF_WORDS {
            self.ui_state.is_game_over = true;
            info!(score = updated_score, "Game over");
            return;
        }

        let (current_word, scrambled) =
            Self::pick_random_word_and_shuffle(self.repository, &mut self.used_words, &mut self.rng);
        self.current_word = current_word;
        self.ui_state.current_scrambled_word = scrambled;
        self.ui_state.current_word_count += 1;
    }

    fn pick_random_word_and_shuffle(
        repository: &'a WordRepository,
        used_words: &mut FxHashSet<String>,
        rng: &mut StdRng,
    ) -> (&'a Word, String) {
        let word = repository
            .pick_next_word(used_words, rng)
            .expect("word list holds at least MAX_NO_OF_WORDS words");
        let scrambled = repository
            .scramble(word, rng)
            .expect("repository words have at least two distinct letters");
        used_words.insert(word.text().to_string());
        (word, scrambled)
    }
}

fn new_game_state(scrambled: String) -> GameUiState {
    GameUiState {
        current_scrambled_word: scrambled,
        current_word_count: 1,
        ..GameUiState::default()
    }
}
