//! Game state machine
//!
//! The view-model a front-end drives: it owns the current `GameUiState`
//! snapshot and mutates it in response to guesses, skips and resets.

mod state;
mod view_model;

pub use state::GameUiState;
pub use view_model::GameViewModel;

/// Number of words presented in one game
pub const MAX_NO_OF_WORDS: usize = 10;

/// Points awarded for each correctly unscrambled word
pub const SCORE_INCREASE: u32 = 20;

/// Highest score reachable in one game
pub const MAX_SCORE: u32 = MAX_NO_OF_WORDS as u32 * SCORE_INCREASE;
