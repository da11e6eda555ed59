//! Unscramble
//!
//! A single-player word unscramble game: guess the word behind a scrambled set
//! of letters, ten words per game, twenty points per correct answer.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::game::{GameViewModel, SCORE_INCREASE};
//! use unscramble::wordlists::WordRepository;
//!
//! let repository = WordRepository::embedded().unwrap();
//! let mut game = GameViewModel::with_seed(&repository, 42);
//!
//! let answer = repository
//!     .unscramble(&game.ui_state().current_scrambled_word)
//!     .unwrap()
//!     .text()
//!     .to_string();
//! game.update_user_guess(answer);
//! game.check_user_guess();
//!
//! assert_eq!(game.ui_state().score, SCORE_INCREASE);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
