//! Terminal output formatting
//!
//! Display utilities for the line-based game and shared text formatters.

pub mod display;
pub mod formatters;

pub use display::{
    print_correct_guess, print_game_over, print_round, print_skipped, print_wrong_guess,
};
