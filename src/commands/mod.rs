//! Command implementations

pub mod simple;
pub mod unscramble;

pub use simple::{RoundOutcome, SimpleCommand, apply_command, run_simple};
pub use unscramble::unscramble_word;
