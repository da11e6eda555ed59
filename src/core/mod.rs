//! Core domain types for the unscramble game
//!
//! Words and the scramble algorithm. Everything here is pure apart from the
//! caller-supplied random number generator.

mod scramble;
mod word;

pub use scramble::{MAX_SHUFFLE_ATTEMPTS, ScrambleError, scramble};
pub use word::{Word, WordError};
