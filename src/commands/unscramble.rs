//! Scrambled word lookup command

use crate::wordlists::WordRepository;
use anyhow::{Result, bail};

/// Find the canonical word behind a scrambled word
///
/// # Errors
///
/// Returns an error if no word in the repository uses exactly these letters.
pub fn unscramble_word(repository: &WordRepository, scrambled: &str) -> Result<String> {
    match repository.unscramble(scrambled) {
        Some(word) => Ok(word.text().to_string()),
        None => bail!("No word in the list is made of the letters '{scrambled}'"),
    }
}
