//! Formatting utilities for terminal output

/// Uppercase the scrambled word and space out its letters
///
/// # Examples
/// ```
/// use unscramble::output::formatters::spaced_letters;
///
/// assert_eq!(spaced_letters("tca"), "T C A");
/// ```
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress through the game as "word N of M"
#[must_use]
pub fn word_progress(word_count: usize, max_words: usize) -> String {
    format!("Word {word_count} of {max_words}")
}
