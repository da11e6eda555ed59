//! Display functions for the line-based game

use super::formatters::{create_progress_bar, spaced_letters, word_progress};
use crate::game::{GameUiState, MAX_NO_OF_WORDS, MAX_SCORE};
use colored::Colorize;

/// Print the scrambled word the player has to solve
pub fn print_round(state: &GameUiState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}  [{}]  Score: {}",
        word_progress(state.current_word_count, MAX_NO_OF_WORDS),
        create_progress_bar(state.current_word_count, MAX_NO_OF_WORDS, 20).green(),
        state.score.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n   {}\n",
        spaced_letters(&state.current_scrambled_word)
            .bright_white()
            .bold()
    );
}

/// Print feedback for a wrong guess
pub fn print_wrong_guess() {
    println!("{}", "❌ Wrong guess! Try again.".red().bold());
}

/// Print feedback for a correct guess
pub fn print_correct_guess(word: &str, score: u32) {
    println!(
        "{} {} (score {})",
        "✅ Correct:".green().bold(),
        word.to_uppercase().bright_white(),
        score
    );
}

/// Print the answer of a skipped word
pub fn print_skipped(word: &str) {
    println!(
        "{} {}",
        "⏭  Skipped, the word was".bright_black(),
        word.to_uppercase().bright_white()
    );
}

/// Print the final result of a game
pub fn print_game_over(state: &GameUiState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n   Final score: {} / {}",
        state.score.to_string().bright_yellow().bold(),
        MAX_SCORE
    );

    if state.is_perfect_score() {
        println!("   {}", "🏆 Perfect game!".bright_green().bold());
    }
    println!();
}
