//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: print the scrambled word, read a guess or
//! command, repeat.

use crate::game::{GameUiState, GameViewModel};
use crate::output::{
    print_correct_guess, print_game_over, print_round, print_skipped, print_wrong_guess,
};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    Skip,
    NewGame,
    Quit,
    Empty,
}

impl SimpleCommand {
    /// Interpret a line of input
    ///
    /// Commands are matched case-insensitively; anything else is a guess.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Empty,
            "skip" | "s" => Self::Skip,
            "new" | "n" => Self::NewGame,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

/// What a command did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct { word: String },
    Wrong,
    Skipped { word: String },
    NewGame,
    Quit,
    Ignored,
}

/// Apply one command to the view-model
///
/// Guesses and skips are ignored once the game is over.
pub fn apply_command(view_model: &mut GameViewModel, command: SimpleCommand) -> RoundOutcome {
    let word = view_model.current_word().text().to_string();
    let is_game_over = view_model.ui_state().is_game_over;

    match command {
        SimpleCommand::Guess(_) | SimpleCommand::Skip if is_game_over => RoundOutcome::Ignored,
        SimpleCommand::Guess(guess) => {
            view_model.update_user_guess(guess);
            view_model.check_user_guess();
            if view_model.ui_state().is_guessed_word_wrong {
                RoundOutcome::Wrong
            } else {
                RoundOutcome::Correct { word }
            }
        }
        SimpleCommand::Skip => {
            view_model.skip_word();
            RoundOutcome::Skipped { word }
        }
        SimpleCommand::NewGame => {
            view_model.reset();
            RoundOutcome::NewGame
        }
        SimpleCommand::Quit => RoundOutcome::Quit,
        SimpleCommand::Empty => RoundOutcome::Ignored,
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// Returns the state of the last game when the player quits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(view_model: &mut GameViewModel) -> Result<GameUiState> {
    let stdin = io::stdin();
    play(view_model, &mut stdin.lock())
}

fn play<R: BufRead>(view_model: &mut GameViewModel, input: &mut R) -> Result<GameUiState> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Unscramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type the unscrambled word and press Enter.");
    println!("Commands: 'skip' to skip a word, 'new' for new game, 'quit' to exit\n");

    print_round(view_model.ui_state());

    loop {
        let Some(line) = read_line("Your guess", input)? else {
            debug!("Input closed");
            return Ok(view_model.ui_state().clone());
        };

        let was_over = view_model.ui_state().is_game_over;
        match apply_command(view_model, SimpleCommand::parse(&line)) {
            RoundOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(view_model.ui_state().clone());
            }
            RoundOutcome::Wrong => print_wrong_guess(),
            RoundOutcome::Correct { word } => {
                print_correct_guess(&word, view_model.ui_state().score);
            }
            RoundOutcome::Skipped { word } => print_skipped(&word),
            RoundOutcome::NewGame => println!("\n🔄 New game started!"),
            RoundOutcome::Ignored => {}
        }

        let state = view_model.ui_state();
        if state.is_game_over {
            if !was_over {
                print_game_over(state);
            }
            println!("Type 'new' to play again or 'quit' to exit.");
        } else if !state.is_guessed_word_wrong {
            print_round(state);
        }
    }
}

/// Prompt and read one line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_NO_OF_WORDS, SCORE_INCREASE};
    use crate::wordlists::WordRepository;
    use std::io::Cursor;

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse("skip"), SimpleCommand::Skip);
        assert_eq!(SimpleCommand::parse(" SKIP "), SimpleCommand::Skip);
        assert_eq!(SimpleCommand::parse("n"), SimpleCommand::NewGame);
        assert_eq!(SimpleCommand::parse("exit"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse("   "), SimpleCommand::Empty);
        assert_eq!(
            SimpleCommand::parse(" Zebra "),
            SimpleCommand::Guess("Zebra".to_string())
        );
    }

    #[test]
    fn apply_correct_guess() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 1);
        let answer = view_model.current_word().text().to_string();

        let outcome = apply_command(&mut view_model, SimpleCommand::Guess(answer.clone()));

        assert_eq!(outcome, RoundOutcome::Correct { word: answer });
        assert_eq!(view_model.ui_state().score, SCORE_INCREASE);
    }

    #[test]
    fn apply_wrong_guess() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 2);

        let outcome = apply_command(&mut view_model, SimpleCommand::Guess("and".to_string()));

        assert_eq!(outcome, RoundOutcome::Wrong);
        assert!(view_model.ui_state().is_guessed_word_wrong);
    }

    #[test]
    fn apply_skip_reports_answer() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 3);
        let answer = view_model.current_word().text().to_string();

        let outcome = apply_command(&mut view_model, SimpleCommand::Skip);

        assert_eq!(outcome, RoundOutcome::Skipped { word: answer });
        assert_eq!(view_model.ui_state().current_word_count, 2);
    }

    #[test]
    fn apply_new_game_resets() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 4);
        apply_command(&mut view_model, SimpleCommand::Skip);

        let outcome = apply_command(&mut view_model, SimpleCommand::NewGame);

        assert_eq!(outcome, RoundOutcome::NewGame);
        assert_eq!(view_model.ui_state().current_word_count, 1);
    }

    #[test]
    fn apply_after_game_over_is_ignored() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 8);
        for _ in 0..MAX_NO_OF_WORDS {
            apply_command(&mut view_model, SimpleCommand::Skip);
        }
        let answer = view_model.current_word().text().to_string();

        assert_eq!(
            apply_command(&mut view_model, SimpleCommand::Guess(answer)),
            RoundOutcome::Ignored
        );
        assert_eq!(
            apply_command(&mut view_model, SimpleCommand::Skip),
            RoundOutcome::Ignored
        );
    }

    #[test]
    fn apply_empty_is_ignored() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 5);
        let before = view_model.ui_state().clone();

        assert_eq!(
            apply_command(&mut view_model, SimpleCommand::Empty),
            RoundOutcome::Ignored
        );
        assert_eq!(view_model.ui_state(), &before);
    }

    #[test]
    fn play_until_input_ends() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 6);
        let script = "skip\n".repeat(MAX_NO_OF_WORDS);

        let final_state = play(&mut view_model, &mut Cursor::new(script)).unwrap();

        assert!(final_state.is_game_over);
        assert_eq!(final_state.score, 0);
    }

    #[test]
    fn play_stops_on_quit() {
        let repository = WordRepository::embedded().unwrap();
        let mut view_model = GameViewModel::with_seed(&repository, 7);

        let final_state = play(&mut view_model, &mut Cursor::new("skip\nquit\nskip\n")).unwrap();

        assert_eq!(final_state.current_word_count, 2);
        assert!(!final_state.is_game_over);
    }
}
