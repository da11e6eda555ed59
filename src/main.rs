//! Unscramble - CLI
//!
//! Word unscramble game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unscramble::{
    commands::{run_simple, unscramble_word},
    game::GameViewModel,
    wordlists::{WordRepository, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Guess the words behind scrambled letters, ten words per game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed for word selection and scrambling (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Print the word a scrambled word was made from
    Unscramble {
        /// The scrambled letters
        word: String,
    },
}

/// Log file for the TUI, which owns the terminal while it runs
const TUI_LOG_FILE: &str = "unscramble.log";

/// Where tracing output goes for a command
#[derive(Debug, PartialEq, Eq)]
enum LogDestination {
    Stderr,
    File(&'static str),
}

impl LogDestination {
    const fn for_command(command: &Commands) -> Self {
        match command {
            Commands::Play => Self::File(TUI_LOG_FILE),
            Commands::Simple | Commands::Unscramble { .. } => Self::Stderr,
        }
    }
}

fn init_logging(destination: &LogDestination) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    match destination {
        LogDestination::Stderr => builder.with_writer(std::io::stderr).init(),
        LogDestination::File(path) => {
            let log_file = std::fs::File::create(Path::new(path))
                .with_context(|| format!("Failed to create log file {path}"))?;
            builder
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
    }

    Ok(())
}

/// Build the word repository based on the -w flag
fn load_repository(wordlist_mode: &str) -> Result<WordRepository> {
    let repository = match wordlist_mode {
        "default" => WordRepository::embedded()?,
        path => {
            let words =
                load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?;
            WordRepository::new(words).with_context(|| format!("Invalid word list {path}"))?
        }
    };

    info!(words = repository.len(), source = wordlist_mode, "Word list loaded");
    Ok(repository)
}

fn new_game(repository: &WordRepository, seed: Option<u64>) -> GameViewModel<'_> {
    match seed {
        Some(seed) => GameViewModel::with_seed(repository, seed),
        None => GameViewModel::new(repository),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&LogDestination::for_command(&command))?;

    let repository = load_repository(&cli.wordlist)?;

    match command {
        Commands::Play => run_play_command(&repository, cli.seed),
        Commands::Simple => run_simple_command(&repository, cli.seed),
        Commands::Unscramble { word } => run_unscramble_command(&repository, &word),
    }
}

fn run_play_command(repository: &WordRepository, seed: Option<u64>) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(new_game(repository, seed));
    run_tui(app)
}

fn run_simple_command(repository: &WordRepository, seed: Option<u64>) -> Result<()> {
    let mut view_model = new_game(repository, seed);
    let final_state = run_simple(&mut view_model)?;
    info!(score = final_state.score, "Session ended");
    Ok(())
}

fn run_unscramble_command(repository: &WordRepository, word: &str) -> Result<()> {
    let canonical = unscramble_word(repository, word)?;
    println!("{canonical}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_logs_to_file() {
        assert_eq!(
            LogDestination::for_command(&Commands::Play),
            LogDestination::File(TUI_LOG_FILE)
        );
    }

    #[test]
    fn line_based_commands_log_to_stderr() {
        assert_eq!(
            LogDestination::for_command(&Commands::Simple),
            LogDestination::Stderr
        );
        assert_eq!(
            LogDestination::for_command(&Commands::Unscramble {
                word: "arbez".to_string()
            }),
            LogDestination::Stderr
        );
    }

    #[test]
    fn missing_command_defaults_to_tui() {
        let cli = Cli::parse_from(["unscramble"]);
        let command = cli.command.unwrap_or(Commands::Play);
        assert_eq!(
            LogDestination::for_command(&command),
            LogDestination::File(TUI_LOG_FILE)
        );
    }
}
