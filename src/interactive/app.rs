//! TUI application state and logic

use crate::game::{GameViewModel, MAX_SCORE};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Longest guess the input line accepts
const MAX_GUESS_LEN: usize = 24;

/// Application state
pub struct App<'a> {
    pub view_model: GameViewModel<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub words_guessed: usize,
    pub words_skipped: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(view_model: GameViewModel<'a>) -> Self {
        Self {
            view_model,
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess and press Enter, or TAB to skip.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Append a typed character to the guess
    pub fn push_char(&mut self, c: char) {
        let mut guess = self.view_model.user_guess().to_string();
        if guess.len() < MAX_GUESS_LEN && c.is_ascii_alphabetic() {
            guess.push(c.to_ascii_lowercase());
            self.view_model.update_user_guess(guess);
        }
    }

    /// Remove the last typed character
    pub fn pop_char(&mut self) {
        let mut guess = self.view_model.user_guess().to_string();
        if guess.pop().is_some() {
            self.view_model.update_user_guess(guess);
        }
    }

    pub fn submit_guess(&mut self) {
        if self.view_model.user_guess().is_empty() {
            self.add_message("Type a word first!", MessageStyle::Error);
            return;
        }

        let word = self.view_model.current_word().text().to_uppercase();
        self.view_model.check_user_guess();

        if self.view_model.ui_state().is_guessed_word_wrong {
            self.add_message("Wrong guess! Try again.", MessageStyle::Error);
        } else {
            self.stats.words_guessed += 1;
            self.add_message(&format!("Correct! {word}"), MessageStyle::Success);
            self.after_advance();
        }
    }

    pub fn skip_word(&mut self) {
        let word = self.view_model.current_word().text().to_uppercase();
        self.view_model.skip_word();
        self.stats.words_skipped += 1;
        self.add_message(&format!("Skipped. The word was {word}"), MessageStyle::Info);
        self.after_advance();
    }

    fn after_advance(&mut self) {
        let state = self.view_model.ui_state();
        if !state.is_game_over {
            return;
        }

        let score = state.score;
        self.stats.games_played += 1;
        self.stats.best_score = self.stats.best_score.max(score);
        self.input_mode = InputMode::GameOver;

        let verdict = match score {
            MAX_SCORE => "🏆 PERFECT GAME! 🏆",
            s if s >= MAX_SCORE / 2 => "🎉 Well played! 🎉",
            _ => "Game over!",
        };
        self.add_message(
            &format!("{verdict} Final score: {score}"),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        debug!(score, games_played = self.stats.games_played, "Game finished");
    }

    pub fn new_game(&mut self) {
        self.view_model.reset();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game is over, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.skip_word(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Char(c) => self.push_char(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// The terminal is restored before any error from the game loop is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
