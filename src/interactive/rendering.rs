//! TUI rendering with ratatui
//!
//! Layout and widgets for the unscramble game.

use super::app::{App, InputMode, MessageStyle};
use crate::game::{MAX_NO_OF_WORDS, MAX_SCORE};
use crate::output::formatters::{spaced_letters, word_progress};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Puzzle
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_puzzle(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let state = app.view_model.ui_state();

    let content = if state.is_game_over {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Final score: {} / {MAX_SCORE}", state.score)),
        ]
    } else {
        let word_color = if state.is_guessed_word_wrong {
            Color::Red
        } else {
            Color::Yellow
        };

        vec![
            Line::from(""),
            Line::from(word_progress(state.current_word_count, MAX_NO_OF_WORDS)),
            Line::from(""),
            Line::from(Span::styled(
                spaced_letters(&state.current_scrambled_word),
                Style::default()
                    .fg(word_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Unscramble the word using all the letters.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word progress
            Constraint::Length(3), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word_progress(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word_progress(f: &mut Frame, app: &App, area: Rect) {
    let state = app.view_model.ui_state();
    let ratio = state.current_word_count as f64 / MAX_NO_OF_WORDS as f64;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "{}/{MAX_NO_OF_WORDS}",
            state.current_word_count
        ));

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.view_model.ui_state().score;
    let ratio = f64::from(score) / f64::from(MAX_SCORE);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{score}/{MAX_SCORE}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => {
            let title = if app.view_model.ui_state().is_guessed_word_wrong {
                " Wrong guess! Try again | ENTER to check | TAB to skip "
            } else {
                " Enter your word | ENTER to check | TAB to skip "
            };
            (title, app.view_model.user_guess().to_uppercase(), Color::Yellow)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let games_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let games = Paragraph::new(games_text).alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let words_text = format!(
        "Guessed: {} | Skipped: {}",
        app.stats.words_guessed, app.stats.words_skipped
    );
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "ESC: Quit | Enter: Submit | TAB: Skip",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameViewModel;
    use crate::wordlists::WordRepository;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_scrambled_word() {
        let repository = WordRepository::embedded().unwrap();
        let app = App::new(GameViewModel::with_seed(&repository, 1));

        let text = rendered_text(&app);
        let scrambled = spaced_letters(&app.view_model.ui_state().current_scrambled_word);
        assert!(text.contains(&scrambled));
        assert!(text.contains("Word 1 of 10"));
    }

    #[test]
    fn renders_game_over() {
        let repository = WordRepository::embedded().unwrap();
        let mut app = App::new(GameViewModel::with_seed(&repository, 2));
        for _ in 0..MAX_NO_OF_WORDS {
            app.skip_word();
        }

        let text = rendered_text(&app);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("q: Quit | n: New Game"));
    }
}
