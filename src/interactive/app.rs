//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameState, GameStatus, KeyboardHints};
use crate::wordlists::random_target;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub pool: &'a [Word],
    pub state: GameState,
    pub hints: KeyboardHints,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(pool: &'a [Word], target: Word) -> Self {
        Self {
            pool,
            state: GameState::new(target),
            hints: KeyboardHints::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type letters, Backspace to delete, Enter to guess."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Esc quits at any time.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    pub fn handle_letter(&mut self, letter: char) {
        if let Err(error) = self.state.append_letter(letter) {
            self.add_message(&error.to_string(), MessageStyle::Error);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Err(error) = self.state.remove_letter() {
            self.add_message(&error.to_string(), MessageStyle::Error);
        }
    }

    pub fn handle_submit(&mut self) {
        let outcome = match self.state.commit_attempt() {
            Ok(outcome) => outcome,
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
                return;
            }
        };

        let record = self
            .state
            .history()
            .last()
            .cloned()
            .expect("commit stores a record");
        self.hints.record(&record.word, record.feedback);
        self.add_message(
            &format!("{} {}", record.word.text(), record.feedback.to_emoji()),
            MessageStyle::Info,
        );

        match outcome.status {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                let guess_count = self.state.history().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if guess_count <= 6 {
                    self.stats.guess_distribution[guess_count] += 1;
                }

                let celebration = match guess_count {
                    1 => "🎯 GENIUS! First try! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ IMPRESSIVE! Three guesses! ✨",
                    4 => "👏 SPLENDID! Four guesses! 👏",
                    5 => "🎉 GREAT! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("💀 Out of guesses! The word was {}.", self.state.target()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    pub fn new_game(&mut self) {
        self.state = GameState::new(random_target(self.pool));
        self.hints.reset();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
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
}

/// Run the TUI application
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
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Terminal state: everything else is ignored
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.handle_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.handle_backspace();
                    }
                    KeyCode::Enter => {
                        app.handle_submit();
                    }
                    _ => {
                        // All other input ignored
                    }
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
