//! TUI application state and logic

use crate::game::{GameSession, GameStatus, GuessError, Key, Statistics};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Maximum messages kept in the log panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'d> {
    rng: StdRng,
    pub session: GameSession<'d, WordList>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a terminal key event means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Press(Key),
}

impl Action {
    /// Map a terminal key event: letters, Backspace/Delete and Enter drive the game,
    /// Esc and Ctrl-C quit
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Enter => Some(Self::Press(Key::Enter)),
            KeyCode::Backspace | KeyCode::Delete => Some(Self::Press(Key::Delete)),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Key::from_char(c).map(Self::Press)
            }
            _ => None,
        }
    }
}

impl<'d> App<'d> {
    #[must_use]
    pub fn new(dictionary: &'d WordList, mut rng: StdRng) -> Self {
        let session = GameSession::new(dictionary, &mut rng);

        Self {
            rng,
            session,
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit, Esc to quit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Replace the finished session with a fresh one
    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.session.dictionary(), &mut self.rng);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Press(key) => self.handle_key(key),
        }
    }

    /// Apply a game key
    ///
    /// Once the game is over, any key starts a new one.
    pub fn handle_key(&mut self, key: Key) {
        if self.session.status().is_over() {
            self.new_game();
            return;
        }

        match key.press(&mut self.session) {
            None | Some(Err(GuessError::IncompleteGuess { .. } | GuessError::GameOver)) => {}
            Some(Err(GuessError::NotInDictionary { word })) => {
                self.add_message(&format!("Not in list: {word}"), MessageStyle::Error);
                self.session.clear_guess();
            }
            Some(Ok(_)) => self.on_guess_accepted(),
        }
    }

    fn on_guess_accepted(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                self.stats.record(&self.session);
                let celebration = match self.session.guesses().len() {
                    1 => "🎯 HOLE IN ONE! Nicely done!",
                    2 => "🔥 MAGNIFICENT! Nicely done!",
                    3 => "✨ SPLENDID! Nicely done!",
                    4 => "👏 GREAT JOB! Nicely done!",
                    5 => "🎉 NICE WORK! Nicely done!",
                    _ => "😅 PHEW! Nicely done!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press any key for a new game.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(&self.session);
                let reveal = format!("Sorry, the word was {}.", self.session.secret());
                self.add_message(&reveal, MessageStyle::Error);
                self.add_message("Press any key for a new game.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                let left = self.session.remaining_guesses();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
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
pub fn run_tui(app: App<'_>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!(%err, "tui exited with an error");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<Statistics> {
    debug!("tui started");

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = Action::from_key_event(key) {
                app.handle_action(action);
            }
        }
    }

    Ok(app.stats)
}
