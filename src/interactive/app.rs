//! TUI application state and logic

use crate::game::{Game, GameConfig, Notification, Notifier, RoundState, Session, Severity};
use crate::wordlists::{Key, SelectError, WordBank, keyboard_rows};
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
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop waits for input before polling the timer
const TICK_RATE: Duration = Duration::from_millis(100);
const MESSAGE_LIMIT: usize = 5;

/// Most recent notifications, oldest first
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: VecDeque<Notification>,
}

impl MessageLog {
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.messages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.messages.back()
    }
}

impl Notifier for MessageLog {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.messages.push_back(Notification {
            severity,
            text: message.to_string(),
        });
        while self.messages.len() > MESSAGE_LIMIT {
            self.messages.pop_front();
        }
    }
}

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub game: Game<'a, MessageLog>,
    pub keyboard: Vec<Vec<Key>>,
    pub input: String,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// # Errors
    /// Returns `SelectError` if the starting level is invalid.
    pub fn new(
        bank: &'a WordBank,
        config: GameConfig,
        session: Session,
    ) -> Result<Self, SelectError> {
        let mut messages = MessageLog::default();
        messages.notify(
            Severity::Info,
            "Guess the word! Green = right spot, yellow = wrong spot.",
        );
        let game = Game::new(bank, config, session, messages)?;
        let keyboard = keyboard_rows(bank, game.round().level())?;
        Ok(Self {
            bank,
            game,
            keyboard,
            input: String::new(),
            should_quit: false,
        })
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.game.round().target().len()
    }

    /// Whether keys currently reach the board
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.game.is_finished()
            && self.game.pending_advance().is_none()
            && self.game.round().state() == RoundState::Playing
    }

    #[must_use]
    pub fn row_full(&self) -> bool {
        self.input.len() == self.word_len()
    }

    #[must_use]
    pub fn has_key(&self, letter: u8) -> bool {
        self.keyboard
            .iter()
            .flatten()
            .any(|key| *key == Key::Letter(letter))
    }

    pub fn type_letter(&mut self, c: char) {
        if !self.accepts_input() || !c.is_ascii_alphabetic() || self.row_full() {
            return;
        }
        let upper = c.to_ascii_uppercase();
        if let Ok(letter) = u8::try_from(upper)
            && self.has_key(letter)
        {
            self.input.push(upper);
        }
    }

    pub fn delete_letter(&mut self) {
        if self.accepts_input() {
            self.input.pop();
        }
    }

    /// Submit the typed row; ignored until every cell is filled
    pub fn submit(&mut self, now: Instant) {
        if !self.accepts_input() || !self.row_full() {
            return;
        }
        let guess = std::mem::take(&mut self.input);
        if let Err(err) = self.game.submit(&guess, now) {
            log::debug!("guess {guess} rejected: {err}");
            self.input = guess;
        }
    }

    /// Fire a due level advance
    ///
    /// # Errors
    /// Returns `SelectError` if the next level has no word.
    pub fn tick(&mut self, now: Instant) -> Result<bool, SelectError> {
        let advanced = self.game.tick(now)?;
        if advanced {
            self.keyboard = keyboard_rows(self.bank, self.game.round().level())?;
            self.input.clear();
        }
        Ok(advanced)
    }

    pub fn press(&mut self, key: Key, now: Instant) {
        match key {
            Key::Letter(c) => self.type_letter(char::from(c)),
            Key::Enter => self.submit(now),
            Key::Delete => self.delete_letter(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Esc => self.quit(),
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    /// Stop the loop; a pending advance is dropped so it never fires
    pub fn quit(&mut self) {
        self.game.cancel_pending();
        self.should_quit = true;
    }

    /// Time until the loop must wake up again
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.game
            .pending_advance()
            .map_or(TICK_RATE, |timer| timer.remaining(now).min(TICK_RATE))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(session) => {
            println!("👋 Final score: {} (level {})", session.score(), session.level());
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Session> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only key presses count (Windows also reports releases)
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
        app.tick(Instant::now())?;
    }

    Ok(app.game.session())
}
