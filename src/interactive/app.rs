//! TUI application state and logic

use crate::commands::GameMode;
use crate::engine::{
    DrawError, DuetSession, QuartetSession, Session, SoloSession, SubmitError,
};
use crate::output::signal_messages;
use crate::services::{AccentCache, OfflineService, WordService};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// The running session, dispatched by board count
pub enum ActiveGame {
    Solo(SoloSession),
    Duet(DuetSession),
    Quartet(QuartetSession),
}

impl ActiveGame {
    fn start<S>(mode: GameMode, service: &mut S) -> Result<Self, DrawError>
    where
        S: WordService + ?Sized,
    {
        match mode {
            GameMode::Solo => Ok(Self::Solo(SoloSession::new_solo(service)?)),
            GameMode::Duet => Ok(Self::Duet(DuetSession::new_duet(service)?)),
            GameMode::Quartet => Ok(Self::Quartet(QuartetSession::new_quartet(service)?)),
        }
    }

    fn add_letter(&mut self, c: char) {
        match self {
            Self::Solo(s) => s.add_letter(c),
            Self::Duet(s) => s.add_letter(c),
            Self::Quartet(s) => s.add_letter(c),
        }
    }

    fn remove_letter(&mut self) {
        match self {
            Self::Solo(s) => s.remove_letter(),
            Self::Duet(s) => s.remove_letter(),
            Self::Quartet(s) => s.remove_letter(),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        fn shift<const N: usize>(session: &mut Session<N>, delta: isize) {
            let cursor = session.buffer().cursor() as isize;
            let target = (cursor + delta).max(0) as usize;
            session.select_slot(target);
        }
        match self {
            Self::Solo(s) => shift(s, delta),
            Self::Duet(s) => shift(s, delta),
            Self::Quartet(s) => shift(s, delta),
        }
    }

    /// Submit the buffer; returns the presentation messages
    fn submit<S>(
        &mut self,
        service: &mut S,
        accents: &mut AccentCache,
    ) -> Result<Vec<String>, SubmitError>
    where
        S: WordService + ?Sized,
    {
        match self {
            Self::Solo(s) => s.submit_guess(service, accents).map(|r| signal_messages(&r)),
            Self::Duet(s) => s.submit_guess(service, accents).map(|r| signal_messages(&r)),
            Self::Quartet(s) => s.submit_guess(service, accents).map(|r| signal_messages(&r)),
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            Self::Solo(s) => s.is_over(),
            Self::Duet(s) => s.is_over(),
            Self::Quartet(s) => s.is_over(),
        }
    }

    pub fn is_won(&self) -> bool {
        match self {
            Self::Solo(s) => s.is_won(),
            Self::Duet(s) => s.is_won(),
            Self::Quartet(s) => s.is_won(),
        }
    }

    pub fn attempts_used(&self) -> usize {
        match self {
            Self::Solo(s) => s.attempts_used(),
            Self::Duet(s) => s.attempts_used(),
            Self::Quartet(s) => s.attempts_used(),
        }
    }

    pub fn max_attempts(&self) -> usize {
        match self {
            Self::Solo(s) => s.max_attempts(),
            Self::Duet(s) => s.max_attempts(),
            Self::Quartet(s) => s.max_attempts(),
        }
    }
}

/// Application state
pub struct App {
    pub game: ActiveGame,
    pub mode: GameMode,
    pub timed: bool,
    pub service: OfflineService,
    pub accents: AccentCache,
    pub messages: Vec<Message>,
    pub elapsed: Duration,
    pub should_quit: bool,
    started: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Start a fresh app for the chosen mode
    ///
    /// # Errors
    /// Returns an error when the target draw fails.
    pub fn new(mode: GameMode, timed: bool) -> Result<Self> {
        let mut service = OfflineService::new();
        let game = ActiveGame::start(mode, &mut service)?;

        let mut app = Self {
            game,
            mode,
            timed,
            service,
            accents: AccentCache::new(),
            messages: Vec::new(),
            elapsed: Duration::ZERO,
            should_quit: false,
            started: Instant::now(),
        };
        app.add_message(
            format!("New {} game - type your first word", mode.label()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });
        // Keep the log short
        if self.messages.len() > 50 {
            self.messages.remove(0);
        }
    }

    /// Periodic tick from the host loop; only feeds the clock display
    pub fn tick(&mut self) {
        if self.timed && !self.game.is_over() {
            self.elapsed = self.started.elapsed();
        }
    }

    /// Whether the solo buffer is one letter from the target right now
    pub fn near_miss(&self) -> bool {
        match &self.game {
            ActiveGame::Solo(session) => session.one_letter_away(),
            _ => false,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.hint();
            }
            KeyCode::Char(c) => {
                self.game.add_letter(c);
            }
            KeyCode::Backspace => {
                self.game.remove_letter();
            }
            KeyCode::Left => {
                self.game.move_cursor(-1);
            }
            KeyCode::Right => {
                self.game.move_cursor(1);
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.game.submit(&mut self.service, &mut self.accents) {
            Ok(messages) => {
                for text in messages {
                    self.add_message(text, MessageStyle::Success);
                }
                if self.game.is_over() {
                    let outcome = if self.game.is_won() {
                        Message {
                            text: "Ctrl+N for a new game".to_string(),
                            style: MessageStyle::Info,
                        }
                    } else {
                        Message {
                            text: "Out of attempts - Ctrl+N for a new game".to_string(),
                            style: MessageStyle::Error,
                        }
                    };
                    self.messages.push(outcome);
                }
            }
            Err(e) => self.add_message(e.to_string(), MessageStyle::Error),
        }
    }

    fn hint(&mut self) {
        match &mut self.game {
            ActiveGame::Solo(session) => {
                if let Some(position) = session.apply_reveal(&mut rand::rng()) {
                    self.add_message(
                        format!("Revealed the letter at position {}", position + 1),
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message("Nothing left to reveal", MessageStyle::Info);
                }
            }
            _ => self.add_message("Hints are solo-only", MessageStyle::Info),
        }
    }

    fn new_game(&mut self) {
        match ActiveGame::start(self.mode, &mut self.service) {
            Ok(game) => {
                self.game = game;
                self.messages.clear();
                self.elapsed = Duration::ZERO;
                self.started = Instant::now();
                self.add_message("New game started", MessageStyle::Info);
            }
            Err(e) => self.add_message(e.to_string(), MessageStyle::Error),
        }
    }
}

/// Run the TUI until the player quits
///
/// # Errors
/// Returns an error on terminal I/O failure.
pub fn run_tui(app: App) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the speed-run clock keeps moving between keys
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.on_key(key);
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
