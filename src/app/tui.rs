//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard/paste event processing for the TUI application.

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Input the application reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// Bracketed paste; terminals deliver dropped files this way
    Paste(String),
}

impl TuiEvent {
    /// Keep key presses and pastes; drop releases, repeats, mouse and resize
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            // Windows reports releases too
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
            Event::Paste(text) => Some(TuiEvent::Paste(text)),
            _ => None,
        }
    }
}

/// Animation clock advanced from the input loop
#[derive(Debug)]
struct Ticker {
    last_tick: Instant,
    tick_rate: Duration,
    ticks: u64,
}

impl Ticker {
    fn new(tick_rate: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            tick_rate,
            ticks: 0,
        }
    }

    /// Time left until the next tick is due
    fn timeout(&self) -> Duration {
        self.tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Count a tick if one is due
    fn update(&mut self) {
        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            self.ticks = self.ticks.wrapping_add(1);
        }
    }
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
    ticker: Ticker,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: false,
            ticker: Ticker::new(Duration::from_millis(100)), // spinner frame rate
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Animation ticks elapsed since start
    pub fn ticks(&self) -> u64 {
        self.ticker.ticks
    }

    /// Wait up to one tick for input and return it
    pub fn handle_events(&mut self) -> io::Result<Option<TuiEvent>> {
        let mut received = None;
        if event::poll(self.ticker.timeout())? {
            received = TuiEvent::from_crossterm(event::read()?);
        }
        self.ticker.update();
        Ok(received)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
