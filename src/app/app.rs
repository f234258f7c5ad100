//! Main application controller
//!
//! Owns the terminal and the wizard, and runs the draw/input loop.

use crate::{
    api::ApiClient,
    app::{screens::ScreenContext, tui::Tui, wizard::Wizard},
    config::AppConfig,
    Result,
};
use std::io;
use tracing::info;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Step sequencing and remote requests
    wizard: Wizard,
}

impl App {
    /// Create a new application instance; must run inside a tokio runtime
    pub fn new(config: &AppConfig, context: ScreenContext) -> Result<Self> {
        info!(base_url = %config.api.base_url, "starting wizard");
        Ok(Self {
            tui: Tui::new()?,
            wizard: Wizard::new(ApiClient::new(&config.api.base_url), context),
        })
    }

    /// Initialize the TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        while !self.wizard.should_quit() {
            self.wizard.poll_responses();
            self.draw()?;
            if let Some(event) = self.tui.handle_events()? {
                self.wizard.handle_event(event);
            }
            // Input polling blocks for up to one tick; let request tasks progress
            tokio::task::yield_now().await;
        }
        info!("user quit");
        self.restore()
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        let tick = self.tui.ticks();
        let wizard = &mut self.wizard;
        self.tui.draw(|f| wizard.render(f, tick))
    }
}
