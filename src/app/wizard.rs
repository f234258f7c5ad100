//! Wizard controller
//!
//! Glues the sequencer, the active screen and the service client together.
//! Requests run as tokio tasks and report back over a channel; each
//! response is tagged with the screen generation that asked for it, so a
//! response for a screen that has since been replaced is dropped.

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResponse};
use crate::app::screens::{self, widgets, ScreenContext, Step, StepEvent};
use crate::app::state::{is_force_quit, key_to_navigation, NavigationAction, Sequencer, StepId};
use crate::app::tui::TuiEvent;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A finished request, tagged with the screen generation that sent it
#[derive(Debug)]
struct StepResponse {
    generation: u64,
    result: Result<ApiResponse, ApiError>,
}

/// Headless wizard controller
pub struct Wizard {
    sequencer: Sequencer,
    screen: Option<Box<dyn Step>>,
    context: ScreenContext,
    client: Arc<ApiClient>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    response_tx: mpsc::Sender<StepResponse>,
    response_rx: mpsc::Receiver<StepResponse>,
    should_quit: bool,
}

impl Wizard {
    /// Create the wizard positioned on step 1.
    ///
    /// Must be called inside a tokio runtime: mounting a screen may spawn
    /// its first request.
    pub fn new(client: ApiClient, context: ScreenContext) -> Self {
        let (response_tx, response_rx) = mpsc::channel(16);
        let mut wizard = Self {
            sequencer: Sequencer::new(),
            screen: None,
            context,
            client: Arc::new(client),
            generation: 0,
            in_flight: None,
            response_tx,
            response_rx,
            should_quit: false,
        };
        wizard.mount_active();
        wizard
    }

    /// Current step number
    pub fn current_step(&self) -> u8 {
        self.sequencer.current_step()
    }

    /// Step whose screen is mounted
    pub fn active_step(&self) -> Option<StepId> {
        self.screen.as_ref().map(|s| s.id())
    }

    /// The mounted screen
    pub fn screen(&self) -> Option<&dyn Step> {
        self.screen.as_deref()
    }

    /// Whether a request is outstanding
    pub fn has_request_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag and drop any outstanding request
    pub fn quit(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.should_quit = true;
    }

    /// Route a terminal event
    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) => self.handle_key(key),
            TuiEvent::Paste(text) => self.handle_paste(&text),
        }
    }

    /// Route a key press: global quit first, then the active screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_force_quit(key) {
            self.quit();
            return;
        }

        let captures_text = self.screen.as_ref().is_some_and(|s| s.captures_text());
        if !captures_text && key_to_navigation(key) == NavigationAction::Quit {
            self.quit();
            return;
        }

        let event = match self.screen.as_mut() {
            Some(screen) => screen.handle_key(key),
            None => StepEvent::None,
        };
        self.dispatch(event);
    }

    /// Route pasted text to the active screen
    pub fn handle_paste(&mut self, text: &str) {
        let event = match self.screen.as_mut() {
            Some(screen) => screen.handle_paste(text),
            None => StepEvent::None,
        };
        self.dispatch(event);
    }

    /// Apply every response that has already arrived
    pub fn poll_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.process_response(response);
        }
    }

    /// Wait until no request is outstanding, applying responses as they
    /// arrive (including any follow-up request a response triggers)
    pub async fn settle(&mut self) {
        while self.in_flight.is_some() {
            match self.response_rx.recv().await {
                Some(response) => self.process_response(response),
                None => break,
            }
        }
    }

    fn process_response(&mut self, response: StepResponse) {
        if response.generation != self.generation {
            debug!(
                stale = response.generation,
                current = self.generation,
                "discarding response for a replaced screen"
            );
            return;
        }
        self.in_flight = None;

        let event = match self.screen.as_mut() {
            Some(screen) => screen.on_response(response.result),
            None => StepEvent::None,
        };
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: StepEvent) {
        match event {
            StepEvent::None => {}
            StepEvent::Request(request) => self.spawn_request(request),
            StepEvent::Complete => self.complete_step(),
        }
    }

    fn spawn_request(&mut self, request: ApiRequest) {
        if let Some(previous) = self.in_flight.take() {
            warn!("screen issued a request while another was in flight; aborting the older one");
            previous.abort();
        }

        let client = Arc::clone(&self.client);
        let tx = self.response_tx.clone();
        let generation = self.generation;
        self.in_flight = Some(tokio::spawn(async move {
            let result = client.execute(request).await;
            // Receiver gone means the wizard has shut down
            let _ = tx.send(StepResponse { generation, result }).await;
        }));
    }

    fn complete_step(&mut self) {
        let transition = self.sequencer.completion();
        info!(step = self.sequencer.current_step(), ?transition, "step complete");
        self.sequencer.apply(transition);
        self.mount_active();
    }

    // Replace the mounted screen with a fresh one for the current step.
    fn mount_active(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.generation += 1;
        self.screen = self
            .sequencer
            .active_step()
            .map(|step| screens::build(step, &self.context));

        let event = match self.screen.as_mut() {
            Some(screen) => screen.on_mount(),
            None => StepEvent::None,
        };
        self.dispatch(event);
    }

    /// Render header, progress, the active screen and the help bar
    pub fn render(&mut self, f: &mut Frame, tick: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(3), // Step progress
                Constraint::Min(12),   // Active screen
                Constraint::Length(1), // Footer
                Constraint::Length(3), // Help
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        widgets::render_progress(f, chunks[1], self.sequencer.current_step());

        let body = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = body.inner(chunks[2]);
        f.render_widget(body, chunks[2]);
        if let Some(screen) = self.screen.as_mut() {
            screen.render(f, inner, tick);
        }

        let footer = Paragraph::new(Span::styled(
            "Nothing is sent without your approval.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[3]);

        self.render_help(f, chunks[4]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled("⚡ AI Job Matcher", widgets::accent())),
            Line::from(Span::styled(
                "Human-in-the-Loop • You stay in control",
                Style::default().fg(Color::Gray),
            )),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let hints = self
            .screen
            .as_ref()
            .map(|s| s.key_hints())
            .unwrap_or_else(|| vec![("Q", "Quit")]);

        let help = Paragraph::new(widgets::key_hints_line(&hints))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

impl Drop for Wizard {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // Nothing listens on port 9; requests fail fast if made.
    fn offline_wizard() -> Wizard {
        Wizard::new(ApiClient::new("http://127.0.0.1:9"), ScreenContext::default())
    }

    #[tokio::test]
    async fn test_starts_on_upload_without_request() {
        let wizard = offline_wizard();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.active_step(), Some(StepId::Upload));
        assert!(!wizard.has_request_in_flight());
    }

    #[tokio::test]
    async fn test_q_is_typed_into_text_fields_not_quit() {
        let mut wizard = offline_wizard();
        assert!(wizard.screen().unwrap().captures_text());

        wizard.handle_key(key(KeyCode::Char('q')));
        assert!(!wizard.should_quit());

        wizard.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(wizard.should_quit());
    }

    #[tokio::test]
    async fn test_q_quits_outside_text_fields() {
        let mut wizard = offline_wizard();
        wizard.handle_key(key(KeyCode::Tab));
        assert!(!wizard.screen().unwrap().captures_text());

        wizard.handle_key(key(KeyCode::Char('q')));
        assert!(wizard.should_quit());
    }

    #[tokio::test]
    async fn test_stale_response_is_ignored() {
        let mut wizard = offline_wizard();
        let current = wizard.generation;
        let stale = StepResponse {
            generation: current - 1,
            result: Ok(ApiResponse::Ack),
        };
        wizard.process_response(stale);
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.generation, current);
    }

    #[tokio::test]
    async fn test_render_shows_chrome() {
        let mut wizard = offline_wizard();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| wizard.render(f, 0)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("AI Job Matcher"));
        assert!(text.contains("Upload Your Resume"));
        assert!(text.contains("Nothing is sent without your approval."));
    }
}
