//! Apply screen implementation
//!
//! Step 6: sends the application. Success swaps in a celebration view
//! whose "Start Over" control completes the step, which resets the wizard.

use super::widgets::{accent, render_error, render_title, Button};
use super::{Step, StepEvent, StepOutcome};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::{key_to_navigation, NavigationAction, StepId};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{info, warn};

pub const APPLY_FAILED: &str = "Application failed. Please try again.";

/// Application submission screen
#[derive(Debug, Default)]
pub struct ApplyScreen {
    outcome: StepOutcome<()>,
}

impl ApplyScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the application went through
    pub fn is_sent(&self) -> bool {
        self.outcome.success().is_some()
    }

    fn render_celebration(&self, f: &mut Frame, area: Rect, tick: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let text = vec![
            Line::from(Span::styled("Application Sent! 🎉", accent())),
            Line::from(""),
            Line::from(Span::styled(
                "Your AI-optimized resume has been submitted. Good luck!",
                Style::default().fg(Color::Gray),
            )),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
        Button::new("Start Over").render(f, chunks[3], tick);
    }
}

impl Step for ApplyScreen {
    fn id(&self) -> StepId {
        StepId::Apply
    }

    fn handle_key(&mut self, key: KeyEvent) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        if key_to_navigation(key) != NavigationAction::Select {
            return StepEvent::None;
        }
        if self.is_sent() {
            return StepEvent::Complete;
        }
        self.outcome.start();
        StepEvent::Request(ApiRequest::Apply)
    }

    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match result {
            Ok(_) => {
                info!("application sent");
                self.outcome.succeed(());
            }
            Err(err) => {
                warn!(error = %err, "application failed");
                self.outcome.fail(APPLY_FAILED);
            }
        }
        StepEvent::None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64) {
        if self.is_sent() {
            self.render_celebration(f, area, tick);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title and subtitle
                Constraint::Min(3),    // Error
                Constraint::Length(3), // Send control
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Ready to Apply",
            "Everything looks great. Send your application now!",
        );
        render_error(f, chunks[1], self.outcome.error());
        Button::new("Send Application")
            .busy_label("Sending Application...")
            .busy(self.outcome.is_loading())
            .render(f, chunks[2], tick);
    }

    fn is_busy(&self) -> bool {
        self.outcome.is_loading()
    }

    fn action_enabled(&self) -> bool {
        !self.outcome.is_loading()
    }

    fn error_message(&self) -> Option<&str> {
        self.outcome.error()
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.is_sent() {
            vec![("Enter", "Start Over"), ("Q", "Quit")]
        } else {
            vec![("Enter", "Send Application"), ("Q", "Quit")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn enter() -> KeyEvent {
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
    }

    #[test]
    fn test_success_shows_celebration_then_start_over_completes() {
        let mut screen = ApplyScreen::new();
        assert_eq!(screen.handle_key(enter()), StepEvent::Request(ApiRequest::Apply));
        assert!(screen.is_busy());

        assert_eq!(screen.on_response(Ok(ApiResponse::Ack)), StepEvent::None);
        assert!(screen.is_sent());
        assert_eq!(screen.key_hints()[0].1, "Start Over");

        assert_eq!(screen.handle_key(enter()), StepEvent::Complete);
    }

    #[test]
    fn test_failure_keeps_send_enabled() {
        let mut screen = ApplyScreen::new();
        screen.handle_key(enter());
        let err = ApiError::Status {
            operation: crate::api::Operation::Apply,
            status: 500,
        };
        screen.on_response(Err(err));

        assert!(!screen.is_sent());
        assert_eq!(screen.error_message(), Some(APPLY_FAILED));
        assert!(screen.action_enabled());
        assert_eq!(screen.handle_key(enter()), StepEvent::Request(ApiRequest::Apply));
        assert!(screen.error_message().is_none());
    }
}
