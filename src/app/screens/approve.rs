//! Approval screen implementation
//!
//! Step 5: a static confirmation checklist and one control that tells the
//! service the optimized resume is approved.

use super::widgets::{render_error, render_title, Button};
use super::{Step, StepEvent, StepOutcome};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::{key_to_navigation, NavigationAction, StepId};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};
use tracing::warn;

pub const APPROVE_FAILED: &str = "Failed to approve. Please try again.";

/// Confirmation rows; not derived from server data
const CHECKLIST: &[(&str, &str)] = &[
    ("Resume", "Optimized ✓"),
    ("Skills Updated", "Yes ✓"),
    ("Human Reviewed", "Yes ✓"),
];

/// Resume approval screen
#[derive(Debug, Default)]
pub struct ApproveScreen {
    outcome: StepOutcome<()>,
}

impl ApproveScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_checklist(&self, f: &mut Frame, area: Rect) {
        let rows: Vec<Row> = CHECKLIST
            .iter()
            .map(|(label, value)| {
                Row::new(vec![label.to_string(), value.to_string()])
                    .style(Style::default().fg(Color::White))
            })
            .collect();

        let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(14)])
            .block(Block::default().borders(Borders::ALL))
            .column_spacing(2);
        f.render_widget(table, area);
    }
}

impl Step for ApproveScreen {
    fn id(&self) -> StepId {
        StepId::Approve
    }

    fn handle_key(&mut self, key: KeyEvent) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        match key_to_navigation(key) {
            NavigationAction::Select => {
                self.outcome.start();
                StepEvent::Request(ApiRequest::ApproveResume)
            }
            _ => StepEvent::None,
        }
    }

    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match result {
            Ok(_) => {
                self.outcome.succeed(());
                StepEvent::Complete
            }
            Err(err) => {
                warn!(error = %err, "resume approval failed");
                self.outcome.fail(APPROVE_FAILED);
                StepEvent::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title and subtitle
                Constraint::Length(1),
                Constraint::Length(5), // Checklist
                Constraint::Min(3),    // Error
                Constraint::Length(3), // Confirm control
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Confirm & Approve",
            "Your optimized resume is ready. Confirm to proceed with the application.",
        );
        self.render_checklist(f, chunks[2]);
        render_error(f, chunks[3], self.outcome.error());
        Button::new("Confirm & Apply")
            .busy_label("Confirming...")
            .busy(self.outcome.is_loading())
            .render(f, chunks[4], tick);
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
        vec![("Enter", "Confirm & Apply"), ("Q", "Quit")]
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
    fn test_approve_success_completes() {
        let mut screen = ApproveScreen::new();
        assert_eq!(
            screen.handle_key(enter()),
            StepEvent::Request(ApiRequest::ApproveResume)
        );
        assert!(!screen.action_enabled());
        assert_eq!(screen.handle_key(enter()), StepEvent::None);
        assert_eq!(screen.on_response(Ok(ApiResponse::Ack)), StepEvent::Complete);
    }

    #[test]
    fn test_approve_failure_message() {
        let mut screen = ApproveScreen::new();
        screen.handle_key(enter());
        let err = ApiError::Status {
            operation: crate::api::Operation::ApproveResume,
            status: 502,
        };
        assert_eq!(screen.on_response(Err(err)), StepEvent::None);
        assert_eq!(screen.error_message(), Some(APPROVE_FAILED));
        assert!(screen.action_enabled());
    }

    #[test]
    fn test_checklist_is_static() {
        assert_eq!(CHECKLIST.len(), 3);
        assert!(CHECKLIST.iter().all(|(_, value)| value.ends_with('✓')));
    }
}
