//! AI suggestions screen implementation
//!
//! Step 4: fetches the resume review on mount and shows missing skills,
//! suggested improvements and an editable resume body. Edits stay on this
//! screen; approving only moves the wizard on.

use super::widgets::{render_error, render_loading, render_title, Button};
use super::{Step, StepEvent, StepOutcome};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::{key_to_navigation, NavigationAction, StepId};
use crate::models::ResumeSuggestions;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, warn};
use tui_textarea::TextArea;

pub const SUGGESTIONS_FAILED: &str = "Failed to load suggestions.";

/// Resume review screen
pub struct SuggestionsScreen {
    outcome: StepOutcome<ResumeSuggestions>,
    editor: TextArea<'static>,
    editing: bool,
}

impl SuggestionsScreen {
    /// Create a new suggestions screen; the fetch happens on mount
    pub fn new() -> Self {
        Self {
            outcome: StepOutcome::Idle,
            editor: TextArea::default(),
            editing: false,
        }
    }

    /// The review, once loaded
    pub fn suggestions(&self) -> Option<&ResumeSuggestions> {
        self.outcome.success()
    }

    /// Current contents of the resume editor
    pub fn resume_text(&self) -> String {
        self.editor.lines().join("\n")
    }

    /// Whether the editor owns the keyboard
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn approve(&mut self) -> StepEvent {
        debug!(
            chars = self.resume_text().chars().count(),
            "resume edits kept local on approval"
        );
        StepEvent::Complete
    }

    fn render_review(&self, f: &mut Frame, area: Rect) {
        let mut text = Vec::new();
        if let Some(review) = self.outcome.success() {
            if !review.missing_skills.is_empty() {
                text.push(Line::from(Span::styled(
                    "✦ Missing Skills",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                let chips: Vec<Span> = review
                    .missing_skills
                    .iter()
                    .flat_map(|skill| {
                        [
                            Span::styled(format!("+ {}", skill), Style::default().fg(Color::Green)),
                            Span::raw("  "),
                        ]
                    })
                    .collect();
                text.push(Line::from(chips));
                text.push(Line::from(""));
            }
            if !review.improvements.is_empty() {
                text.push(Line::from(Span::styled(
                    "✔ Suggested Improvements",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for item in &review.improvements {
                    text.push(Line::from(format!("• {}", item)));
                }
            }
        }

        if text.is_empty() {
            return;
        }
        let widget = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }
}

impl Default for SuggestionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for SuggestionsScreen {
    fn id(&self) -> StepId {
        StepId::Suggestions
    }

    fn on_mount(&mut self) -> StepEvent {
        self.outcome.start();
        StepEvent::Request(ApiRequest::FetchSuggestions)
    }

    fn handle_key(&mut self, key: KeyEvent) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        if self.editing {
            if matches!(key.code, KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab) {
                self.editing = false;
            } else {
                self.editor.input(key);
            }
            return StepEvent::None;
        }
        match key_to_navigation(key) {
            NavigationAction::Select => self.approve(),
            NavigationAction::Next | NavigationAction::Previous => {
                self.editing = true;
                StepEvent::None
            }
            _ => StepEvent::None,
        }
    }

    fn handle_paste(&mut self, text: &str) -> StepEvent {
        if self.editing {
            self.editor.insert_str(text);
        }
        StepEvent::None
    }

    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match result {
            Ok(ApiResponse::Suggestions(review)) => {
                let body = review.suggestions.clone().unwrap_or_default();
                self.editor = TextArea::new(body.lines().map(str::to_string).collect());
                self.outcome.succeed(review);
            }
            Ok(other) => {
                warn!(?other, "unexpected response to suggestions fetch");
                self.outcome.fail(SUGGESTIONS_FAILED);
            }
            Err(err) => {
                warn!(error = %err, "suggestions fetch failed");
                self.outcome.fail(SUGGESTIONS_FAILED);
            }
        }
        StepEvent::None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64) {
        if self.outcome.is_loading() {
            render_loading(f, area, "AI is analyzing your resume...", tick);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),      // Title and subtitle
                Constraint::Percentage(30), // Skills and improvements
                Constraint::Min(6),         // Resume editor
                Constraint::Length(3),      // Error
                Constraint::Length(3),      // Approve control
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "AI Suggestions",
            "Review and edit the improvements before approving",
        );
        self.render_review(f, chunks[1]);

        let border = if self.editing {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.editor.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("Updated Resume")
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(&self.editor, chunks[2]);

        render_error(f, chunks[3], self.outcome.error());
        Button::new("Approve Changes")
            .focused(!self.editing)
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

    fn captures_text(&self) -> bool {
        self.editing
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.editing {
            vec![("Esc", "Done editing"), ("Ctrl+C", "Quit")]
        } else {
            vec![("Enter", "Approve Changes"), ("Tab", "Edit resume"), ("Q", "Quit")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn review() -> ResumeSuggestions {
        ResumeSuggestions {
            missing_skills: vec!["Kubernetes".to_string()],
            improvements: vec!["Quantify impact".to_string()],
            suggestions: Some("Line one\nLine two".to_string()),
        }
    }

    #[test]
    fn test_fetch_on_mount_and_fill_editor() {
        let mut screen = SuggestionsScreen::new();
        assert_eq!(
            screen.on_mount(),
            StepEvent::Request(ApiRequest::FetchSuggestions)
        );
        assert!(screen.is_busy());
        assert!(!screen.action_enabled());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), StepEvent::None);

        screen.on_response(Ok(ApiResponse::Suggestions(review())));
        assert_eq!(screen.resume_text(), "Line one\nLine two");
        assert_eq!(screen.suggestions().map(|s| s.missing_skills.len()), Some(1));
        assert!(screen.action_enabled());
    }

    #[test]
    fn test_edit_then_approve() {
        let mut screen = SuggestionsScreen::new();
        screen.on_mount();
        screen.on_response(Ok(ApiResponse::Suggestions(ResumeSuggestions::default())));

        screen.handle_key(key(KeyCode::Tab));
        assert!(screen.captures_text());
        // Enter inserts a newline while editing rather than approving
        for c in "Hi".chars() {
            assert_eq!(screen.handle_key(key(KeyCode::Char(c))), StepEvent::None);
        }
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), StepEvent::None);
        assert_eq!(screen.resume_text(), "Hi\n");

        screen.handle_key(key(KeyCode::Esc));
        assert!(!screen.is_editing());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), StepEvent::Complete);
    }

    #[test]
    fn test_failure_still_allows_approval() {
        let mut screen = SuggestionsScreen::new();
        screen.on_mount();
        let err = ApiError::Status {
            operation: crate::api::Operation::FetchSuggestions,
            status: 500,
        };
        screen.on_response(Err(err));

        assert_eq!(screen.error_message(), Some(SUGGESTIONS_FAILED));
        assert!(screen.action_enabled());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), StepEvent::Complete);
    }
}
