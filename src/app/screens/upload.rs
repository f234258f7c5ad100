//! Upload screen implementation
//!
//! Step 1: pick a resume from the local disk (typed, or dropped onto the
//! terminal as a pasted path), then upload it. Nothing reaches the server
//! until the upload control is pressed.

use super::widgets::{render_error, render_title, Button};
use super::{Step, StepEvent, StepOutcome};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::{key_to_navigation, NavigationAction, StepId};
use crate::models::ResumeFile;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;
use tracing::{info, warn};
use tui_textarea::{CursorMove, TextArea};

pub const UPLOAD_FAILED: &str = "Upload failed. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Picker,
    Button,
}

/// Resume upload screen
pub struct UploadScreen {
    input: TextArea<'static>,
    focus: Focus,
    file: Option<ResumeFile>,
    outcome: StepOutcome<()>,
}

fn path_input(text: &str) -> TextArea<'static> {
    let mut input = TextArea::new(vec![text.to_string()]);
    input.set_placeholder_text("Type or drop a resume path (.pdf, .doc, .docx)");
    input.set_cursor_line_style(Style::default());
    input.move_cursor(CursorMove::End);
    input
}

impl UploadScreen {
    /// Create the screen, selecting `preselected` if it is a usable resume
    pub fn new(preselected: Option<&Path>) -> Self {
        let mut screen = Self {
            input: path_input(""),
            focus: Focus::Picker,
            file: None,
            outcome: StepOutcome::Idle,
        };
        if let Some(path) = preselected {
            screen.input = path_input(&path.to_string_lossy());
            screen.pick();
        }
        screen
    }

    /// File chosen for upload, if any
    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }

    fn input_text(&self) -> String {
        self.input.lines().join("")
    }

    // A new selection replaces the old one and clears any error.
    fn pick(&mut self) {
        let text = self.input_text();
        if text.trim().is_empty() {
            return;
        }
        match ResumeFile::select(&text) {
            Ok(file) => {
                info!(name = %file.name, size = file.size_bytes, "resume selected");
                self.file = Some(file);
                self.outcome = StepOutcome::Idle;
                self.focus = Focus::Button;
            }
            Err(err) => {
                warn!(error = %err, "resume selection rejected");
                self.file = None;
                self.outcome.fail(&err.to_string());
            }
        }
    }

    fn submit(&mut self) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        let Some(file) = self.file.clone() else {
            return StepEvent::None;
        };
        self.outcome.start();
        StepEvent::Request(ApiRequest::UploadResume(file))
    }

    fn render_file_summary(&self, f: &mut Frame, area: Rect) {
        let text = match &self.file {
            Some(file) => vec![
                Line::from(Span::styled(
                    file.name.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    file.summary(),
                    Style::default().fg(Color::Gray),
                )),
            ],
            None => vec![
                Line::from("Drag & drop your resume here"),
                Line::from(Span::styled(
                    "or type its path above • PDF, DOC, DOCX",
                    Style::default().fg(Color::Gray),
                )),
            ],
        };
        let border = if self.file.is_some() {
            Color::Green
        } else {
            Color::DarkGray
        };
        let widget = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(widget, area);
    }
}

impl Step for UploadScreen {
    fn id(&self) -> StepId {
        StepId::Upload
    }

    fn handle_key(&mut self, key: KeyEvent) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        match self.focus {
            Focus::Picker => match key.code {
                KeyCode::Enter => {
                    self.pick();
                    StepEvent::None
                }
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Down => {
                    self.focus = Focus::Button;
                    StepEvent::None
                }
                _ => {
                    self.input.input(key);
                    StepEvent::None
                }
            },
            Focus::Button => match key_to_navigation(key) {
                NavigationAction::Select => self.submit(),
                NavigationAction::Next | NavigationAction::Previous | NavigationAction::Up => {
                    self.focus = Focus::Picker;
                    StepEvent::None
                }
                _ => StepEvent::None,
            },
        }
    }

    fn handle_paste(&mut self, text: &str) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        let first_line = text.lines().next().unwrap_or_default();
        self.input = path_input(first_line.trim());
        self.pick();
        StepEvent::None
    }

    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match result {
            Ok(_) => {
                self.outcome.succeed(());
                StepEvent::Complete
            }
            Err(err) => {
                warn!(error = %err, "resume upload failed");
                self.outcome.fail(UPLOAD_FAILED);
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
                Constraint::Length(3), // Path input
                Constraint::Length(4), // Selected file
                Constraint::Min(3),    // Error
                Constraint::Length(3), // Upload control
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Upload Your Resume",
            "Drop your resume and let AI find the perfect match",
        );

        let border = if self.focus == Focus::Picker {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("Resume file")
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(&self.input, chunks[2]);

        self.render_file_summary(f, chunks[3]);
        render_error(f, chunks[4], self.outcome.error());

        Button::new("Upload Resume")
            .busy_label("Uploading...")
            .enabled(self.file.is_some())
            .focused(self.focus == Focus::Button)
            .busy(self.outcome.is_loading())
            .render(f, chunks[5], tick);
    }

    fn is_busy(&self) -> bool {
        self.outcome.is_loading()
    }

    fn action_enabled(&self) -> bool {
        self.file.is_some() && !self.outcome.is_loading()
    }

    fn error_message(&self) -> Option<&str> {
        self.outcome.error()
    }

    fn captures_text(&self) -> bool {
        self.focus == Focus::Picker
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focus {
            Focus::Picker => vec![
                ("Enter", "Select file"),
                ("Tab", "Upload control"),
                ("Ctrl+C", "Quit"),
            ],
            Focus::Button => vec![("Enter", "Upload"), ("Tab", "Edit path"), ("Q", "Quit")],
        }
    }
}
