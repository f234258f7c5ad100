//! Job match screen implementation
//!
//! Step 3: fetches one recommendation on mount. Liking it completes the
//! step; skipping it tells the service and fetches a replacement without
//! leaving the step. A failed fetch ends the stream of recommendations.

use super::widgets::{render_error, render_loading, render_title, spinner_frame};
use super::{Step, StepEvent, StepOutcome};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::{key_to_navigation, NavigationAction, StepId};
use crate::models::{JobListing, SwipeAction};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{info, warn};

pub const NO_MORE_JOBS: &str = "No more jobs available.";
pub const SWIPE_FAILED: &str = "Failed to process. Try again.";

/// Job recommendation screen
#[derive(Debug, Default)]
pub struct JobScreen {
    outcome: StepOutcome<JobListing>,
    swiping: Option<SwipeAction>,
    swipe_error: Option<String>,
}

impl JobScreen {
    /// Create a new job screen; the first fetch happens on mount
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommendation currently on screen
    pub fn job(&self) -> Option<&JobListing> {
        self.outcome.success()
    }

    /// True once a fetch came back empty-handed
    pub fn is_exhausted(&self) -> bool {
        self.outcome.error().is_some()
    }

    fn fetch(&mut self) -> StepEvent {
        self.outcome.start();
        self.swipe_error = None;
        StepEvent::Request(ApiRequest::FetchJob)
    }

    fn swipe(&mut self, action: SwipeAction) -> StepEvent {
        if self.job().is_none() {
            return StepEvent::None;
        }
        self.swiping = Some(action);
        self.swipe_error = None;
        StepEvent::Request(ApiRequest::Swipe(action))
    }

    fn finish_fetch(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match result {
            Ok(ApiResponse::Job(job)) => {
                info!(title = %job.title, company = %job.company, "job recommendation received");
                self.outcome.succeed(job);
            }
            Ok(other) => {
                warn!(?other, "unexpected response to job fetch");
                self.outcome.fail(NO_MORE_JOBS);
            }
            Err(err) => {
                warn!(error = %err, "job fetch failed");
                self.outcome.fail(NO_MORE_JOBS);
            }
        }
        StepEvent::None
    }

    fn finish_swipe(
        &mut self,
        action: SwipeAction,
        result: Result<ApiResponse, ApiError>,
    ) -> StepEvent {
        match result {
            Ok(_) => {
                info!(action = action.as_str(), "swipe recorded");
                match action {
                    SwipeAction::Like => StepEvent::Complete,
                    SwipeAction::Reject => self.fetch(),
                }
            }
            Err(err) => {
                warn!(action = action.as_str(), error = %err, "swipe failed");
                self.swipe_error = Some(SWIPE_FAILED.to_string());
                StepEvent::None
            }
        }
    }

    fn render_card(&self, f: &mut Frame, area: Rect, job: &JobListing) {
        let mut meta = vec![Span::styled(
            format!("🏢 {}", job.company),
            Style::default().fg(Color::Gray),
        )];
        if let Some(location) = &job.location {
            meta.push(Span::raw("   "));
            meta.push(Span::styled(
                format!("📍 {}", location),
                Style::default().fg(Color::Gray),
            ));
        }

        let mut text = vec![
            Line::from(Span::styled(
                job.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(meta),
            Line::from(""),
        ];
        text.extend(job.description.lines().map(|l| Line::from(l.to_string())));

        let border = match self.swiping {
            Some(SwipeAction::Like) => Color::Green,
            Some(SwipeAction::Reject) => Color::Red,
            None => Color::Cyan,
        };
        let card = Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(card, area);
    }

    fn render_controls(&self, f: &mut Frame, area: Rect, tick: u64) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let disabled = self.swiping.is_some();
        let controls = [
            (SwipeAction::Reject, "✗ Skip", Color::Red, halves[0]),
            (SwipeAction::Like, "♥ Like", Color::Green, halves[1]),
        ];
        for (action, label, color, rect) in controls {
            let text = if self.swiping == Some(action) {
                format!("{} {}", spinner_frame(tick), label)
            } else {
                label.to_string()
            };
            let style = if disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };
            let widget = Paragraph::new(Span::styled(text, style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(widget, rect);
        }
    }
}

impl Step for JobScreen {
    fn id(&self) -> StepId {
        StepId::JobMatch
    }

    fn on_mount(&mut self) -> StepEvent {
        self.fetch()
    }

    fn handle_key(&mut self, key: KeyEvent) -> StepEvent {
        if self.is_busy() {
            return StepEvent::None;
        }
        if key.code == KeyCode::Char('x') {
            return self.swipe(SwipeAction::Reject);
        }
        match key_to_navigation(key) {
            NavigationAction::Left => self.swipe(SwipeAction::Reject),
            NavigationAction::Right => self.swipe(SwipeAction::Like),
            _ => StepEvent::None,
        }
    }

    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match self.swiping.take() {
            Some(action) => self.finish_swipe(action, result),
            None if self.outcome.is_loading() => self.finish_fetch(result),
            None => {
                warn!("response arrived with nothing in flight");
                StepEvent::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64) {
        if self.outcome.is_loading() {
            render_loading(f, area, "Finding your next opportunity...", tick);
            return;
        }

        let Some(job) = self.job().cloned() else {
            let message = self.outcome.error().unwrap_or(NO_MORE_JOBS);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(45), Constraint::Min(1)])
                .split(area);
            let widget = Paragraph::new(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Center);
            f.render_widget(widget, chunks[1]);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title and subtitle
                Constraint::Length(1),
                Constraint::Min(6),    // Job card
                Constraint::Length(3), // Error
                Constraint::Length(3), // Skip / Like
            ])
            .split(area);

        render_title(f, chunks[0], "Your Job Match", "→ to like, ← to skip");
        self.render_card(f, chunks[2], &job);
        render_error(f, chunks[3], self.swipe_error.as_deref());
        self.render_controls(f, chunks[4], tick);
    }

    fn is_busy(&self) -> bool {
        self.outcome.is_loading() || self.swiping.is_some()
    }

    fn action_enabled(&self) -> bool {
        self.job().is_some() && !self.is_busy()
    }

    fn error_message(&self) -> Option<&str> {
        self.swipe_error.as_deref().or(self.outcome.error())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.job().is_some() {
            vec![("←/x", "Skip"), ("→/l", "Like"), ("Q", "Quit")]
        } else {
            vec![("Q", "Quit")]
        }
    }
}
