//! Role selection screen implementation
//!
//! Step 2: choose one of the five target roles from a dropdown and ask the
//! service to load matching jobs.

use super::widgets::{render_error, render_title, Button};
use super::{Step, StepEvent, StepOutcome};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::{key_to_navigation, NavigationAction, StepId};
use crate::models::Role;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::warn;

pub const SELECT_ROLE_FAILED: &str = "Failed to load jobs. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Dropdown,
    Button,
}

/// Role selection screen
#[derive(Debug)]
pub struct RoleScreen {
    role: Option<Role>,
    focus: Focus,
    open: bool,
    highlighted: usize,
    list_state: ListState,
    outcome: StepOutcome<()>,
}

impl RoleScreen {
    /// Create a new role screen with nothing chosen
    pub fn new() -> Self {
        Self {
            role: None,
            focus: Focus::Dropdown,
            open: false,
            highlighted: 0,
            list_state: ListState::default(),
            outcome: StepOutcome::Idle,
        }
    }

    /// Currently chosen role
    pub fn selected_role(&self) -> Option<Role> {
        self.role
    }

    /// Whether the dropdown list is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn toggle_dropdown(&mut self) {
        self.open = !self.open;
        if self.open {
            self.highlighted = self
                .role
                .and_then(|r| Role::all().iter().position(|x| *x == r))
                .unwrap_or(0);
            self.list_state.select(Some(self.highlighted));
        }
    }

    /// Move highlight up, wrapping to the bottom
    fn select_previous(&mut self) {
        let count = Role::all().len();
        self.highlighted = if self.highlighted > 0 {
            self.highlighted - 1
        } else {
            count - 1
        };
        self.list_state.select(Some(self.highlighted));
    }

    /// Move highlight down, wrapping to the top
    fn select_next(&mut self) {
        let count = Role::all().len();
        self.highlighted = if self.highlighted < count - 1 {
            self.highlighted + 1
        } else {
            0
        };
        self.list_state.select(Some(self.highlighted));
    }

    fn confirm_highlighted(&mut self) {
        self.role = Role::all().get(self.highlighted).copied();
        self.open = false;
        self.focus = Focus::Button;
    }

    fn submit(&mut self) -> StepEvent {
        let Some(role) = self.role else {
            return StepEvent::None;
        };
        self.outcome.start();
        StepEvent::Request(ApiRequest::SelectRole(role))
    }

    fn render_dropdown(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let (label, style) = match self.role {
            Some(role) => (role.name(), Style::default().fg(Color::White)),
            None => ("Select a role...", Style::default().fg(Color::Gray)),
        };
        let arrow = if self.open { "▲" } else { "▼" };
        let border = if self.focus == Focus::Dropdown {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let field = Paragraph::new(Span::styled(format!("{}  {}", label, arrow), style)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Role")
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(field, chunks[0]);

        if self.open {
            let items: Vec<ListItem> = Role::all()
                .iter()
                .map(|role| ListItem::new(role.name()))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, chunks[1], &mut self.list_state);
        }
    }
}

impl Default for RoleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for RoleScreen {
    fn id(&self) -> StepId {
        StepId::SelectRole
    }

    fn handle_key(&mut self, key: KeyEvent) -> StepEvent {
        if self.outcome.is_loading() {
            return StepEvent::None;
        }
        let action = key_to_navigation(key);

        if self.open {
            match action {
                NavigationAction::Up => self.select_previous(),
                NavigationAction::Down => self.select_next(),
                NavigationAction::Select => self.confirm_highlighted(),
                NavigationAction::Back => self.open = false,
                _ => {}
            }
            return StepEvent::None;
        }

        match (self.focus, action) {
            (Focus::Dropdown, NavigationAction::Select) => self.toggle_dropdown(),
            (Focus::Dropdown, NavigationAction::Next | NavigationAction::Down) => {
                self.focus = Focus::Button
            }
            (Focus::Button, NavigationAction::Select) => return self.submit(),
            (Focus::Button, NavigationAction::Previous | NavigationAction::Up) => {
                self.focus = Focus::Dropdown
            }
            _ => {}
        }
        StepEvent::None
    }

    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent {
        match result {
            Ok(_) => {
                self.outcome.succeed(());
                StepEvent::Complete
            }
            Err(err) => {
                warn!(error = %err, "role selection failed");
                self.outcome.fail(SELECT_ROLE_FAILED);
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
                Constraint::Min(3),    // Dropdown
                Constraint::Length(3), // Error
                Constraint::Length(3), // Find Jobs control
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Select Your Role",
            "Choose the role you're looking for",
        );
        self.render_dropdown(f, chunks[2]);
        render_error(f, chunks[3], self.outcome.error());

        Button::new("Find Jobs")
            .busy_label("Loading Jobs...")
            .enabled(self.role.is_some())
            .focused(self.focus == Focus::Button && !self.open)
            .busy(self.outcome.is_loading())
            .render(f, chunks[4], tick);
    }

    fn is_busy(&self) -> bool {
        self.outcome.is_loading()
    }

    fn action_enabled(&self) -> bool {
        self.role.is_some() && !self.outcome.is_loading()
    }

    fn error_message(&self) -> Option<&str> {
        self.outcome.error()
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.open {
            vec![("↑↓", "Navigate"), ("Enter", "Choose"), ("Esc", "Close")]
        } else {
            vec![("Enter", "Open / Press"), ("Tab", "Switch"), ("Q", "Quit")]
        }
    }
}
