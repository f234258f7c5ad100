//! Shared rendering pieces
//!
//! Titles, inline error boxes, spinners, buttons, the step progress
//! indicator and the key hint bar all look the same on every screen.

use crate::app::state::StepId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Accent style used for key names and highlights
pub fn accent() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Screen heading with a muted subtitle underneath
pub fn render_title(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let text = vec![
        Line::from(Span::styled(title.to_string(), accent())),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let widget = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Inline error box; renders nothing without a message
pub fn render_error(f: &mut Frame, area: Rect, message: Option<&str>) {
    let Some(message) = message else {
        return;
    };
    let widget = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(widget, area);
}

/// Centered spinner with a message, used while a fetch is in flight
pub fn render_loading(f: &mut Frame, area: Rect, message: &str, tick: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let text = vec![
        Line::from(Span::styled(spinner_frame(tick), accent())),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
}

/// A focusable control activated with Enter
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub busy_label: &'a str,
    pub enabled: bool,
    pub focused: bool,
    pub busy: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            busy_label: label,
            enabled: true,
            focused: true,
            busy: false,
        }
    }

    pub fn busy_label(mut self, label: &'a str) -> Self {
        self.busy_label = label;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect, tick: u64) {
        let text = if self.busy {
            format!("{} {}", spinner_frame(tick), self.busy_label)
        } else {
            self.label.to_string()
        };

        let (style, border) = if !self.enabled || self.busy {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.focused {
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (Style::default().fg(Color::White), Style::default().fg(Color::Gray))
        };

        let widget = Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(widget, area);
    }
}

/// Six step markers: completed, active, pending
pub fn render_progress(f: &mut Frame, area: Rect, current_step: u8) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for (step, column) in StepId::all().iter().zip(columns.iter()) {
        let number = step.number();
        let (marker, style) = if number < current_step {
            ("✓".to_string(), Style::default().fg(Color::Green))
        } else if number == current_step {
            (number.to_string(), accent())
        } else {
            (number.to_string(), Style::default().fg(Color::DarkGray))
        };

        let text = vec![
            Line::from(Span::styled(format!("({})", marker), style)),
            Line::from(Span::styled(step.label(), style)),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), *column);
    }
}

/// Key hint bar, e.g. `Enter Upload  Tab Switch  Q Quit`
pub fn key_hints_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(key.to_string(), accent()));
        let separator = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::raw(format!(" {}{}", action, separator)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len() as u64));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_key_hints_line() {
        let line = key_hints_line(&[("Enter", "Upload"), ("Q", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter Upload  Q Quit");
    }

    #[test]
    fn test_progress_marks_completed_steps() {
        let mut terminal = Terminal::new(TestBackend::new(96, 2)).unwrap();
        terminal
            .draw(|f| render_progress(f, f.area(), 3))
            .unwrap();
        let text = buffer_text(&terminal);
        assert_eq!(text.matches('✓').count(), 2);
        assert!(text.contains("(3)"));
        assert!(text.contains("Job Match"));
    }

    #[test]
    fn test_error_box_only_with_message() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|f| render_error(f, f.area(), None))
            .unwrap();
        assert!(buffer_text(&terminal).trim().is_empty());

        terminal
            .draw(|f| render_error(f, f.area(), Some("Boom")))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Boom"));
    }
}
