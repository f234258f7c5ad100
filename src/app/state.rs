//! Wizard state management
//!
//! Owns the current step number, its two transitions, and keyboard
//! event processing shared by every screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    /// Pick and upload a resume file
    Upload,
    /// Choose the target role
    SelectRole,
    /// Like or skip a recommended job
    JobMatch,
    /// Review AI edits to the resume
    Suggestions,
    /// Confirm the optimized resume
    Approve,
    /// Send the application
    Apply,
}

impl StepId {
    /// First and last step numbers
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 6;

    /// All steps in display order
    pub fn all() -> &'static [StepId] {
        &[
            StepId::Upload,
            StepId::SelectRole,
            StepId::JobMatch,
            StepId::Suggestions,
            StepId::Approve,
            StepId::Apply,
        ]
    }

    /// Map a step number to a step; out of range numbers map to nothing
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(StepId::Upload),
            2 => Some(StepId::SelectRole),
            3 => Some(StepId::JobMatch),
            4 => Some(StepId::Suggestions),
            5 => Some(StepId::Approve),
            6 => Some(StepId::Apply),
            _ => None,
        }
    }

    /// One-based position of the step
    pub fn number(&self) -> u8 {
        match self {
            StepId::Upload => 1,
            StepId::SelectRole => 2,
            StepId::JobMatch => 3,
            StepId::Suggestions => 4,
            StepId::Approve => 5,
            StepId::Apply => 6,
        }
    }

    /// Label shown in the progress indicator
    pub fn label(&self) -> &'static str {
        match self {
            StepId::Upload => "Upload Resume",
            StepId::SelectRole => "Select Role",
            StepId::JobMatch => "Job Match",
            StepId::Suggestions => "AI Suggestions",
            StepId::Approve => "Approve",
            StepId::Apply => "Apply",
        }
    }
}

/// What a step's completion signal does to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move to the next step
    Advance,
    /// Go back to the first step
    Reset,
}

/// Owner of the current step number
#[derive(Debug)]
pub struct Sequencer {
    current_step: u8,
}

impl Sequencer {
    /// Create a sequencer positioned on the first step
    pub fn new() -> Self {
        Self {
            current_step: StepId::FIRST,
        }
    }

    /// Current step number
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// Step to render for the current number
    pub fn active_step(&self) -> Option<StepId> {
        StepId::from_number(self.current_step)
    }

    /// Transition the active step's completion maps to
    pub fn completion(&self) -> Transition {
        if self.current_step >= StepId::LAST {
            Transition::Reset
        } else {
            Transition::Advance
        }
    }

    /// Move to the next step. Refused on the last step, which must reset.
    pub fn advance(&mut self) -> bool {
        if self.current_step >= StepId::LAST {
            warn!(step = self.current_step, "advance requested on the last step; ignoring");
            return false;
        }
        self.current_step += 1;
        info!(step = self.current_step, "advanced to next step");
        true
    }

    /// Return to the first step
    pub fn reset(&mut self) {
        self.current_step = StepId::FIRST;
        info!("wizard reset to first step");
    }

    /// Apply a transition
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Advance => {
                self.advance();
            }
            Transition::Reset => self.reset(),
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm / press the focused control (Enter, Space)
    Select,
    /// Close a dropdown or leave a text field (Esc)
    Back,
    /// Next control (Tab)
    Next,
    /// Previous control (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert keyboard event to navigation action
pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            NavigationAction::Quit
        }

        // Navigation keys
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
        KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

        // Selection and confirmation
        KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

        KeyCode::Esc => NavigationAction::Back,

        // Tab navigation
        KeyCode::BackTab => NavigationAction::Previous,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                NavigationAction::Previous
            } else {
                NavigationAction::Next
            }
        }

        _ => NavigationAction::None,
    }
}

/// Ctrl+C quits even while a text field has focus
pub fn is_force_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequencer_starts_on_first_step() {
        let sequencer = Sequencer::new();
        assert_eq!(sequencer.current_step(), 1);
        assert_eq!(sequencer.active_step(), Some(StepId::Upload));
        assert_eq!(sequencer.completion(), Transition::Advance);
    }

    #[test]
    fn test_advance_through_all_steps() {
        let mut sequencer = Sequencer::new();
        for expected in 2..=6 {
            assert!(sequencer.advance());
            assert_eq!(sequencer.current_step(), expected);
            assert_eq!(sequencer.active_step().map(|s| s.number()), Some(expected));
        }
        assert_eq!(sequencer.active_step(), Some(StepId::Apply));
        assert_eq!(sequencer.completion(), Transition::Reset);
    }

    #[test]
    fn test_advance_refused_on_last_step() {
        let mut sequencer = Sequencer::new();
        for _ in 0..5 {
            sequencer.advance();
        }
        assert!(!sequencer.advance());
        assert_eq!(sequencer.current_step(), 6);
    }

    #[test]
    fn test_reset_and_apply() {
        let mut sequencer = Sequencer::new();
        sequencer.apply(Transition::Advance);
        sequencer.apply(Transition::Advance);
        assert_eq!(sequencer.current_step(), 3);
        sequencer.apply(Transition::Reset);
        assert_eq!(sequencer.current_step(), 1);
    }

    #[test]
    fn test_out_of_range_numbers_render_nothing() {
        assert_eq!(StepId::from_number(0), None);
        assert_eq!(StepId::from_number(7), None);
        for step in StepId::all() {
            assert_eq!(StepId::from_number(step.number()), Some(*step));
        }
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            key_to_navigation(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }

    #[test]
    fn test_force_quit() {
        assert!(is_force_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_force_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
