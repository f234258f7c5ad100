//! Wizard step screens
//!
//! Every screen owns exactly one remote action and its loading/error state,
//! and reports back to the controller through [`StepEvent`].

pub mod apply;
pub mod approve;
pub mod job;
pub mod role;
pub mod suggestions;
pub mod upload;
pub mod widgets;

pub use apply::ApplyScreen;
pub use approve::ApproveScreen;
pub use job::JobScreen;
pub use role::RoleScreen;
pub use suggestions::SuggestionsScreen;
pub use upload::UploadScreen;

use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::app::state::StepId;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

/// What a screen asks of the controller after handling input or a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// Nothing to do
    None,
    /// Perform a remote request on the screen's behalf
    Request(ApiRequest),
    /// The step is done; the sequencer decides where to go
    Complete,
}

/// Status of a screen's single action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StepOutcome<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> StepOutcome<T> {
    /// Enter the loading state; clears any previous error
    pub fn start(&mut self) {
        *self = StepOutcome::Loading;
    }

    pub fn succeed(&mut self, value: T) {
        *self = StepOutcome::Success(value);
    }

    pub fn fail(&mut self, message: &str) {
        *self = StepOutcome::Failed(message.to_string());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StepOutcome::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StepOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            StepOutcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// Behaviour shared by all six screens
pub trait Step {
    /// Which step this screen implements
    fn id(&self) -> StepId;

    /// Request to fire as soon as the screen becomes visible
    fn on_mount(&mut self) -> StepEvent {
        StepEvent::None
    }

    /// Handle a key press routed to this screen
    fn handle_key(&mut self, key: KeyEvent) -> StepEvent;

    /// Handle pasted text (a file dropped onto the terminal arrives this way)
    fn handle_paste(&mut self, _text: &str) -> StepEvent {
        StepEvent::None
    }

    /// Completion of the request this screen asked for
    fn on_response(&mut self, result: Result<ApiResponse, ApiError>) -> StepEvent;

    /// Render into the content area
    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64);

    /// True while the screen's action is in flight
    fn is_busy(&self) -> bool;

    /// True when the primary control would react to Enter right now
    fn action_enabled(&self) -> bool;

    /// Inline error currently shown, if any
    fn error_message(&self) -> Option<&str>;

    /// True while a text field owns the keyboard (plain `q` must not quit)
    fn captures_text(&self) -> bool {
        false
    }

    /// Key hints for the help bar
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;
}

/// Inputs a screen may need when it is built
#[derive(Debug, Clone, Default)]
pub struct ScreenContext {
    /// Resume path given on the command line
    pub preselected_resume: Option<PathBuf>,
}

/// Build a fresh screen for a step
pub fn build(step: StepId, context: &ScreenContext) -> Box<dyn Step> {
    match step {
        StepId::Upload => Box::new(UploadScreen::new(context.preselected_resume.as_deref())),
        StepId::SelectRole => Box::new(RoleScreen::new()),
        StepId::JobMatch => Box::new(JobScreen::new()),
        StepId::Suggestions => Box::new(SuggestionsScreen::new()),
        StepId::Approve => Box::new(ApproveScreen::new()),
        StepId::Apply => Box::new(ApplyScreen::new()),
    }
}
