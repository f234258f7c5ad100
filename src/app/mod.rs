//! TUI application module
//!
//! Contains the terminal user interface, the six wizard screens,
//! step sequencing and the controller that ties them together.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;
pub mod wizard;

pub use app::App;
pub use screens::{ScreenContext, Step, StepEvent};
pub use state::{NavigationAction, Sequencer, StepId, Transition};
pub use tui::{Tui, TuiEvent};
pub use wizard::Wizard;
