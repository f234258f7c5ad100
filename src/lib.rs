//! JOBMATCH - AI Job Matcher
//!
//! A terminal wizard that walks a candidate through uploading a resume,
//! picking a role, reviewing a recommended job and AI resume edits, and
//! sending the application. Nothing is sent without explicit approval.

use thiserror::Error;

// Public re-exports
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug, Error)]
pub enum JobMatchError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for JOBMATCH operations
pub type Result<T> = std::result::Result<T, JobMatchError>;

// Common types and constants
pub const APP_NAME: &str = "jobmatch";
pub const CONFIG_FILE: &str = "jobmatch.toml";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_ENV: &str = "JOBMATCH_API_BASE_URL";
