//! Utility functions module
//!
//! Contains helper functions for units formatting and file naming.

pub mod units;

// Re-export commonly used functions
pub use units::{file_extension, format_file_size};
