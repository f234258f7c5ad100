//! Matching service client
//!
//! One HTTP operation per wizard step, all relative to a configurable base
//! URL. Any non-2xx status is a failure; bodies beyond the consumed fields
//! are ignored.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ApiRequest, ApiResponse, Operation};
