//! Data models module
//!
//! Transient payloads exchanged with the matching service. None of these
//! outlive the screen that fetched them.

pub mod job;
pub mod resume;

// Re-export commonly used types
pub use job::{JobListing, Role, SwipeAction};
pub use resume::{ResumeFile, ResumeSuggestions, SelectionError, ACCEPTED_EXTENSIONS};

use serde::{Deserialize, Deserializer};

// Service omits optional fields or sends them as null; both mean empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
