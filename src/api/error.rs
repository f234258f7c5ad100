//! Error types for the matching service client.

use super::types::Operation;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single request to the matching service.
///
/// Screens collapse every variant into one fixed message; the variants
/// exist so the log says what actually happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{operation} returned status {status}")]
    Status { operation: Operation, status: u16 },

    /// Connection refused, DNS failure, reset and friends.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body was not the JSON we expected.
    #[error("{operation} returned an unreadable body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The resume could not be read from disk before uploading.
    #[error("failed to read resume {}: {source}", path.display())]
    ResumeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = ApiError::Status {
            operation: Operation::Apply,
            status: 500,
        };
        assert_eq!(err.to_string(), "apply to job returned status 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn resume_read_display() {
        let err = ApiError::ResumeRead {
            path: PathBuf::from("/tmp/cv.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read resume /tmp/cv.pdf: gone");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
