//! Request and response shapes of the matching service.

use crate::models::{JobListing, ResumeFile, ResumeSuggestions, Role, SwipeAction};
use serde::Serialize;
use std::fmt;

/// The seven remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    UploadResume,
    SelectRole,
    FetchJob,
    Swipe,
    FetchSuggestions,
    ApproveResume,
    Apply,
}

impl Operation {
    /// Path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Operation::UploadResume => "/upload-resume",
            Operation::SelectRole => "/select-role",
            Operation::FetchJob => "/job",
            Operation::Swipe => "/swipe",
            Operation::FetchSuggestions => "/resume-suggestions",
            Operation::ApproveResume => "/approve-resume",
            Operation::Apply => "/apply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::UploadResume => "upload resume",
            Operation::SelectRole => "select role",
            Operation::FetchJob => "fetch job",
            Operation::Swipe => "swipe job",
            Operation::FetchSuggestions => "fetch suggestions",
            Operation::ApproveResume => "approve resume",
            Operation::Apply => "apply to job",
        };
        f.write_str(name)
    }
}

/// A request a screen asks the controller to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    UploadResume(ResumeFile),
    SelectRole(Role),
    FetchJob,
    Swipe(SwipeAction),
    FetchSuggestions,
    ApproveResume,
    Apply,
}

impl ApiRequest {
    pub fn operation(&self) -> Operation {
        match self {
            ApiRequest::UploadResume(_) => Operation::UploadResume,
            ApiRequest::SelectRole(_) => Operation::SelectRole,
            ApiRequest::FetchJob => Operation::FetchJob,
            ApiRequest::Swipe(_) => Operation::Swipe,
            ApiRequest::FetchSuggestions => Operation::FetchSuggestions,
            ApiRequest::ApproveResume => Operation::ApproveResume,
            ApiRequest::Apply => Operation::Apply,
        }
    }
}

/// Successful result of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Any JSON body; contents are not consumed
    Ack,
    Job(JobListing),
    Suggestions(ResumeSuggestions),
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectRoleBody {
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub(crate) struct SwipeBody {
    pub action: SwipeAction,
}
