//! Roles, job listings and swipe decisions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target roles offered on the role selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "AI Engineer")]
    AiEngineer,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
}

impl Role {
    /// Get all available roles in display order
    pub fn all() -> &'static [Role] {
        &[
            Role::BackendDeveloper,
            Role::FrontendDeveloper,
            Role::FullStackDeveloper,
            Role::AiEngineer,
            Role::DevOpsEngineer,
        ]
    }

    /// Name sent to the service and shown in the dropdown
    pub fn name(&self) -> &'static str {
        match self {
            Role::BackendDeveloper => "Backend Developer",
            Role::FrontendDeveloper => "Frontend Developer",
            Role::FullStackDeveloper => "Full Stack Developer",
            Role::AiEngineer => "AI Engineer",
            Role::DevOpsEngineer => "DevOps Engineer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single job recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub description: String,
}

/// Like/reject decision on the current recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Reject,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Reject => "reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_to_display_name() {
        let json = serde_json::to_string(&Role::BackendDeveloper).unwrap();
        assert_eq!(json, "\"Backend Developer\"");
        assert_eq!(Role::all().len(), 5);
        assert_eq!(Role::DevOpsEngineer.to_string(), "DevOps Engineer");
    }

    #[test]
    fn test_job_listing_optional_fields() {
        let job: JobListing =
            serde_json::from_str(r#"{"title":"Engineer","company":"Acme","salary":100}"#).unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.company, "Acme");
        assert!(job.location.is_none());
        assert!(job.description.is_empty());

        let job: JobListing = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","location":null,"description":null}"#,
        )
        .unwrap();
        assert!(job.location.is_none());
        assert!(job.description.is_empty());
    }

    #[test]
    fn test_job_listing_requires_title() {
        let result = serde_json::from_str::<JobListing>(r#"{"company":"Acme"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_swipe_action_wire_format() {
        assert_eq!(serde_json::to_string(&SwipeAction::Reject).unwrap(), "\"reject\"");
        assert_eq!(SwipeAction::Like.as_str(), "like");
    }
}
