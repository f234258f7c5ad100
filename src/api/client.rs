use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiError;
use super::types::{ApiRequest, ApiResponse, Operation, SelectRoleBody, SwipeBody};
use crate::models::{JobListing, ResumeFile, ResumeSuggestions, Role, SwipeAction};

/// HTTP client for the matching service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url`.
    ///
    /// No timeouts are configured beyond reqwest's defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    /// Perform one screen request
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let operation = request.operation();
        debug!(%operation, "sending request");

        let result = match request {
            ApiRequest::UploadResume(file) => {
                self.upload_resume(&file).await.map(|_| ApiResponse::Ack)
            }
            ApiRequest::SelectRole(role) => self.select_role(role).await.map(|_| ApiResponse::Ack),
            ApiRequest::FetchJob => self.fetch_job().await.map(ApiResponse::Job),
            ApiRequest::Swipe(action) => self.swipe(action).await.map(|_| ApiResponse::Ack),
            ApiRequest::FetchSuggestions => {
                self.fetch_suggestions().await.map(ApiResponse::Suggestions)
            }
            ApiRequest::ApproveResume => self.approve_resume().await.map(|_| ApiResponse::Ack),
            ApiRequest::Apply => self.apply().await.map(|_| ApiResponse::Ack),
        };

        match &result {
            Ok(_) => debug!(%operation, "request succeeded"),
            Err(err) => warn!(%operation, error = %err, "request failed"),
        }
        result
    }

    /// POST /upload-resume as multipart field `file`
    pub async fn upload_resume(&self, file: &ResumeFile) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ApiError::ResumeRead {
                path: file.path.clone(),
                source,
            })?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.mime_type())?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(Operation::UploadResume))
            .multipart(form)
            .send()
            .await?;
        Self::acknowledge(Operation::UploadResume, response).await
    }

    /// POST /select-role with `{ "role": ... }`
    pub async fn select_role(&self, role: Role) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(Operation::SelectRole))
            .json(&SelectRoleBody { role })
            .send()
            .await?;
        Self::acknowledge(Operation::SelectRole, response).await
    }

    /// GET /job
    pub async fn fetch_job(&self) -> Result<JobListing, ApiError> {
        let response = self.client.get(self.url(Operation::FetchJob)).send().await?;
        Self::decode(Operation::FetchJob, response).await
    }

    /// POST /swipe with `{ "action": "like" | "reject" }`
    pub async fn swipe(&self, action: SwipeAction) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(Operation::Swipe))
            .json(&SwipeBody { action })
            .send()
            .await?;
        Self::acknowledge(Operation::Swipe, response).await
    }

    /// GET /resume-suggestions
    pub async fn fetch_suggestions(&self) -> Result<ResumeSuggestions, ApiError> {
        let response = self
            .client
            .get(self.url(Operation::FetchSuggestions))
            .send()
            .await?;
        Self::decode(Operation::FetchSuggestions, response).await
    }

    /// POST /approve-resume
    pub async fn approve_resume(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(Operation::ApproveResume))
            .send()
            .await?;
        Self::acknowledge(Operation::ApproveResume, response).await
    }

    /// POST /apply
    pub async fn apply(&self) -> Result<(), ApiError> {
        let response = self.client.post(self.url(Operation::Apply)).send().await?;
        Self::acknowledge(Operation::Apply, response).await
    }

    async fn decode<T: DeserializeOwned>(
        operation: Operation,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }

    // Body must be JSON but is otherwise ignored. The service reports some
    // precondition failures as 2xx with an `error` field; those only get logged.
    async fn acknowledge(operation: Operation, response: Response) -> Result<(), ApiError> {
        let body: serde_json::Value = Self::decode(operation, response).await?;
        if let Some(reported) = body.get("error").and_then(|e| e.as_str()) {
            warn!(%operation, reported, "service reported an error with a success status");
        }
        Ok(())
    }
}
