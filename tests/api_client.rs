//! Integration tests for the matching service client

use jobmatch::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Operation};
use jobmatch::models::{ResumeFile, Role, SwipeAction};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resume(dir: &TempDir) -> ResumeFile {
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, b"%PDF-1.4 test resume").unwrap();
    ResumeFile::select(path.to_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"resume.pdf\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Resume uploaded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let client = ApiClient::new(server.uri());
    let response = client
        .execute(ApiRequest::UploadResume(resume(&dir)))
        .await
        .unwrap();
    assert_eq!(response, ApiResponse::Ack);
}

#[tokio::test]
async fn test_select_role_and_swipe_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/select-role"))
        .and(body_json(json!({"role": "AI Engineer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/swipe"))
        .and(body_json(json!({"action": "reject"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client.select_role(Role::AiEngineer).await.unwrap();
    client.swipe(SwipeAction::Reject).await.unwrap();
}

#[tokio::test]
async fn test_fetch_job_ignores_extra_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/job"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Backend Engineer",
            "company": "Acme",
            "salary": "unknown"
        })))
        .mount(&server)
        .await;

    let job = ApiClient::new(server.uri()).fetch_job().await.unwrap();
    assert_eq!(job.title, "Backend Engineer");
    assert_eq!(job.company, "Acme");
    assert!(job.location.is_none());
    assert!(job.description.is_empty());
}

#[tokio::test]
async fn test_fetch_job_without_listing_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/job"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "No more jobs"})),
        )
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).fetch_job().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Decode {
            operation: Operation::FetchJob,
            ..
        }
    ));
}

#[tokio::test]
async fn test_fetch_suggestions_with_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resume-suggestions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"missing_skills": ["Docker"]})),
        )
        .mount(&server)
        .await;

    let review = ApiClient::new(server.uri())
        .fetch_suggestions()
        .await
        .unwrap();
    assert_eq!(review.missing_skills, vec!["Docker".to_string()]);
    assert!(review.improvements.is_empty());
    assert!(review.suggestions.is_none());
}

#[tokio::test]
async fn test_non_success_status_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apply"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).apply().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "apply to job returned status 500");
}

#[tokio::test]
async fn test_success_with_non_json_body_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/approve-resume"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri())
        .approve_resume()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_error_field_in_success_body_is_not_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apply"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "No resume uploaded"})),
        )
        .mount(&server)
        .await;

    assert!(ApiClient::new(server.uri()).apply().await.is_ok());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/approve-resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri()));
    assert_eq!(client.base_url(), server.uri());
    client.approve_resume().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 1 (tcpmux) is closed on any sane test host
    let err = ApiClient::new("http://127.0.0.1:1")
        .fetch_job()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
}
