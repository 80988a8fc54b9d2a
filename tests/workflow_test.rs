//! End-to-end workflow tests using the mock generation client
//!
//! These walk the full session flow — upload, merge, submit, failure,
//! retry — the way a front end would drive it.

use readsmith::{
    BackendError, MockLLMClient, MockResponse, ReadmeService, WorkflowSession, WorkflowState,
};
use std::sync::Arc;

fn session_with(responses: Vec<MockResponse>) -> (WorkflowSession, Arc<MockLLMClient>) {
    let client = Arc::new(MockLLMClient::new());
    client.add_responses(responses);
    let service = Arc::new(ReadmeService::with_client(client.clone()));
    (WorkflowSession::new(service), client)
}

const DEMO_MANIFEST: &str = r#"{
  "name": "demo-app",
  "description": "a demo",
  "dependencies": { "react": "^18.2.0" }
}"#;

const DEMO_ANALYSIS: &str = r#"{
  "projectName": "demo-app",
  "description": "a demo",
  "techStack": ["React"],
  "analyzedFeatures": ["component rendering"],
  "dependencies": [{"name": "react", "version": "^18.2.0"}],
  "installation": [],
  "usage": [],
  "license": {"type": "MIT", "author": "Jane", "year": "2024"}
}"#;

/// Uploading a manifest fills the form from the analysis: name and
/// description land in the empty fields, the tech stack picks up React, and
/// the dependency version comes back with the caret stripped.
#[tokio::test]
async fn uploaded_manifest_fills_the_form() {
    let (session, client) = session_with(vec![MockResponse::text(DEMO_ANALYSIS)]);

    let state = session.upload("package.json", DEMO_MANIFEST).await;
    assert_eq!(state, WorkflowState::Input);

    session.with_form(|form| {
        assert_eq!(form.project_info.name, "demo-app");
        assert_eq!(form.project_info.detailed_description, "a demo");
        assert!(form.tech_stack.iter().any(|t| t.name == "React"));

        let react = form
            .dependencies
            .iter()
            .find(|d| d.name == "react")
            .expect("react dependency merged");
        assert_eq!(react.version, "18.2.0");
    });

    // the analysis prompt embedded the manifest verbatim
    let requests = client.recorded_requests();
    assert!(requests[0].prompt.contains(DEMO_MANIFEST));
}

/// Merging the same analysis twice adds nothing: the dedup is
/// case-insensitive on names.
#[tokio::test]
async fn repeated_upload_merge_is_idempotent() {
    let (session, _) = session_with(vec![
        MockResponse::text(DEMO_ANALYSIS),
        MockResponse::text(DEMO_ANALYSIS),
    ]);

    session.upload("package.json", DEMO_MANIFEST).await;
    session.upload("package.json", DEMO_MANIFEST).await;

    session.with_form(|form| {
        assert_eq!(form.tech_stack.len(), 1);
        assert_eq!(form.dependencies.len(), 1);
        assert_eq!(form.suggested_features.len(), 1);
    });
}

/// Submitting with an empty project name never leaves `Input` and issues no
/// network call; the error names the offending fields.
#[tokio::test]
async fn empty_submission_is_rejected_locally() {
    let (session, client) = session_with(vec![]);

    session.update_form(|form| {
        form.project_info.name = String::new();
        form.project_info.detailed_description = String::new();
    });

    let err = session.submit().await.unwrap_err();

    assert!(err.fields.contains(&"projectName"));
    assert!(err.fields.contains(&"description"));
    assert_eq!(session.state(), WorkflowState::Input);
    assert!(client.recorded_requests().is_empty());
}

/// An upstream 500 during generation lands the workflow in `Failed` with a
/// non-empty message, and retry replays the original input unchanged.
#[tokio::test]
async fn failed_generation_retries_with_identical_payload() {
    let (session, client) = session_with(vec![
        MockResponse::text(DEMO_ANALYSIS),
        MockResponse::error(BackendError::ApiError {
            message: "Internal Server Error".to_string(),
            status_code: Some(500),
        }),
        MockResponse::text("# demo-app\n\nSecond time lucky."),
    ]);

    session.upload("package.json", DEMO_MANIFEST).await;

    let state = session.submit().await.unwrap();
    match &state {
        WorkflowState::Failed { message } => {
            assert!(message.contains("500") || !message.is_empty());
        }
        other => panic!("expected failed state, got {other:?}"),
    }

    let state = session.retry().await;
    let result = match state {
        WorkflowState::Success(result) => result,
        other => panic!("expected success after retry, got {other:?}"),
    };

    assert_eq!(result.markdown, "# demo-app\n\nSecond time lucky.");
    assert_eq!(result.download_file_name(), "README-demo-app.md");

    // requests: analysis, failed generation, retried generation — the two
    // generation prompts are byte-identical
    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].prompt, requests[2].prompt);
}

/// Analysis suggestions stay in the suggested pool until promoted, and the
/// accepted list shows up in the generation prompt.
#[tokio::test]
async fn promoted_features_flow_into_generation() {
    let (session, client) = session_with(vec![
        MockResponse::text(DEMO_ANALYSIS),
        MockResponse::text("# demo-app"),
    ]);

    session.upload("package.json", DEMO_MANIFEST).await;

    session.with_form(|form| assert!(form.features.is_empty()));
    session.update_form(|form| {
        assert!(form.promote_feature("component rendering"));
    });

    session.submit().await.unwrap();

    let requests = client.recorded_requests();
    assert!(requests[1].prompt.contains("component rendering"));
}

/// Starting over clears everything the previous session accumulated.
#[tokio::test]
async fn create_new_starts_a_clean_session() {
    let (session, _) = session_with(vec![
        MockResponse::text(DEMO_ANALYSIS),
        MockResponse::text("# demo-app"),
    ]);

    session.upload("package.json", DEMO_MANIFEST).await;
    session.submit().await.unwrap();
    assert!(matches!(session.state(), WorkflowState::Success(_)));

    session.create_new();

    assert_eq!(session.state(), WorkflowState::Input);
    session.with_form(|form| {
        assert!(form.project_info.name.is_empty());
        assert!(form.tech_stack.is_empty());
        assert!(form.dependencies.is_empty());
        assert!(form.suggested_features.is_empty());
    });
}

/// A failed analysis leaves the session usable: the user keeps their form
/// and sees the error inline.
#[tokio::test]
async fn failed_analysis_keeps_form_editable() {
    let (session, _) = session_with(vec![MockResponse::error(BackendError::TimeoutError {
        seconds: 5,
    })]);

    session.update_form(|form| {
        form.project_info.name = "my-project".to_string();
    });

    let state = session.upload("package.json", DEMO_MANIFEST).await;

    assert_eq!(state, WorkflowState::Input);
    assert!(session.last_error().is_some());
    session.with_form(|form| assert_eq!(form.project_info.name, "my-project"));
}
