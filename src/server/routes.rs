//! Route definitions and handlers
//!
//! Two JSON endpoints plus a health probe. All failures map to
//! `{ "error": "..." }` bodies; missing provider credentials are a fixed
//! 500 distinct from per-request upstream failures.

use crate::config::ReadsmithConfig;
use crate::server::models::{
    AnalyzeRequest, ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse,
};
use crate::service::{ReadmeService, ServiceError};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::error;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReadmeService>,
    /// Provider credentials were present at startup
    pub credentials_ok: bool,
    /// Maximum accepted manifest size in bytes
    pub max_upload_size: usize,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Creates the application router.
pub fn create_router(state: AppState, config: &ReadsmithConfig) -> Router {
    // give the upstream call room to finish before the HTTP timeout fires
    let http_timeout = Duration::from_secs(config.request_timeout_secs + 10);

    Router::new()
        .route("/analyze", post(analyze))
        .route("/generate", post(generate))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(http_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `POST /analyze` — analyze an uploaded manifest file.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<crate::analysis::AnalysisReport>, ApiError> {
    require_credentials(&state)?;

    if request.file_content.trim().is_empty() || request.file_name.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "File content and name are required",
        ));
    }

    if request.file_content.len() > state.max_upload_size {
        return Err(error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Uploaded file is too large",
        ));
    }

    let report = state
        .service
        .analyze(&request.file_content, &request.file_name)
        .await
        .map_err(service_error)?;

    Ok(Json(report))
}

/// `POST /generate` — generate a README from structured input.
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    require_credentials(&state)?;

    let input = request.into_readme_input();

    let result = state
        .service
        .generate(&input)
        .await
        .map_err(service_error)?;

    Ok(Json(GenerateResponse {
        markdown: result.markdown,
    }))
}

/// `GET /health` — liveness probe with backend identity.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: if state.credentials_ok {
            "ok".to_string()
        } else {
            "missing-credentials".to_string()
        },
        backend: state.service.backend_name().to_string(),
        model: state.service.backend_model_info(),
    })
}

fn require_credentials(state: &AppState) -> Result<(), ApiError> {
    if state.credentials_ok {
        Ok(())
    } else {
        Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "API key not configured",
        ))
    }
}

fn service_error(err: ServiceError) -> ApiError {
    error!(error = %err, "Request failed");
    match &err {
        ServiceError::Validation(_) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        ServiceError::Parse(_) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        ServiceError::Backend(_) => error_response(StatusCode::BAD_GATEWAY, err.to_string()),
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}
