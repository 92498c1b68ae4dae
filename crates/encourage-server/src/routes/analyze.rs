//! Classification routes — /api/analyze.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;
use encourage_remote::RemoteStatus;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/analyze",
            post(analyze)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/analyze/status", get(get_status))
}

#[derive(Deserialize)]
struct AnalyzeBody {
    #[serde(default)]
    text: Option<String>,
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Response {
    let text = match body {
        Ok(Json(body)) => body.text.unwrap_or_default(),
        Err(rejection) => {
            debug!("Rejected analyze body: {}", rejection);
            String::new()
        }
    };

    match state.classifier.classify_text(&text).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        // Validation is the only way classification can fail.
        Err(e) => {
            debug!("Rejected analyze request: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "텍스트가 필요합니다." })),
            )
                .into_response()
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}

async fn get_status(State(state): State<Arc<AppState>>) -> Json<RemoteStatus> {
    Json(state.remote_status.clone())
}
