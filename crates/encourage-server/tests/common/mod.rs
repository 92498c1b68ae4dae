//! Shared helpers for server integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use encourage_core::{DataPaths, ServiceConfig};
use encourage_remote::LLMConfig;
use encourage_server::{build_router, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

/// App router plus the temp dir that must outlive it.
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    _dir: TempDir,
}

pub fn test_app(llm_config: &LLMConfig, remote_timeout_ms: u64) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig {
        port: 0,
        data_paths: DataPaths::new(dir.path()).unwrap(),
        remote_timeout_ms,
    };
    let state = Arc::new(AppState::new(&config, llm_config));
    TestApp {
        router: build_router(state.clone()),
        state,
        _dir: dir,
    }
}

/// App with no LLM provider configured.
pub fn heuristic_app() -> TestApp {
    test_app(&LLMConfig::default(), 1_000)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Serve `router` on an ephemeral local port and return its address.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
