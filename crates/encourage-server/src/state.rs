//! Shared application state.

use encourage_core::ServiceConfig;
use encourage_remote::{LLMConfig, RemoteStatus};
use encourage_runtime::FallbackClassifier;

/// Shared application state accessible from all route handlers.
///
/// Read-only after startup; concurrent requests share nothing mutable.
pub struct AppState {
    pub classifier: FallbackClassifier,
    pub remote_status: RemoteStatus,
}

impl AppState {
    pub fn new(config: &ServiceConfig, llm_config: &LLMConfig) -> Self {
        let timeout = config.remote_timeout();
        let classifier = FallbackClassifier::from_config(llm_config, timeout);
        let resolved = llm_config.resolve_provider();

        let remote_status = RemoteStatus {
            remote_available: resolved.is_some(),
            provider: resolved.as_ref().map(|r| r.provider.to_string()),
            model: resolved.map(|r| r.model),
            timeout_ms: config.remote_timeout_ms,
        };

        Self {
            classifier,
            remote_status,
        }
    }
}
