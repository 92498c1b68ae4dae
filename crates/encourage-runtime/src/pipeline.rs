//! Remote-then-heuristic classification pipeline.

use std::sync::Arc;
use std::time::Duration;

use encourage_core::{ClassificationRequest, ClassificationResult, Error, Result};
use encourage_heuristic::HeuristicClassifier;
use encourage_remote::{LLMConfig, RemoteClassifier};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::backend::ClassifierBackend;

/// Tries the primary backend once, bounded by `timeout`. Any error or
/// timeout hands the same request to the heuristic classifier.
#[derive(Clone)]
pub struct FallbackClassifier {
    primary: Option<Arc<dyn ClassifierBackend>>,
    fallback: HeuristicClassifier,
    timeout: Duration,
}

impl FallbackClassifier {
    pub fn new(primary: Option<Arc<dyn ClassifierBackend>>, timeout: Duration) -> Self {
        Self {
            primary,
            fallback: HeuristicClassifier::new(),
            timeout,
        }
    }

    /// Pipeline with no remote backend; every call is heuristic.
    pub fn heuristic_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    /// Build from LLM config. Without a configured provider the pipeline is
    /// heuristic-only.
    pub fn from_config(config: &LLMConfig, timeout: Duration) -> Self {
        let client = reqwest::Client::new();
        let primary = RemoteClassifier::from_config(config, client).map(|remote| {
            info!(
                "Remote classifier: {} ({}), timeout {}ms",
                remote.target().provider,
                remote.target().model,
                timeout.as_millis()
            );
            Arc::new(remote) as Arc<dyn ClassifierBackend>
        });

        if primary.is_none() {
            info!("No LLM provider configured. Using heuristic classifier only.");
        }

        Self::new(primary, timeout)
    }

    pub fn has_remote(&self) -> bool {
        self.primary.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate raw text, then classify it. Empty text is the only error.
    pub async fn classify_text(&self, text: &str) -> Result<ClassificationResult> {
        let request = ClassificationRequest::new(text)?;
        Ok(self.classify(&request).await)
    }

    /// Classify a validated request. Always produces a result.
    pub async fn classify(&self, request: &ClassificationRequest) -> ClassificationResult {
        let span = info_span!("classify", request_id = %Uuid::new_v4());
        async {
            if let Some(primary) = &self.primary {
                match self.try_primary(primary.as_ref(), request).await {
                    Ok(result) => return result,
                    Err(e) => {
                        warn!("{} classifier failed, falling back: {}", primary.name(), e);
                    }
                }
            }
            self.fallback.classify(request.text())
        }
        .instrument(span)
        .await
    }

    /// One bounded call to the primary backend. Running out of time is
    /// reported as `Error::Timeout`.
    async fn try_primary(
        &self,
        primary: &dyn ClassifierBackend,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult> {
        match tokio::time::timeout(self.timeout, primary.classify(request)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}
