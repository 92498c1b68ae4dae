//! Classifier backend trait and its implementations.
//!
//! - `RemoteClassifier`: external LLM, may fail
//! - `HeuristicClassifier`: local keyword rules, never fails

use async_trait::async_trait;
use encourage_core::{ClassificationRequest, ClassificationResult, Result};
use encourage_heuristic::HeuristicClassifier;
use encourage_remote::RemoteClassifier;

/// Anything that can turn a request into a classification.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult>;
}

#[async_trait]
impl ClassifierBackend for HeuristicClassifier {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult> {
        Ok(HeuristicClassifier::classify(self, request.text()))
    }
}

#[async_trait]
impl ClassifierBackend for RemoteClassifier {
    fn name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult> {
        RemoteClassifier::classify(self, request).await
    }
}
