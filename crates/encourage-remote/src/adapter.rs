//! Remote classifier: one completion call, one strictly parsed verdict.

use encourage_core::{ClassificationRequest, ClassificationResult, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::{LLMConfig, ResolvedProvider};
use crate::prompt::{parse_verdict, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use crate::providers;
use crate::types::ChatMessage;

/// Classifier that asks an external model. Never retries.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    client: Client,
    target: ResolvedProvider,
}

impl RemoteClassifier {
    pub fn new(client: Client, target: ResolvedProvider) -> Self {
        Self { client, target }
    }

    /// Build from config, or `None` when no provider has a key.
    pub fn from_config(config: &LLMConfig, client: Client) -> Option<Self> {
        config
            .resolve_provider()
            .map(|target| Self::new(client, target))
    }

    pub fn target(&self) -> &ResolvedProvider {
        &self.target
    }

    pub async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult> {
        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(request.text()),
        ];

        let content = providers::complete(
            &self.client,
            &self.target,
            &messages,
            TEMPERATURE,
            MAX_TOKENS,
        )
        .await?;

        debug!("{} replied with {} bytes", self.target.provider, content.len());
        parse_verdict(&content)
    }
}
