//! Single-shot completion calls against external LLM providers.
//!
//! OpenAI and Groq share the chat-completions format. Anthropic uses the
//! Messages API with the system prompt as a top-level field.

use encourage_core::{Error, Result};
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::ResolvedProvider;
use crate::types::{ChatMessage, LLMProvider};

/// Request one completion and return the assistant's text content.
pub async fn complete(
    client: &Client,
    target: &ResolvedProvider,
    messages: &[ChatMessage],
    temperature: f64,
    max_tokens: usize,
) -> Result<String> {
    match target.provider {
        LLMProvider::OpenAI | LLMProvider::Groq => {
            complete_openai_compat(client, target, messages, temperature, max_tokens).await
        }
        LLMProvider::Anthropic => {
            complete_anthropic(client, target, messages, temperature, max_tokens).await
        }
    }
}

async fn complete_openai_compat(
    client: &Client,
    target: &ResolvedProvider,
    messages: &[ChatMessage],
    temperature: f64,
    max_tokens: usize,
) -> Result<String> {
    let url = format!("{}/chat/completions", target.api_base);
    let msgs: Vec<serde_json::Value> = messages
        .iter()
        .map(|m| json!({"role": m.role, "content": m.content}))
        .collect();

    let body = json!({
        "model": target.model,
        "messages": msgs,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });

    debug!("Requesting completion from {} with model {}", url, target.model);

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", target.api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let parsed = read_json(response).await?;
    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Parse("completion has no choices[0].message.content".into()))
}

async fn complete_anthropic(
    client: &Client,
    target: &ResolvedProvider,
    messages: &[ChatMessage],
    temperature: f64,
    max_tokens: usize,
) -> Result<String> {
    let url = format!("{}/messages", target.api_base);
    let system_msg = messages
        .iter()
        .find(|m| m.role == "system")
        .map(|m| m.content.clone());

    let conv_msgs: Vec<serde_json::Value> = messages
        .iter()
        .filter(|m| m.role != "system")
        .map(|m| json!({"role": m.role, "content": m.content}))
        .collect();

    let mut body = json!({
        "model": target.model,
        "messages": conv_msgs,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });
    if let Some(sys) = system_msg {
        body["system"] = json!(sys);
    }

    debug!("Requesting completion from Anthropic with model {}", target.model);

    let response = client
        .post(&url)
        .header("x-api-key", &target.api_key)
        .header("anthropic-version", "2023-06-01")
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let parsed = read_json(response).await?;
    parsed["content"]
        .as_array()
        .and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b["type"] == "text")
                .and_then(|b| b["text"].as_str())
        })
        .map(str::to_string)
        .ok_or_else(|| Error::Parse("message has no text content block".into()))
}

/// Reject non-success statuses, then decode the body as JSON.
async fn read_json(response: reqwest::Response) -> Result<serde_json::Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Remote {
            status: status.as_u16(),
            body,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| Error::Http(format!("Body read error: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| Error::Parse(format!("Response is not JSON: {}", e)))
}
