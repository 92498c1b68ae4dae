//! LLM configuration loading and provider selection.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::LLMProvider;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Stored LLM configuration (read from llm-config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    /// Overrides for self-hosted gateways or proxies.
    #[serde(default)]
    pub openai_api_base: Option<String>,
    #[serde(default)]
    pub anthropic_api_base: Option<String>,
    #[serde(default)]
    pub groq_api_base: Option<String>,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            preferred_provider: "auto".into(),
            openai_api_key: None,
            anthropic_api_key: None,
            groq_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
            openai_api_base: None,
            anthropic_api_base: None,
            groq_api_base: None,
        }
    }
}

/// A provider ready to call: model, key and endpoint base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: LLMProvider,
    pub model: String,
    pub api_key: String,
    pub api_base: String,
}

impl LLMConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config = Self::from_file(config_path);
        config.fill_missing_keys(|name| std::env::var(name).ok());
        config
    }

    /// Read the config file only. A missing or malformed file yields defaults.
    pub fn from_file(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {}", config_path.display(), e);
                Self::default()
            }),
            Err(_) => {
                debug!("No LLM config at {}", config_path.display());
                Self::default()
            }
        }
    }

    /// Fill unset API keys from `lookup` (normally the process environment).
    pub fn fill_missing_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.openai_api_key.is_none() {
            self.openai_api_key = lookup("OPENAI_API_KEY");
        }
        if self.anthropic_api_key.is_none() {
            self.anthropic_api_key = lookup("ANTHROPIC_API_KEY");
        }
        if self.groq_api_key.is_none() {
            self.groq_api_key = lookup("GROQ_API_KEY");
        }
    }

    /// Resolve which provider, model and endpoint to use.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "openai" => self.resolve(LLMProvider::OpenAI),
                "anthropic" => self.resolve(LLMProvider::Anthropic),
                "groq" => self.resolve(LLMProvider::Groq),
                other => {
                    warn!("Unknown preferred_provider {:?}", other);
                    None
                }
            };
        }

        // Auto mode: OpenAI > Anthropic > Groq
        self.resolve(LLMProvider::OpenAI)
            .or_else(|| self.resolve(LLMProvider::Anthropic))
            .or_else(|| self.resolve(LLMProvider::Groq))
    }

    fn resolve(&self, provider: LLMProvider) -> Option<ResolvedProvider> {
        let (key, model, base, default_base) = match provider {
            LLMProvider::OpenAI => (
                &self.openai_api_key,
                &self.openai_model,
                &self.openai_api_base,
                DEFAULT_OPENAI_API_BASE,
            ),
            LLMProvider::Anthropic => (
                &self.anthropic_api_key,
                &self.anthropic_model,
                &self.anthropic_api_base,
                DEFAULT_ANTHROPIC_API_BASE,
            ),
            LLMProvider::Groq => (
                &self.groq_api_key,
                &self.groq_model,
                &self.groq_api_base,
                DEFAULT_GROQ_API_BASE,
            ),
        };

        let api_key = key.as_ref().filter(|k| !k.trim().is_empty())?;
        let api_base = base
            .as_deref()
            .unwrap_or(default_base)
            .trim_end_matches('/')
            .to_string();

        Some(ResolvedProvider {
            provider,
            model: model.clone(),
            api_key: api_key.clone(),
            api_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LLMConfig::from_file(&dir.path().join("llm-config.json"));
        assert_eq!(config.preferred_provider, "auto");
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert!(config.resolve_provider().is_none());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llm-config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = LLMConfig::from_file(&path);
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_file_values_and_partial_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llm-config.json");
        std::fs::write(
            &path,
            r#"{"preferred_provider": "groq", "groq_api_key": "gsk-test", "groq_api_base": "http://127.0.0.1:9999/v1/"}"#,
        )
        .unwrap();
        let config = LLMConfig::from_file(&path);
        let resolved = config.resolve_provider().unwrap();
        assert_eq!(resolved.provider, LLMProvider::Groq);
        assert_eq!(resolved.model, DEFAULT_GROQ_MODEL);
        assert_eq!(resolved.api_base, "http://127.0.0.1:9999/v1");
    }

    #[test]
    fn test_env_fallback_only_fills_missing_keys() {
        let mut config = LLMConfig {
            openai_api_key: Some("from-file".into()),
            ..LLMConfig::default()
        };
        config.fill_missing_keys(|name| Some(format!("env-{name}")));
        assert_eq!(config.openai_api_key.as_deref(), Some("from-file"));
        assert_eq!(config.groq_api_key.as_deref(), Some("env-GROQ_API_KEY"));
    }

    #[test]
    fn test_auto_prefers_openai() {
        let config = LLMConfig {
            openai_api_key: Some("sk-1".into()),
            anthropic_api_key: Some("sk-ant".into()),
            ..LLMConfig::default()
        };
        let resolved = config.resolve_provider().unwrap();
        assert_eq!(resolved.provider, LLMProvider::OpenAI);
        assert_eq!(resolved.api_base, DEFAULT_OPENAI_API_BASE);
    }

    #[test]
    fn test_auto_skips_blank_keys() {
        let config = LLMConfig {
            openai_api_key: Some("  ".into()),
            anthropic_api_key: Some("sk-ant".into()),
            ..LLMConfig::default()
        };
        assert_eq!(
            config.resolve_provider().map(|r| r.provider),
            Some(LLMProvider::Anthropic)
        );
    }

    #[test]
    fn test_explicit_provider_without_key() {
        let config = LLMConfig {
            preferred_provider: "anthropic".into(),
            openai_api_key: Some("sk-1".into()),
            ..LLMConfig::default()
        };
        assert!(config.resolve_provider().is_none());
    }
}
