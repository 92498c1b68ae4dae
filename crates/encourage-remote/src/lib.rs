//! Remote encouragement classifier backed by an external LLM (OpenAI/Anthropic/Groq).
//!
//! Sends the text with a fixed instruction prompt and expects a strict JSON
//! verdict back. Every failure is reported as an error for the caller to
//! recover from; nothing here interprets the text itself.

pub mod adapter;
pub mod config;
pub mod prompt;
pub mod providers;
pub mod types;

pub use adapter::RemoteClassifier;
pub use config::{LLMConfig, ResolvedProvider};
pub use types::*;
