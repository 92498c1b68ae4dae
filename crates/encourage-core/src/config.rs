//! Configuration and data directory management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default bound on a single remote classification call.
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3003;

/// Paths to the service's data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// LLM configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            llm_config_file: root.join("llm-config.json"),
            root,
        })
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Upper bound on the remote model call, in milliseconds.
    pub remote_timeout_ms: u64,
}

impl ServiceConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let remote_timeout_ms = match std::env::var("ENCOURAGE_REMOTE_TIMEOUT_MS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!(
                        "Ignoring invalid ENCOURAGE_REMOTE_TIMEOUT_MS={:?}, using {}ms",
                        raw, DEFAULT_REMOTE_TIMEOUT_MS
                    );
                    DEFAULT_REMOTE_TIMEOUT_MS
                }
            },
            Err(_) => DEFAULT_REMOTE_TIMEOUT_MS,
        };

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            remote_timeout_ms,
        })
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}
