//! Encourage Core — classification contract, error types, configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{DataPaths, ServiceConfig};
pub use error::{Error, Result};
pub use types::{ClassificationRequest, ClassificationResult, Method};
