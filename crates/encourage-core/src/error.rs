//! Error types for the encouragement classifier.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Remote service returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Unparsable model output: {0}")]
    Parse(String),

    #[error("Timed out after {0}ms")]
    Timeout(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
