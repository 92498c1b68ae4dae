//! The classification contract shared by every classifier backend.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which backend produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// The remote language model answered with a well-formed verdict.
    Model,
    /// The local keyword/pattern classifier decided.
    Heuristic,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Validated text to classify. Cannot be empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    text: String,
}

impl ClassificationRequest {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("text must not be empty".into()));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Outcome of a single classification call.
///
/// Fields are private so a result cannot be altered once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    is_encouragement: bool,
    reason: String,
    method: Method,
}

impl ClassificationResult {
    /// Build a result. An empty reason is replaced by a generic one so the
    /// record is always fully populated.
    pub fn new(is_encouragement: bool, reason: impl Into<String>, method: Method) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            if is_encouragement {
                "응원의 의미가 담긴 글로 판단됨".to_string()
            } else {
                "응원의 의미가 담기지 않은 글로 판단됨".to_string()
            }
        } else {
            reason
        };
        Self {
            is_encouragement,
            reason,
            method,
        }
    }

    pub fn is_encouragement(&self) -> bool {
        self.is_encouragement
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_empty() {
        assert!(ClassificationRequest::new("").is_err());
        assert!(ClassificationRequest::new("  \n\t").is_err());
        assert!(matches!(
            ClassificationRequest::new(""),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_request_keeps_text_verbatim() {
        let req = ClassificationRequest::new(" 화이팅 ").unwrap();
        assert_eq!(req.text(), " 화이팅 ");
    }

    #[test]
    fn test_result_wire_shape() {
        let result = ClassificationResult::new(true, "응원 키워드 발견", Method::Heuristic);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isEncouragement"], true);
        assert_eq!(json["reason"], "응원 키워드 발견");
        assert_eq!(json["method"], "heuristic");
    }

    #[test]
    fn test_result_reason_never_empty() {
        let result = ClassificationResult::new(false, "   ", Method::Model);
        assert!(!result.reason().trim().is_empty());
        assert_eq!(result.method(), Method::Model);
    }
}
