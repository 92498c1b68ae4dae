//! Fixed instruction prompt and strict parsing of the model's verdict.

use encourage_core::{ClassificationResult, Error, Method, Result};
use serde::Deserialize;

/// System instruction sent with every classification request.
pub const SYSTEM_PROMPT: &str = "\
당신은 주어진 글이 응원의 의미를 담고 있는지 판별하는 전문가입니다.

입력된 글을 읽고:
- 응원, 격려, 지지, 위로의 뜻이 담겨 있으면 true
- 그렇지 않으면 false 로 판단하세요.

응원글의 특징:
- 긍정적인 감정 전달 (화이팅, 파이팅, 힘내세요 등)
- 격려와 지지 (잘할 수 있어, 괜찮아, 수고했어 등)
- 위로와 공감 (힘들겠지만, 이해해, 함께할게 등)
- 미래에 대한 희망 (잘 될 거야, 해낼 수 있어 등)
욕설이나 비하 표현이 섞여 있으면 응원글이 아닙니다.

다른 설명 없이 아래 JSON 한 개만 출력하세요:
{\"isEncouragement\": true 또는 false, \"reason\": \"판별 이유 (한국어)\"}";

pub const TEMPERATURE: f64 = 0.3;
pub const MAX_TOKENS: usize = 200;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelVerdict {
    #[serde(rename = "isEncouragement")]
    is_encouragement: bool,
    reason: String,
}

/// Parse the model's reply. Only a bare JSON object of the expected shape is
/// accepted (surrounding whitespace aside); anything else is an error.
pub fn parse_verdict(content: &str) -> Result<ClassificationResult> {
    let verdict: ModelVerdict = serde_json::from_str(content.trim())
        .map_err(|e| Error::Parse(format!("{}: {:?}", e, truncate(content, 120))))?;

    let reason = verdict.reason.trim();
    if reason.is_empty() {
        return Err(Error::Parse("verdict has an empty reason".into()));
    }

    Ok(ClassificationResult::new(
        verdict.is_encouragement,
        reason,
        Method::Model,
    ))
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_verdict() {
        let result =
            parse_verdict(r#" {"isEncouragement": true, "reason": "격려의 표현이 있음"} "#).unwrap();
        assert!(result.is_encouragement());
        assert_eq!(result.reason(), "격려의 표현이 있음");
        assert_eq!(result.method(), Method::Model);
    }

    #[test]
    fn test_reject_prose_and_fences() {
        assert!(parse_verdict("네, 응원글입니다.").is_err());
        assert!(parse_verdict(
            "```json\n{\"isEncouragement\": true, \"reason\": \"응원\"}\n```"
        )
        .is_err());
    }

    #[test]
    fn test_reject_wrong_shape() {
        assert!(parse_verdict(r#"{"isEncouragement": "yes", "reason": "응원"}"#).is_err());
        assert!(parse_verdict(r#"{"reason": "응원"}"#).is_err());
        assert!(parse_verdict(r#""true""#).is_err());
        assert!(parse_verdict(
            r#"{"isEncouragement": true, "reason": "응원", "confidence": 0.9}"#
        )
        .is_err());
    }

    #[test]
    fn test_reject_empty_reason() {
        let err = parse_verdict(r#"{"isEncouragement": false, "reason": "  "}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_prompt_states_output_contract() {
        assert!(SYSTEM_PROMPT.contains("\"isEncouragement\""));
        assert!(SYSTEM_PROMPT.contains("\"reason\""));
    }
}
