//! Rule-based encouragement classifier.
//!
//! Decision order (first match wins):
//! 1. abusive term present → not encouragement (veto)
//! 2. any encouragement term → encouragement
//! 3. others-directed wording + future hope → encouragement
//! 4. future hope with at most one negative term → encouragement
//! 5. more than two negative terms, outnumbering encouragement → not encouragement
//! 6. otherwise → not encouragement

use encourage_core::{ClassificationResult, Method};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::lexicon::{ABSOLUTE_NEGATIVE, CONTEXTUAL_NEGATIVE, ENCOURAGEMENT};

// Patterns run on normalized text (lower-case, no whitespace).
// OTHERS_RE and COLLECTIVE_RE share no term and no term contains another, so
// others-support always needs two separate words.
static OTHERS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"다른사람|다른분|남들|사람들|여러분|친구들|others").unwrap()
});
static COLLECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"모두|모든|전부|다같이|다함께|누구나|everyone").unwrap());
// Wish and change forms only. Bare stems such as 바라 (look at), 기대 (lean on)
// or 잘되 (also in 잘되지않아) are too ambiguous.
static FUTURE_HOPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"바뀔|달라질|나아질|나아지길|좋아질|잘풀릴|잘될거|잘되길|이뤄질|이루어질|이룰수|성공할|해낼거|희망|꿈|바라요|바랄게|길바라|기대해|ihope|dream|succeed|achieve",
    )
    .unwrap()
});

/// Lower-case and remove every whitespace character.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Which decision rule produced a heuristic verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AbusiveVeto,
    EncouragementTerms,
    OthersWellWishing,
    FutureHope,
    NegativeDominance,
    NoSignal,
}

/// Signals extracted from a single text.
#[derive(Debug, Clone, Serialize)]
pub struct Signals {
    /// First absolute-negative term found, if any. Counting stops there.
    pub veto_term: Option<String>,
    pub encouragement_terms: Vec<String>,
    pub contextual_negative_terms: Vec<String>,
    pub has_others_support: bool,
    pub has_future_hope: bool,
}

impl Signals {
    pub fn encouragement_count(&self) -> usize {
        self.encouragement_terms.len()
    }

    pub fn contextual_negative_count(&self) -> usize {
        self.contextual_negative_terms.len()
    }

    /// Apply the decision rules in priority order.
    pub fn rule(&self) -> Rule {
        if self.veto_term.is_some() {
            return Rule::AbusiveVeto;
        }

        let encouragement = self.encouragement_count();
        let negative = self.contextual_negative_count();

        if encouragement > 0 {
            Rule::EncouragementTerms
        } else if self.has_others_support && self.has_future_hope {
            Rule::OthersWellWishing
        } else if self.has_future_hope && negative <= 1 {
            Rule::FutureHope
        } else if negative > encouragement && negative > 2 {
            Rule::NegativeDominance
        } else {
            Rule::NoSignal
        }
    }
}

/// Stateless keyword/pattern classifier. Total over all input strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Extract every signal the decision rules need.
    pub fn signals(&self, text: &str) -> Signals {
        let normalized = normalize(text);

        if let Some(term) = ABSOLUTE_NEGATIVE.first_match(&normalized) {
            return Signals {
                veto_term: Some(term.to_string()),
                encouragement_terms: Vec::new(),
                contextual_negative_terms: Vec::new(),
                has_others_support: false,
                has_future_hope: false,
            };
        }

        Signals {
            veto_term: None,
            encouragement_terms: owned_terms(ENCOURAGEMENT.matches(&normalized)),
            contextual_negative_terms: owned_terms(CONTEXTUAL_NEGATIVE.matches(&normalized)),
            has_others_support: OTHERS_RE.is_match(&normalized)
                && COLLECTIVE_RE.is_match(&normalized),
            has_future_hope: FUTURE_HOPE_RE.is_match(&normalized),
        }
    }

    /// Classify text. Always returns a result with `method = heuristic`.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let signals = self.signals(text);
        let rule = signals.rule();
        debug!(
            ?rule,
            veto = ?signals.veto_term,
            encouragement = signals.encouragement_count(),
            negative = signals.contextual_negative_count(),
            others = signals.has_others_support,
            hope = signals.has_future_hope,
            "Heuristic decision"
        );
        decide(rule, &signals)
    }
}

fn owned_terms(terms: Vec<&str>) -> Vec<String> {
    terms.into_iter().map(str::to_string).collect()
}

fn decide(rule: Rule, signals: &Signals) -> ClassificationResult {
    let encouragement = signals.encouragement_count();
    let negative = signals.contextual_negative_count();

    let (is_encouragement, reason) = match rule {
        Rule::AbusiveVeto => (
            false,
            "욕설 또는 공격적인 표현이 포함되어 응원글로 볼 수 없음".to_string(),
        ),
        Rule::EncouragementTerms => (
            true,
            format!(
                "응원 관련 키워드 {}개 발견 ({})",
                encouragement,
                signals.encouragement_terms.join(", ")
            ),
        ),
        Rule::OthersWellWishing => (
            true,
            "다른 사람들의 앞날을 빌어주는 이타적인 응원 메시지".to_string(),
        ),
        Rule::FutureHope => (true, "미래에 대한 희망을 담은 메시지".to_string()),
        Rule::NegativeDominance => (
            false,
            format!(
                "부정적인 표현이 우세함 (부정: {}개, 응원: {}개)",
                negative, encouragement
            ),
        ),
        Rule::NoSignal => (
            false,
            format!(
                "응원의 의미를 담은 표현을 찾지 못함 (응원: {}개, 부정: {}개)",
                encouragement, negative
            ),
        ),
    };

    ClassificationResult::new(is_encouragement, reason, Method::Heuristic)
}
