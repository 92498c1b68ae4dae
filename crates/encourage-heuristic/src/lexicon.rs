//! Static keyword lexicons.
//!
//! Terms are stored in their surface form and normalized once on first use,
//! so `"할 수 있어"` and `"할수있어"` collapse into a single entry.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::classifier::normalize;

/// Semantic role of an encouragement term. Scoring only uses the total count;
/// the role is kept for readability of the lists and for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncouragementRole {
    Direct,
    BeliefInAbility,
    PositiveEvaluation,
    Comfort,
    FutureHope,
    WellWishing,
}

/// Insults, hostility and profanity. Any single hit vetoes encouragement.
const ABSOLUTE_NEGATIVE_TERMS: &[&str] = &[
    "꺼져", "닥쳐", "죽어버려", "뒈져", "병신", "븅신", "등신", "멍청이", "멍청한",
    "바보같은", "한심", "쓰레기", "찌질", "개새", "새끼", "시발", "씨발", "ㅅㅂ",
    "ㅂㅅ", "존나", "좆", "지랄", "미친놈", "미친년", "엿먹어", "재수없", "꼴보기싫",
    "역겨", "loser", "idiot", "stupid", "shut up",
];

/// Mildly negative vocabulary: difficulty, failure, fatigue, sadness.
const CONTEXTUAL_NEGATIVE_TERMS: &[&str] = &[
    "싫어", "짜증", "화나", "스트레스", "우울", "절망", "포기", "실패", "못해", "안돼",
    "어려워", "힘들", "피곤", "지쳐", "지친", "망했", "망쳤", "슬퍼", "슬프", "외로",
    "걱정", "불안", "좌절", "눈물", "아파", "괴로",
];

const ENCOURAGEMENT_GROUPS: &[(EncouragementRole, &[&str])] = &[
    (
        EncouragementRole::Direct,
        &["화이팅", "파이팅", "힘내", "응원", "응원해", "포기하지마", "fighting", "cheer up"],
    ),
    (
        EncouragementRole::BeliefInAbility,
        &[
            "잘할", "할수있어", "할 수 있어", "할수있다", "해낼", "믿어", "믿는다",
            "잘하고있어", "잘하고 있어", "you can do it",
        ],
    ),
    (
        EncouragementRole::PositiveEvaluation,
        &[
            "좋아", "멋져", "멋있", "최고", "대단해", "대단하", "훌륭해", "잘했어",
            "자랑스러워", "든든해", "충분해", "최선", "노력", "열심히",
        ],
    ),
    (
        EncouragementRole::Comfort,
        &[
            "괜찮아", "괜찮을", "수고했어", "고생했어", "고생많았", "함께", "지지해",
            "이해해", "토닥", "위로", "곁에", "사랑해",
        ],
    ),
    (
        EncouragementRole::FutureHope,
        &["잘될", "잘 될", "희망", "꿈", "목표", "이룰", "극복", "견뎌", "버텨", "성공"],
    ),
    (
        EncouragementRole::WellWishing,
        &["행복하길", "행복하세요", "건강하세요", "건강하길", "축복", "평안"],
    ),
];

/// A normalized, deduplicated set of surface forms matched by substring.
#[derive(Debug, Clone)]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Lexicon {
    pub fn new<'a>(terms: impl IntoIterator<Item = &'a str>) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = normalize(term);
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    /// Distinct terms contained in `normalized_text`, in lexicon order.
    pub fn matches<'a>(&'a self, normalized_text: &str) -> Vec<&'a str> {
        self.terms
            .iter()
            .filter(|t| normalized_text.contains(t.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// First term contained in `normalized_text`, if any.
    pub fn first_match<'a>(&'a self, normalized_text: &str) -> Option<&'a str> {
        self.terms
            .iter()
            .find(|t| normalized_text.contains(t.as_str()))
            .map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        let term = normalize(term);
        self.terms.iter().any(|t| *t == term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

pub static ABSOLUTE_NEGATIVE: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::new(ABSOLUTE_NEGATIVE_TERMS.iter().copied()));

pub static CONTEXTUAL_NEGATIVE: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::new(CONTEXTUAL_NEGATIVE_TERMS.iter().copied()));

pub static ENCOURAGEMENT: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::new(
        ENCOURAGEMENT_GROUPS
            .iter()
            .flat_map(|(_, terms)| terms.iter().copied()),
    )
});

/// Role of an encouragement term, looked up by its normalized form.
pub fn encouragement_role(term: &str) -> Option<EncouragementRole> {
    let term = normalize(term);
    ENCOURAGEMENT_GROUPS
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| normalize(t) == term))
        .map(|(role, _)| *role)
}
