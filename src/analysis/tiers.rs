//! Recommendation tier derivation.
//!
//! The accumulated score is the sole driver of the tier; the mapping is a
//! fixed step function with boundaries at 0 and 3.

use serde::{Deserialize, Serialize};

/// Final recommendation, ordered from most cautious to most favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    /// 缺點較多，建議謹慎。
    #[serde(rename = "建議謹慎")]
    Caution,
    /// 利弊參半，可以考慮。
    #[serde(rename = "可以考慮")]
    Consider,
    /// 優點明顯，積極考慮。
    #[serde(rename = "積極考慮")]
    Proceed,
}

impl Recommendation {
    /// Display label, also used as the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Caution => "建議謹慎",
            Recommendation::Consider => "可以考慮",
            Recommendation::Proceed => "積極考慮",
        }
    }

    /// Fixed explanatory sentence shown under the tier label.
    pub fn rationale(&self) -> &'static str {
        match self {
            Recommendation::Caution => "根據您的回答，缺點較多，建議謹慎考慮，多收集信息。",
            Recommendation::Consider => "根據您的回答，利弊參半，建議可以考慮但需更多信息。",
            Recommendation::Proceed => "根據您的回答，優點明顯，建議積極考慮這個決定。",
        }
    }
}

/// Map an accumulated score onto its recommendation tier.
pub fn classify_recommendation(score: i32) -> Recommendation {
    if score >= 3 {
        Recommendation::Proceed
    } else if score >= 0 {
        Recommendation::Consider
    } else {
        Recommendation::Caution
    }
}
