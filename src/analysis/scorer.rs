//! Answer scoring and analysis assembly.
//!
//! Every answered question is scored independently by an ordered rule table:
//! the first rule whose key marker occurs in the question key handles the
//! answer, later rules are not consulted. All checks are plain substring
//! containment on the raw text, so a marker inside a longer phrase still
//! matches (不了解 contains 了解).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tiers::{classify_recommendation, Recommendation};

/// Question key to raw answer text. Keys are unique; iteration order is
/// deterministic and only affects the order pros and cons are listed in.
pub type Answers = BTreeMap<String, String>;

/// Outcome of scoring one decision session. Immutable once produced and
/// embedded verbatim into the persisted decision record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub category: Category,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub score: i32,
    pub recommendation: Recommendation,
    pub recommendation_text: String,
}

/// Running tally while answers are folded through the rule table.
#[derive(Default)]
struct Tally {
    pros: Vec<String>,
    cons: Vec<String>,
    score: i32,
}

struct Rule {
    /// The rule applies when any marker occurs in the question key.
    key_markers: &'static [&'static str],
    apply: fn(&str, &str, &mut Tally),
}

/// Ordered rule table; the first key match wins.
const RULES: &[Rule] = &[
    Rule {
        key_markers: &["薪水", "報酬", "高多少"],
        apply: score_numeric_gain,
    },
    Rule {
        key_markers: &["興趣", "喜歡"],
        apply: score_interest,
    },
    Rule {
        key_markers: &["了解", "熟悉"],
        apply: score_familiarity,
    },
    Rule {
        key_markers: &["增加", "變長"],
        apply: score_cost_direction,
    },
    Rule {
        key_markers: &["前景", "發展"],
        apply: score_outlook,
    },
    Rule {
        key_markers: &["時間"],
        apply: score_time_available,
    },
    Rule {
        key_markers: &["承受", "損失"],
        apply: score_loss_tolerance,
    },
];

fn score_numeric_gain(key: &str, value: &str, tally: &mut Tally) {
    let Some(percent) = extract_number(value) else {
        return;
    };
    if percent > 20 {
        tally.pros.push(format!("{key}提升 {percent}%"));
        tally.score += 3;
    } else if percent > 0 {
        tally.pros.push(format!("{key}有提升"));
        tally.score += 1;
    } else {
        tally.cons.push(format!("{key}沒有提升"));
        tally.score -= 1;
    }
}

fn score_interest(key: &str, value: &str, tally: &mut Tally) {
    if value.contains("是") || value.contains("喜歡") {
        tally.pros.push(format!("{key}: 有興趣"));
        tally.score += 2;
    } else if value.contains("普通") {
        // neutral
    } else {
        tally.cons.push(format!("{key}: 沒興趣"));
        tally.score -= 2;
    }
}

fn score_familiarity(key: &str, value: &str, tally: &mut Tally) {
    if value.contains("了解") || value.contains("熟悉") {
        tally.pros.push(key.to_string());
        tally.score += 1;
    } else {
        tally.cons.push(key.to_string());
        tally.score -= 1;
    }
}

fn score_cost_direction(_key: &str, value: &str, tally: &mut Tally) {
    if value.contains("增加") || value.contains("變長") {
        tally.cons.push("通勤/成本增加".to_string());
        tally.score -= 2;
    } else if value.contains("減少") || value.contains("變短") {
        tally.pros.push("通勤/成本減少".to_string());
        tally.score += 2;
    }
}

fn score_outlook(key: &str, value: &str, tally: &mut Tally) {
    if value.contains("很有") || value.contains("不錯") {
        tally.pros.push(format!("{key}: 不錯"));
        tally.score += 2;
    } else if value.contains("不明") || value.contains("沒有") {
        tally.cons.push(format!("{key}: 不明"));
        tally.score -= 1;
    }
}

// 沒有 contains 有, so the negative branch only fires for phrasings that
// spell 沒有 without a bare 有; the cascade order is part of the contract.
fn score_time_available(_key: &str, value: &str, tally: &mut Tally) {
    if value.contains("有") || value.contains("充足") {
        tally.score += 1;
    } else if value.contains("沒有") {
        tally.score -= 1;
    }
}

fn score_loss_tolerance(_key: &str, value: &str, tally: &mut Tally) {
    if let Some(percent) = extract_number(value) {
        if percent > 30 {
            tally.score += 1;
        }
    }
}

/// Best-effort numeric read: keeps ASCII digits only, `None` when no digit
/// survives or the digit run overflows.
fn extract_number(value: &str) -> Option<i64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Score the collected answers and derive the recommendation tier.
///
/// Total over its inputs: keys matching no rule contribute nothing,
/// malformed numeric values are skipped, and zero answers yield a zero
/// score and the middle tier.
pub fn analyze(question: &str, answers: &Answers, category: Category) -> Analysis {
    let mut tally = Tally::default();

    for (key, value) in answers {
        let rule = RULES
            .iter()
            .find(|rule| rule.key_markers.iter().any(|marker| key.contains(marker)));
        if let Some(rule) = rule {
            (rule.apply)(key, value, &mut tally);
        }
    }

    log::debug!(
        "analyzed {question:?}: {} answers, score {}",
        answers.len(),
        tally.score
    );

    let recommendation = classify_recommendation(tally.score);
    Analysis {
        category,
        pros: tally.pros,
        cons: tally.cons,
        score: tally.score,
        recommendation,
        recommendation_text: recommendation.rationale().to_string(),
    }
}
