//! Decision category detection.
//!
//! Categories are matched by substring keyword lookup against the
//! case-folded question. Declaration order is the tie-break: a question
//! matching keywords from more than one category resolves to the one
//! declared first.

use serde::{Deserialize, Serialize};

/// Decision domain for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "工作")]
    Work,
    #[serde(rename = "投資")]
    Investment,
    #[serde(rename = "搬家")]
    Relocation,
    #[serde(rename = "學習")]
    Learning,
    /// Fallback when no keyword matches.
    #[serde(rename = "一般")]
    General,
}

impl Category {
    /// Display name, also used as the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "工作",
            Category::Investment => "投資",
            Category::Relocation => "搬家",
            Category::Learning => "學習",
            Category::General => "一般",
        }
    }
}

/// Keyword table in declaration order. Keywords are stored case-folded and
/// matched against the case-folded question.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Work,
        &["工作", "辭職", "跳槽", "面試", "offer", "公司", "同事"],
    ),
    (
        Category::Investment,
        &["投資", "股票", "基金", "理財", "賺錢", "獲利"],
    ),
    (
        Category::Relocation,
        &["搬家", "搬家的", "新房子", "租房", "遷徙"],
    ),
    (
        Category::Learning,
        &["學習", "課程", "進修", "培訓", "讀書", "mba", "語言"],
    ),
];

/// Classify a free-text question into a [`Category`].
///
/// Returns the first category (declaration order) with any keyword present
/// as a substring, or [`Category::General`] when none matches. Total: empty
/// or keyword-free input classifies as the fallback.
pub fn detect_category(question: &str) -> Category {
    let normalized = question.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return *category;
        }
    }

    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_work_questions() {
        assert_eq!(detect_category("我要不要接受這份新工作？"), Category::Work);
    }

    #[test]
    fn detects_investment_questions() {
        assert_eq!(detect_category("要不要投資這檔股票？"), Category::Investment);
    }

    #[test]
    fn detects_relocation_questions() {
        assert_eq!(detect_category("要不要搬家到台北？"), Category::Relocation);
    }

    #[test]
    fn detects_learning_questions() {
        assert_eq!(detect_category("該不該報名這個課程？"), Category::Learning);
    }

    #[test]
    fn keyword_free_question_falls_back_to_general() {
        assert_eq!(detect_category("今晚要吃什麼？"), Category::General);
        assert_eq!(detect_category(""), Category::General);
        assert_eq!(detect_category("   "), Category::General);
    }

    #[test]
    fn earlier_category_wins_on_ties() {
        // 辭職 is a work keyword, 進修 a learning keyword; work is declared first
        assert_eq!(detect_category("要辭職去進修嗎？"), Category::Work);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect_category("該接受這個 OFFER 嗎？"), Category::Work);
        assert_eq!(detect_category("要去念MBA嗎？"), Category::Learning);
    }
}
