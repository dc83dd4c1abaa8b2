//! Adaptive question selection.
//!
//! Each category carries a fixed ordered script of follow-up questions. The
//! planner filters out questions whose key is already answered and hands the
//! caller the next batch, at most [`MAX_BATCH`] at a time. An empty batch is
//! the normal terminal state: the script is exhausted and the caller should
//! stop prompting.

use std::collections::BTreeSet;

use super::category::Category;

/// Maximum number of questions returned per batch.
pub const MAX_BATCH: usize = 3;

/// Scripted questions per category, asked in declaration order. The
/// full-width parenthetical is a hint about the expected answer format.
const QUESTION_TEMPLATES: &[(Category, &[&str])] = &[
    (
        Category::Work,
        &[
            "這份工作的薪水比目前高多少？（%）",
            "這是您有興趣的產業嗎？（是/普通/否）",
            "您了解未來團隊文化嗎？（了解/不了解）",
            "這份工作會讓您通勤時間增加嗎？（增加/不變/減少）",
            "這份工作有發展前景嗎？（很有前景/普通/不明）",
        ],
    ),
    (
        Category::Investment,
        &[
            "這筆投資的預期報酬率是多少？（%）",
            "您能承受的最大損失是多少？（%）",
            "這筆資金您需要多久能動用？（越短越好/1年以上/隨時）",
            "您對這個投資標的有多少了解？（很了解/一般/不了解）",
        ],
    ),
    (
        Category::Relocation,
        &[
            "新地點的房租/房價比目前高多少？（%）",
            "新地點通勤時間有改善嗎？（變短/差不多/變長）",
            "您喜歡新地點的環境嗎？（喜歡/普通/不喜歡）",
            "新地點有您需要的人脈資源嗎？（有/沒有/不重要）",
        ],
    ),
    (
        Category::Learning,
        &[
            "這個學習投資需要多少費用？（金額）",
            "學成後對您的事業有幫助嗎？（很大/普通/沒有）",
            "您有足夠的時間投入嗎？（有/普通/沒有）",
            "這是您有興趣的領域嗎？（是/普通/否）",
        ],
    ),
];

/// Fallback script when no category-specific questions apply.
const GENERIC_QUESTIONS: &[&str] = &[
    "這個決定對您有多重要？（非常重要/普通/不重要）",
    "您有多少時間做這個決定？（很趕/充足/不急）",
    "您最在意這個決定的哪個面向？（時間/金錢/情感/發展）",
];

/// Stable identifier for a question template: the text before the
/// full-width parenthetical hint, trimmed.
pub fn question_key(template: &str) -> &str {
    template.split('（').next().unwrap_or(template).trim()
}

fn templates_for(category: Category) -> &'static [&'static str] {
    QUESTION_TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, questions)| *questions)
        .unwrap_or(GENERIC_QUESTIONS)
}

/// Next batch of unanswered questions for `category`, in template order.
///
/// Idempotent and side-effect free; a growing `answered` set can only
/// shrink the result.
pub fn next_questions(category: Category, answered: &BTreeSet<String>) -> Vec<&'static str> {
    templates_for(category)
        .iter()
        .copied()
        .filter(|template| !answered.contains(question_key(template)))
        .take(MAX_BATCH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn question_key_strips_the_answer_hint() {
        assert_eq!(
            question_key("這份工作的薪水比目前高多少？（%）"),
            "這份工作的薪水比目前高多少？"
        );
        assert_eq!(question_key("沒有提示的問題"), "沒有提示的問題");
    }

    #[test]
    fn returns_at_most_three_questions() {
        let batch = next_questions(Category::Work, &BTreeSet::new());
        assert_eq!(batch.len(), MAX_BATCH);
    }

    #[test]
    fn skips_answered_questions() {
        let first = next_questions(Category::Work, &BTreeSet::new());
        let done = answered(&[question_key(first[0])]);

        let batch = next_questions(Category::Work, &done);
        assert_eq!(batch.len(), MAX_BATCH);
        assert!(!batch.contains(&first[0]));
    }

    #[test]
    fn exhausted_script_yields_empty_batch() {
        let all: BTreeSet<String> = templates_for(Category::Investment)
            .iter()
            .map(|template| question_key(template).to_string())
            .collect();

        assert!(next_questions(Category::Investment, &all).is_empty());
    }

    #[test]
    fn general_category_uses_the_fallback_script() {
        let batch = next_questions(Category::General, &BTreeSet::new());
        assert_eq!(batch.len(), 3);
        assert!(batch[0].contains("重要"));
    }

    #[test]
    fn answering_strictly_shrinks_the_remaining_script() {
        let mut done = BTreeSet::new();
        loop {
            let batch = next_questions(Category::Work, &done);
            let Some(first) = batch.first() else { break };
            let before = batch.len();

            done.insert(question_key(first).to_string());
            let after = next_questions(Category::Work, &done).len();
            assert!(after <= before);
        }
        assert_eq!(done.len(), 5);
    }
}
