//! Clarifying questions proposed after an analysis completes.

use super::scorer::Analysis;

/// At most two follow-ups: first a prompt to confront the worst con, then a
/// time-pressure check when the score is non-negative.
pub fn follow_up_questions(analysis: &Analysis) -> Vec<String> {
    let mut follow_ups = Vec::new();

    if let Some(worst_con) = analysis.cons.first() {
        follow_ups.push(format!("關於「{worst_con}」，您有辦法改善或接受嗎？"));
    }

    if analysis.score >= 0 {
        follow_ups.push("這個決定有時間壓力嗎？還是可以再考慮一段時間？".to_string());
    }

    follow_ups.truncate(2);
    follow_ups
}
