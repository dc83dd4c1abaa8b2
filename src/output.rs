//! Terminal rendering for analysis results and record tables.
//!
//! Analysis panels are built as colored strings; record listings and
//! statistics use plain tables.

use std::fmt::Write;

use colored::Colorize;
use prettytable::{row, Table};

use crate::analysis::{Analysis, Recommendation};
use crate::storage::{DecisionRecord, Statistics};

/// Banner shown when an interactive session begins.
pub fn banner() -> String {
    let divider = "═".repeat(44);
    let mut out = String::new();
    writeln!(out, "{}", divider.bright_cyan()).unwrap();
    writeln!(out, "    {}", "🔮 Decision Co-Pilot".bright_cyan().bold()).unwrap();
    writeln!(out, "    {}", "您的決策小幫手".dimmed()).unwrap();
    writeln!(out, "{}", divider.bright_cyan()).unwrap();
    out
}

/// Render the recommendation headline, rationale, and pro/con lists.
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();

    let headline = format!("🎯 最終建議：【{}】", analysis.recommendation.label());
    let headline = match analysis.recommendation {
        Recommendation::Caution => headline.yellow().bold(),
        _ => headline.green().bold(),
    };
    writeln!(out, "\n{headline}").unwrap();
    writeln!(out, "{}", analysis.recommendation_text.dimmed()).unwrap();

    if !analysis.pros.is_empty() {
        writeln!(out, "\n{}", "✅ 優點：".green().bold()).unwrap();
        for pro in &analysis.pros {
            writeln!(out, "  • {pro}").unwrap();
        }
    }

    if !analysis.cons.is_empty() {
        writeln!(out, "\n{}", "⚠️ 缺點：".red().bold()).unwrap();
        for con in &analysis.cons {
            writeln!(out, "  • {con}").unwrap();
        }
    }

    out
}

/// Table of all decisions, newest first.
pub fn decisions_table(records: &[DecisionRecord]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "問題", "建議", "狀態", "日期"]);

    for record in records.iter().rev() {
        table.add_row(row![
            record.id,
            truncate_chars(&record.question, 40),
            record.recommendation,
            record.status.label(),
            record.created_at.format("%Y-%m-%d"),
        ]);
    }

    table
}

/// Statistics summary table. The adoption rate only appears once at least
/// one decision is done.
pub fn statistics_table(stats: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["項目", "數量"]);
    table.add_row(row!["總決策數", stats.total]);
    table.add_row(row!["待執行", stats.pending]);
    table.add_row(row!["已完成", stats.done]);
    table.add_row(row!["已放棄", stats.abandoned]);
    if stats.done > 0 {
        table.add_row(row!["採納率", format!("{:.1}%", stats.adoption_rate)]);
    }
    table
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, Answers, Category};

    #[test]
    fn analysis_panel_lists_pros_and_cons() {
        let mut answers = Answers::new();
        answers.insert("薪水".to_string(), "30%".to_string());
        answers.insert("興趣".to_string(), "否".to_string());
        let analysis = analyze("q", &answers, Category::Work);

        let panel = render_analysis(&analysis);
        assert!(panel.contains("最終建議"));
        assert!(panel.contains("薪水提升 30%"));
        assert!(panel.contains("興趣: 沒興趣"));
    }

    #[test]
    fn long_questions_are_truncated_in_the_table() {
        assert_eq!(truncate_chars("短問題", 40), "短問題");

        let long = "要".repeat(45);
        let cell = truncate_chars(&long, 40);
        assert!(cell.ends_with("..."));
        assert_eq!(cell.chars().count(), 43);
    }
}
