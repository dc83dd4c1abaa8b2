//! Review a past decision and record its outcome.

use anyhow::Result;
use colored::Colorize;

use crate::output;
use crate::storage::{DecisionStatus, DecisionStore};

use super::prompt;

pub fn review_decision(store: &DecisionStore, decision_id: u64) -> Result<()> {
    let Some(decision) = store.get(decision_id)? else {
        anyhow::bail!("找不到 ID {decision_id} 的決策");
    };

    println!("{}", format!("📝 決策 #{decision_id}").bright_cyan().bold());
    println!("{}{}", "問題：".bold(), decision.question);

    if !decision.answers.is_empty() {
        println!("\n{}", "❓ 您的回答：".bold());
        for (key, value) in &decision.answers {
            println!("  • {key}: {value}");
        }
    }

    print!("{}", output::render_analysis(&decision.analysis));

    println!("\n{}", "請問您後續結果是？".bold());
    println!("1. ✅ 已執行/已完成");
    println!("2. ❌ 已放棄/沒做");
    println!("3. ⏳ 還在考慮中");

    let choice = prompt("")?;
    match choice.as_str() {
        "1" => {
            store.update_status(decision_id, DecisionStatus::Done, Some("已執行".to_string()))?;
            println!("{}", "已更新為「已完成」！".green());
        }
        "2" => {
            store.update_status(
                decision_id,
                DecisionStatus::Abandoned,
                Some("已放棄".to_string()),
            )?;
            println!("{}", "已更新為「已放棄」！".yellow());
        }
        _ => println!("{}", "好的，維持待執行狀態".dimmed()),
    }

    Ok(())
}
