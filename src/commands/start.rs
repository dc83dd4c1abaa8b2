//! Interactive decision session.
//!
//! Drives the engine pipeline end to end: detect the category, collect
//! answers batch by batch until the script is exhausted, score, render,
//! propose follow-ups, and persist the record.

use std::collections::BTreeSet;

use anyhow::Result;
use colored::Colorize;

use crate::analysis::{self, Answers};
use crate::output;
use crate::storage::DecisionStore;

use super::prompt;

pub fn start_session(store: &DecisionStore) -> Result<()> {
    print!("{}", output::banner());

    let question = prompt("\n請描述您面臨的決定：")?;
    if question.is_empty() {
        println!("{}", "問題不能為空，請重新輸入".yellow());
        return Ok(());
    }

    let category = analysis::detect_category(&question);
    println!(
        "\n{}",
        format!("偵測到決策類型：{}", category.label()).dimmed()
    );

    let mut answers = Answers::new();
    // Keys already put to the user, answered or not; a question left blank
    // is not asked again.
    let mut asked: BTreeSet<String> = BTreeSet::new();

    loop {
        let batch = analysis::next_questions(category, &asked);
        if batch.is_empty() {
            break;
        }
        for template in batch {
            let key = analysis::question_key(template);
            asked.insert(key.to_string());

            let answer = prompt(&format!("❓ {template}").bold().to_string())?;
            if !answer.is_empty() {
                answers.insert(key.to_string(), answer);
            }
        }
    }

    let result = analysis::analyze(&question, &answers, category);
    print!("{}", output::render_analysis(&result));

    let follow_ups = analysis::follow_up_questions(&result);
    if !follow_ups.is_empty() {
        println!("\n{}", "💭 值得再想想：".bold());
        for follow_up in &follow_ups {
            println!("  • {follow_up}");
        }
    }

    let decision_id = store.create(&question, answers, result)?;
    println!("\n{}", format!("💾 決策已儲存！ID: {decision_id}").dimmed());
    println!("\n{}", "⚠️ 提醒：最終決定權在您手中，這只是參考".dimmed());

    Ok(())
}
