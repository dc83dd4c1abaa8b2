use anyhow::{Context, Result};
use colored::Colorize;

use crate::storage::{DecisionStatus, DecisionStore};

pub fn set_status(store: &DecisionStore, decision_id: u64, status: DecisionStatus) -> Result<()> {
    store
        .update_status(decision_id, status, None)
        .with_context(|| format!("無法更新決策 {decision_id}"))?;

    println!(
        "{}",
        format!("已更新 ID {decision_id} 為 {}", status.as_str()).green()
    );
    Ok(())
}
