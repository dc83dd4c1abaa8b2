use anyhow::Result;
use colored::Colorize;

use crate::output;
use crate::storage::DecisionStore;

pub fn list_decisions(store: &DecisionStore) -> Result<()> {
    let decisions = store.list()?;
    if decisions.is_empty() {
        println!("{}", "尚無決策記錄".yellow());
        return Ok(());
    }

    println!("{}", "📋 決策列表".bold());
    output::decisions_table(&decisions).printstd();
    Ok(())
}
