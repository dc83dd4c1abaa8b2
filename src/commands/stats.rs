use anyhow::Result;
use colored::Colorize;

use crate::output;
use crate::storage::DecisionStore;

pub fn show_statistics(store: &DecisionStore) -> Result<()> {
    let stats = store.statistics()?;
    println!("{}", "📊 決策統計".bold());
    output::statistics_table(&stats).printstd();
    Ok(())
}
