use anyhow::Result;
use clap::Parser;
use decision_copilot::cli::{Cli, Commands};
use decision_copilot::commands;
use decision_copilot::storage::{location, DecisionStore};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = DecisionStore::open(location::resolve(cli.store.as_deref()))?;
    log::debug!("using store at {}", store.path().display());

    // No subcommand starts an interactive session
    match cli.command {
        None | Some(Commands::Start) => commands::start_session(&store),
        Some(Commands::List) => commands::list_decisions(&store),
        Some(Commands::Review { decision_id }) => commands::review_decision(&store, decision_id),
        Some(Commands::Stats) => commands::show_statistics(&store),
        Some(Commands::Status {
            decision_id,
            status,
        }) => commands::set_status(&store, decision_id, status.into()),
    }
}
