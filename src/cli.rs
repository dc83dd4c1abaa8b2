use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::storage::DecisionStatus;

#[derive(Parser, Debug)]
#[command(name = "decision-copilot")]
#[command(about = "🔮 Decision Co-Pilot - 您的決策小幫手", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Store file to read and write (defaults to ~/.decision-copilot/decisions.json)
    #[arg(long, global = true, env = "DECISION_COPILOT_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new decision analysis session (the default)
    Start,

    /// List all recorded decisions
    List,

    /// Review a recorded decision and note its outcome
    Review {
        /// Decision id
        decision_id: u64,
    },

    /// Show decision statistics
    Stats,

    /// Update a decision's status directly
    Status {
        /// Decision id
        decision_id: u64,

        /// New status
        #[arg(value_enum)]
        status: StatusArg,
    },
}

/// Status values accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Done,
    Abandoned,
}

impl From<StatusArg> for DecisionStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => DecisionStatus::Pending,
            StatusArg::Done => DecisionStatus::Done,
            StatusArg::Abandoned => DecisionStatus::Abandoned,
        }
    }
}
