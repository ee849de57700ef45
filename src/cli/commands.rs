//! CLI subcommand definitions

use clap::Subcommand;

/// One subcommand per query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Totals, cost and savings overview (default)
    Stats,
    /// Prompts and sessions per day
    Daily,
    /// Prompt counts by weekday and hour
    Heatmap,
    /// Streaks, productivity, prompt and fun statistics
    Insights,
    /// Cache reads, writes and savings
    Cache,
    /// Prompts per project
    Projects,
    /// Tool invocation counts and read/write balance
    Tools,
    /// Output share and cost per model
    Models,
}

impl Commands {
    pub(crate) fn resolve(command: Option<Commands>) -> Commands {
        command.unwrap_or(Commands::Stats)
    }
}
