//! Data source layer
//!
//! Locates the Claude Code data directory and parses its three inputs: the
//! prompt history log, the per-project transcripts and the usage snapshot.

pub(crate) mod history;
pub(crate) mod jsonl;
pub(crate) mod loader;
pub(crate) mod snapshot;
pub(crate) mod transcript;

use std::env;
use std::path::PathBuf;

const CLAUDE_DIR_ENV: &str = "CLAUDE_METRICS_DIR";

/// Resolved locations of every input under the Claude data directory.
#[derive(Debug, Clone)]
pub(crate) struct ClaudePaths {
    pub(crate) root: PathBuf,
    pub(crate) stats_file: PathBuf,
    pub(crate) history_file: PathBuf,
    pub(crate) projects_dir: PathBuf,
}

impl ClaudePaths {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            stats_file: root.join("stats-cache.json"),
            history_file: root.join("history.jsonl"),
            projects_dir: root.join("projects"),
            root,
        }
    }

    /// Explicit directory first, then `CLAUDE_METRICS_DIR`, then `~/.claude`.
    pub(crate) fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }
        if let Ok(dir) = env::var(CLAUDE_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return Self::new(PathBuf::from(dir));
        }
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(".claude"))
    }
}

pub(crate) use loader::{load_history, load_tool_usage};
pub(crate) use snapshot::{ModelUsageCounters, UsageSnapshot};
