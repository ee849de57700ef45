//! Loaders that turn the raw sources into aggregator inputs

use rayon::prelude::*;
use std::time::Instant;

use crate::core::{HistorySummary, ToolUsage, aggregate_history};
use crate::utils::Timezone;

use super::ClaudePaths;
use super::history::read_history;
use super::transcript::{find_transcript_files, read_transcript};

/// Parse the prompt history and aggregate it in one pass.
pub(crate) fn load_history(paths: &ClaudePaths, timezone: Timezone) -> HistorySummary {
    let start = Instant::now();
    let records = read_history(&paths.history_file);
    let summary = aggregate_history(&records, timezone);
    tracing::debug!(
        records = records.len(),
        days = summary.daily.len(),
        projects = summary.projects.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "aggregated history"
    );
    summary
}

/// Count tool invocations across every project transcript.
///
/// Files are parsed in parallel; `reduce` keeps file order so tie-breaking by
/// first encounter matches a sequential scan.
pub(crate) fn load_tool_usage(paths: &ClaudePaths) -> ToolUsage {
    let start = Instant::now();
    let files = find_transcript_files(&paths.projects_dir);
    if files.is_empty() {
        tracing::debug!(dir = %paths.projects_dir.display(), "no transcript files found");
        return ToolUsage::default();
    }

    let usage = files
        .par_iter()
        .map(|path| {
            let mut partial = ToolUsage::default();
            for line in read_transcript(path) {
                for name in line.tool_uses() {
                    partial.record(name);
                }
            }
            partial
        })
        .reduce(ToolUsage::default, |mut acc, partial| {
            acc.merge(partial);
            acc
        });

    tracing::debug!(
        files = files.len(),
        invocations = usage.total(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "scanned transcripts"
    );
    usage
}
