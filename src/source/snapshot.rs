//! Usage snapshot loader
//!
//! `~/.claude/stats-cache.json` is rewritten periodically by Claude Code and holds
//! per-model token counters. Unlike the logs it is a required input.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::TokenCounts;
use crate::error::AppError;

/// `null` counters read as zero, same as absent ones.
fn zero_if_null<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Per-model counters, named as they appear in the snapshot file.
///
/// Keys the engine does not price (`webSearchRequests`, `costUSD`,
/// `contextWindow`, ...) are kept in `extra` and echoed back by the overview.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelUsageCounters {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub(crate) input_tokens: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub(crate) output_tokens: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub(crate) cache_read_input_tokens: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub(crate) cache_creation_input_tokens: u64,
    #[serde(flatten)]
    pub(crate) extra: IndexMap<String, Value>,
}

impl From<&ModelUsageCounters> for TokenCounts {
    fn from(c: &ModelUsageCounters) -> Self {
        TokenCounts {
            input: c.input_tokens,
            output: c.output_tokens,
            cache_read: c.cache_read_input_tokens,
            cache_write: c.cache_creation_input_tokens,
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageSnapshot {
    /// Keyed by full model id, in file order.
    #[serde(default)]
    pub(crate) model_usage: IndexMap<String, ModelUsageCounters>,
    pub(crate) total_messages: Option<u64>,
    /// Passed through to the overview untouched.
    pub(crate) longest_session: Option<Value>,
}

impl UsageSnapshot {
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AppError::SnapshotParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Token totals summed across every model.
    pub(crate) fn totals(&self) -> TokenCounts {
        let mut totals = TokenCounts::default();
        for counters in self.model_usage.values() {
            totals.add(&TokenCounts::from(counters));
        }
        totals
    }
}
