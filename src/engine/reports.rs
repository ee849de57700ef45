//! Wire shapes returned by the query operations.
//!
//! Field names are camelCase because the dashboard reads them as-is.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{
    DailyActivity, FunStats, Productivity, PromptStats, ReadWriteRatio, StreakResult, ToolCount,
    WorkStyle,
};
use crate::source::ModelUsageCounters;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OverviewReport {
    pub(crate) total_sessions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) total_messages: Option<u64>,
    pub(crate) total_prompts: u64,
    pub(crate) total_input: u64,
    pub(crate) total_output: u64,
    pub(crate) total_cache_read: u64,
    pub(crate) total_cache_write: u64,
    pub(crate) total_cost: f64,
    pub(crate) pro_subscription: f64,
    pub(crate) savings: f64,
    pub(crate) roi: i64,
    pub(crate) model_costs: IndexMap<String, f64>,
    /// Snapshot counters echoed per model, unpriced keys included.
    pub(crate) model_usage: IndexMap<String, ModelUsageCounters>,
    pub(crate) first_session: Option<String>,
    pub(crate) last_session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) longest_session: Option<serde_json::Value>,
    pub(crate) active_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct HourCell {
    pub(crate) hour: usize,
    pub(crate) count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HeatmapRow {
    pub(crate) day: &'static str,
    pub(crate) day_index: usize,
    pub(crate) hours: Vec<HourCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HeatmapReport {
    pub(crate) heatmap: Vec<HeatmapRow>,
    /// Busiest cell, floored at 1 so it can be used as a divisor
    pub(crate) max_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsightsReport {
    pub(crate) streaks: StreakResult,
    pub(crate) productivity: Productivity,
    pub(crate) prompts: PromptStats,
    pub(crate) fun_stats: FunStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CacheEfficiency {
    pub(crate) fresh_tokens: u64,
    pub(crate) cached_tokens: u64,
    pub(crate) ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CacheReport {
    pub(crate) cache_read: u64,
    pub(crate) cache_write: u64,
    pub(crate) hit_rate: u64,
    pub(crate) savings: f64,
    pub(crate) efficiency: CacheEfficiency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProjectCount {
    pub(crate) name: String,
    pub(crate) prompts: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolsReport {
    pub(crate) tools: Vec<ToolCount>,
    pub(crate) read_write_ratio: ReadWriteRatio,
    pub(crate) exploring_vs_building: WorkStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelReport {
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) output_tokens: u64,
    /// Share of all output tokens, whole percent
    pub(crate) percentage: u64,
    pub(crate) cost: f64,
    pub(crate) input_tokens: u64,
    pub(crate) cache_read: u64,
    pub(crate) cache_write: u64,
}

pub(crate) type DailyReport = Vec<DailyActivity>;
