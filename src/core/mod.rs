//! Core module - aggregation and derivation over parsed records

mod history;
mod insights;
mod streak;
mod tally;
mod tools;
mod types;

pub(crate) use history::{DAYS_PER_WEEK, HOURS_PER_DAY, HistorySummary, aggregate_history};
pub(crate) use insights::{FunStats, Productivity, PromptStats};
pub(crate) use streak::{StreakResult, calculate_streaks};
pub(crate) use tools::{ReadWriteRatio, ToolCount, ToolUsage, WorkStyle};
pub(crate) use types::{DailyActivity, EventRecord, TokenCounts};
