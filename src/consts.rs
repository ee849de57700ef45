/// Fallback label when a project path or tool name is unavailable
pub(crate) const UNKNOWN: &str = "unknown";

/// Monthly subscription cost (USD) used as the savings/ROI baseline
pub(crate) const DEFAULT_SUBSCRIPTION_COST: f64 = 100.0;

/// Number of tools shown in the tools table
pub(crate) const DEFAULT_TOP_TOOLS: usize = 6;

pub(crate) const TOKENS_PER_MILLION: f64 = 1_000_000.0;

pub(crate) const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
