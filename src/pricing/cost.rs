//! Cost and cache accounting over per-model token counters

use crate::consts::TOKENS_PER_MILLION;
use crate::core::TokenCounts;
use crate::utils::{round_fixed, round_percent};

use super::table::{PricingEntry, PricingTable};

pub(crate) fn calculate_cost(tokens: &TokenCounts, pricing: &PricingEntry) -> f64 {
    tokens.input as f64 * pricing.input / TOKENS_PER_MILLION
        + tokens.output as f64 * pricing.output / TOKENS_PER_MILLION
        + tokens.cache_read as f64 * pricing.cache_read / TOKENS_PER_MILLION
        + tokens.cache_write as f64 * pricing.cache_write / TOKENS_PER_MILLION
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ModelCost {
    pub(crate) model: String,
    pub(crate) tokens: TokenCounts,
    /// Unrounded USD
    pub(crate) cost: f64,
}

/// Per-model and aggregate cost. Figures stay unrounded until reported.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct CostSummary {
    pub(crate) models: Vec<ModelCost>,
    pub(crate) tokens: TokenCounts,
    pub(crate) total: f64,
}

impl CostSummary {
    /// Amount by which the usage exceeds the subscription, never negative.
    pub(crate) fn savings(&self, baseline: f64) -> f64 {
        (self.total - baseline).max(0.0)
    }

    /// Cost as a whole-number percentage of the baseline; 0 for a non-positive baseline.
    pub(crate) fn roi_percent(&self, baseline: f64) -> i64 {
        if baseline > 0.0 {
            round_percent(self.total / baseline * 100.0)
        } else {
            0
        }
    }
}

pub(crate) fn summarize_costs<'a, I>(usage: I, table: &PricingTable) -> CostSummary
where
    I: IntoIterator<Item = (&'a str, TokenCounts)>,
{
    let mut summary = CostSummary::default();
    for (model, tokens) in usage {
        let cost = calculate_cost(&tokens, table.lookup(model));
        summary.total += cost;
        summary.tokens.add(&tokens);
        summary.models.push(ModelCost {
            model: model.to_string(),
            tokens,
            cost,
        });
    }
    summary
}

/// Cache read/write totals and what cache reads saved versus fresh input.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct CacheEconomics {
    pub(crate) cache_read: u64,
    pub(crate) cache_write: u64,
    pub(crate) fresh_input: u64,
    /// Unrounded USD; cache-write premiums are not part of this figure.
    pub(crate) savings: f64,
}

impl CacheEconomics {
    pub(crate) fn hit_rate(&self) -> u64 {
        let denominator = self.cache_read + self.cache_write;
        if denominator == 0 {
            return 0;
        }
        (self.cache_read as f64 / denominator as f64 * 100.0).round() as u64
    }

    /// Cached tokens per fresh input token, one decimal.
    pub(crate) fn efficiency_ratio(&self) -> f64 {
        if self.fresh_input == 0 {
            return 0.0;
        }
        round_fixed(self.cache_read as f64 / self.fresh_input as f64, 1)
    }
}

pub(crate) fn cache_economics<'a, I>(usage: I, table: &PricingTable) -> CacheEconomics
where
    I: IntoIterator<Item = (&'a str, TokenCounts)>,
{
    let mut economics = CacheEconomics::default();
    for (model, tokens) in usage {
        let pricing = table.lookup(model);
        economics.cache_read += tokens.cache_read;
        economics.cache_write += tokens.cache_write;
        economics.fresh_input += tokens.input;

        let would_have_cost = tokens.cache_read as f64 * pricing.input / TOKENS_PER_MILLION;
        let actual_cost = tokens.cache_read as f64 * pricing.cache_read / TOKENS_PER_MILLION;
        economics.savings += would_have_cost - actual_cost;
    }
    economics
}
