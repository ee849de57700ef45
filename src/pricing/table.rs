use serde::Deserialize;
use std::collections::HashMap;

/// USD per 1,000,000 tokens for each billing category
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub(crate) struct PricingEntry {
    pub(crate) input: f64,
    pub(crate) output: f64,
    pub(crate) cache_read: f64,
    pub(crate) cache_write: f64,
}

const SONNET_4_5: PricingEntry = PricingEntry {
    input: 3.0,
    output: 15.0,
    cache_read: 0.30,
    cache_write: 3.75,
};

const OPUS_4_5: PricingEntry = PricingEntry {
    input: 15.0,
    output: 75.0,
    cache_read: 1.50,
    cache_write: 18.75,
};

/// Key under which the fallback entry can be overridden from config
pub(crate) const DEFAULT_KEY: &str = "default";

/// Static pricing keyed by exact model id, with a fallback entry.
#[derive(Debug, Clone)]
pub(crate) struct PricingTable {
    entries: HashMap<String, PricingEntry>,
    default: PricingEntry,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PricingTable {
    pub(crate) fn builtin() -> Self {
        let entries = HashMap::from([
            ("claude-sonnet-4-5-20250929".to_string(), SONNET_4_5),
            ("claude-opus-4-5-20251101".to_string(), OPUS_4_5),
        ]);
        Self {
            entries,
            default: SONNET_4_5,
        }
    }

    /// Add or replace entries; the `default` key replaces the fallback.
    pub(crate) fn with_overrides(mut self, overrides: &HashMap<String, PricingEntry>) -> Self {
        for (model, entry) in overrides {
            if model == DEFAULT_KEY {
                self.default = *entry;
            } else {
                self.entries.insert(model.clone(), *entry);
            }
        }
        self
    }

    /// Exact id match, otherwise the default entry. Never fails.
    pub(crate) fn lookup(&self, model: &str) -> &PricingEntry {
        self.entries.get(model).unwrap_or(&self.default)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
