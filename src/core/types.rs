//! Core data types shared by the aggregators
//!
//! Everything here is built fresh for one query and dropped afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// One prompt from the history log, already shape-checked by the parser.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EventRecord {
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) session_id: Option<String>,
    /// Absolute project path as logged
    pub(crate) project: Option<String>,
    pub(crate) display_text: Option<String>,
}

/// Token counters by billing category
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TokenCounts {
    pub(crate) input: u64,
    pub(crate) output: u64,
    pub(crate) cache_read: u64,
    pub(crate) cache_write: u64,
}

impl TokenCounts {
    pub(crate) fn add(&mut self, other: &TokenCounts) {
        self.input += other.input;
        self.output += other.output;
        self.cache_read += other.cache_read;
        self.cache_write += other.cache_write;
    }
}

/// Per-calendar-date rollup (UTC dates).
#[derive(Debug, Clone)]
pub(crate) struct DailyAggregate {
    pub(crate) date: NaiveDate,
    pub(crate) prompts: u64,
    pub(crate) session_ids: HashSet<String>,
}

impl DailyAggregate {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self {
            date,
            prompts: 0,
            session_ids: HashSet::new(),
        }
    }

    pub(crate) fn session_count(&self) -> usize {
        self.session_ids.len()
    }
}

/// Wire form of a [`DailyAggregate`]: the session set collapses to its size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DailyActivity {
    pub(crate) date: NaiveDate,
    pub(crate) prompts: u64,
    pub(crate) session_count: usize,
}

impl From<&DailyAggregate> for DailyActivity {
    fn from(day: &DailyAggregate) -> Self {
        Self {
            date: day.date,
            prompts: day.prompts,
            session_count: day.session_count(),
        }
    }
}
