//! History aggregation
//!
//! Buckets prompt events by UTC date, by local hour and by local weekday×hour,
//! and counts projects, sessions and prompt lengths along the way.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, HashSet};

use crate::consts::{MILLIS_PER_DAY, UNKNOWN};
use crate::core::tally::Tally;
use crate::core::types::{DailyAggregate, EventRecord};
use crate::utils::Timezone;

pub(crate) const HOURS_PER_DAY: usize = 24;
pub(crate) const DAYS_PER_WEEK: usize = 7;

/// Everything derived from one pass over the history log.
#[derive(Debug, Default, Clone)]
pub(crate) struct HistorySummary {
    /// Sorted by date
    pub(crate) daily: Vec<DailyAggregate>,
    pub(crate) hours: [u64; HOURS_PER_DAY],
    /// Indexed `[weekday][hour]`, weekday 0 = Sunday
    pub(crate) weekday_hours: [[u64; HOURS_PER_DAY]; DAYS_PER_WEEK],
    pub(crate) projects: Tally,
    pub(crate) total_prompts: u64,
    pub(crate) total_sessions: usize,
    /// Prompt lengths in UTF-16 code units, in log order
    pub(crate) prompt_lengths: Vec<usize>,
    pub(crate) first_activity: Option<DateTime<Utc>>,
    pub(crate) last_activity: Option<DateTime<Utc>>,
}

impl HistorySummary {
    pub(crate) fn active_days(&self) -> usize {
        self.daily.len()
    }

    /// Whole days from first to last activity, counting both ends.
    pub(crate) fn day_span(&self) -> u64 {
        match (self.first_activity, self.last_activity) {
            (Some(first), Some(last)) => {
                let ms = (last - first).num_milliseconds().max(0);
                (ms as u64).div_ceil(MILLIS_PER_DAY as u64) + 1
            }
            _ => 0,
        }
    }

    /// Hour of day with the most prompts; earliest hour wins ties.
    pub(crate) fn peak_hour(&self) -> Option<usize> {
        let mut peak: Option<(usize, u64)> = None;
        for (hour, &count) in self.hours.iter().enumerate() {
            if count > peak.map_or(0, |(_, best)| best) {
                peak = Some((hour, count));
            }
        }
        peak.map(|(hour, _)| hour)
    }

    /// Largest weekday×hour cell.
    pub(crate) fn busiest_cell(&self) -> u64 {
        self.weekday_hours
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Final path segment of the logged project, or `unknown`.
pub(crate) fn project_label(project: Option<&str>) -> &str {
    project
        .and_then(|p| p.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN)
}

/// Aggregate history records; dates are UTC, hour buckets use `timezone`.
pub(crate) fn aggregate_history(records: &[EventRecord], timezone: Timezone) -> HistorySummary {
    let mut summary = HistorySummary::default();
    let mut days: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();
    let mut sessions: HashSet<&str> = HashSet::new();

    for record in records {
        let date = record.timestamp.date_naive();
        let day = days
            .entry(date)
            .or_insert_with(|| DailyAggregate::new(date));
        day.prompts += 1;
        if let Some(session_id) = record.session_id.as_deref() {
            day.session_ids.insert(session_id.to_string());
            sessions.insert(session_id);
        }

        let (weekday, hour) = timezone.week_slot(record.timestamp);
        summary.hours[hour] += 1;
        summary.weekday_hours[weekday][hour] += 1;

        summary
            .projects
            .increment(project_label(record.project.as_deref()));

        if let Some(text) = record.display_text.as_deref() {
            summary.prompt_lengths.push(text.encode_utf16().count());
        }

        summary.first_activity = Some(match summary.first_activity {
            Some(first) => first.min(record.timestamp),
            None => record.timestamp,
        });
        summary.last_activity = Some(match summary.last_activity {
            Some(last) => last.max(record.timestamp),
            None => record.timestamp,
        });
        summary.total_prompts += 1;
    }

    summary.total_sessions = sessions.len();
    summary.daily = days.into_values().collect();
    summary
}
