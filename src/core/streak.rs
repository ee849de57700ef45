//! Consecutive-day streaks over the sparse daily series

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::types::{DailyActivity, DailyAggregate};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StreakResult {
    pub(crate) current: u32,
    pub(crate) longest: u32,
    pub(crate) best_day: Option<DailyActivity>,
}

fn is_next_day(prev: NaiveDate, curr: NaiveDate) -> bool {
    (curr - prev).num_days() == 1
}

/// Compute streaks relative to `today` (a UTC calendar date).
///
/// The current streak only counts when the latest active date is today or
/// yesterday. The best day is the first day holding the maximum prompt count.
pub(crate) fn calculate_streaks(daily: &[DailyAggregate], today: NaiveDate) -> StreakResult {
    if daily.is_empty() {
        return StreakResult::default();
    }

    let mut dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
    dates.sort();

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if is_next_day(pair[0], pair[1]) {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run);

    let mut current = 0u32;
    if let Some(&last) = dates.last()
        && (today - last).num_days() <= 1
    {
        current = 1;
        for pair in dates.windows(2).rev() {
            if is_next_day(pair[0], pair[1]) {
                current += 1;
            } else {
                break;
            }
        }
    }

    // Strict comparison: on equal counts the earlier day stays best.
    let mut best_day: Option<&DailyAggregate> = None;
    for day in daily {
        let best_prompts = best_day.map_or(0, |b| b.prompts);
        if day.prompts > best_prompts {
            best_day = Some(day);
        }
    }

    StreakResult {
        current,
        longest,
        best_day: best_day.map(DailyActivity::from),
    }
}
