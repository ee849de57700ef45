//! Human-facing approximations derived from token totals and prompt samples.
//!
//! The constants are fixed heuristics (0.75 words per token, 500 words per page,
//! 80k words per book, 40 words typed per minute) and must not drift.

use serde::Serialize;

use crate::core::history::HistorySummary;
use crate::utils::round_fixed;

const WORDS_PER_TOKEN: f64 = 0.75;
const WORDS_PER_PAGE: f64 = 500.0;
const WORDS_PER_BOOK: f64 = 80_000.0;
const WORDS_TYPED_PER_MINUTE: f64 = 40.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FunStats {
    pub(crate) words_written: u64,
    pub(crate) pages_written: u64,
    pub(crate) books_equivalent: f64,
    pub(crate) hours_saved: f64,
    pub(crate) minutes_saved: u64,
}

impl FunStats {
    pub(crate) fn from_output_tokens(output_tokens: u64) -> Self {
        let words_written = (output_tokens as f64 * WORDS_PER_TOKEN).round() as u64;
        let words = words_written as f64;
        let minutes_saved = (words / WORDS_TYPED_PER_MINUTE).round() as u64;
        Self {
            words_written,
            pages_written: (words / WORDS_PER_PAGE).round() as u64,
            books_equivalent: round_fixed(words / WORDS_PER_BOOK, 1),
            hours_saved: round_fixed(minutes_saved as f64 / 60.0, 1),
            minutes_saved,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptStats {
    pub(crate) total: u64,
    pub(crate) avg_length: u64,
    pub(crate) max_length: usize,
}

impl PromptStats {
    pub(crate) fn new(total_prompts: u64, lengths: &[usize]) -> Self {
        let avg_length = if lengths.is_empty() {
            0
        } else {
            let sum: usize = lengths.iter().sum();
            (sum as f64 / lengths.len() as f64).round() as u64
        };
        Self {
            total: total_prompts,
            avg_length,
            max_length: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Productivity {
    pub(crate) avg_prompts_per_day: u64,
    pub(crate) avg_prompts_per_session: u64,
    pub(crate) active_days: usize,
    pub(crate) total_days_span: u64,
    /// Busiest hour of day in the display timezone
    pub(crate) peak_hour: Option<usize>,
}

fn rounded_ratio(numerator: u64, denominator: usize) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u64
}

impl Productivity {
    pub(crate) fn from_history(summary: &HistorySummary) -> Self {
        Self {
            avg_prompts_per_day: rounded_ratio(summary.total_prompts, summary.active_days()),
            avg_prompts_per_session: rounded_ratio(summary.total_prompts, summary.total_sessions),
            active_days: summary.active_days(),
            total_days_span: summary.day_span(),
            peak_hour: summary.peak_hour(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::core::history::aggregate_history;
    use crate::core::types::EventRecord;
    use crate::utils::Timezone;

    #[test]
    fn eighty_thousand_output_tokens() {
        let stats = FunStats::from_output_tokens(80_000);
        assert_eq!(stats.words_written, 60_000);
        assert_eq!(stats.pages_written, 120);
        assert_eq!(stats.books_equivalent, 0.8);
        assert_eq!(stats.minutes_saved, 1_500);
        assert_eq!(stats.hours_saved, 25.0);
    }

    #[test]
    fn zero_tokens_is_all_zero() {
        assert_eq!(
            FunStats::from_output_tokens(0),
            FunStats {
                words_written: 0,
                pages_written: 0,
                books_equivalent: 0.0,
                hours_saved: 0.0,
                minutes_saved: 0,
            }
        );
    }

    #[test]
    fn rounding_follows_half_up() {
        // 3 tokens -> 2.25 words -> 2; 2 tokens -> 1.5 words -> 2
        assert_eq!(FunStats::from_output_tokens(3).words_written, 2);
        assert_eq!(FunStats::from_output_tokens(2).words_written, 2);
    }

    #[test]
    fn prompt_stats() {
        let stats = PromptStats::new(4, &[10, 11, 30]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.avg_length, 17);
        assert_eq!(stats.max_length, 30);

        let empty = PromptStats::new(0, &[]);
        assert_eq!(empty.avg_length, 0);
        assert_eq!(empty.max_length, 0);
    }

    #[test]
    fn productivity_guards_empty_denominators() {
        let empty = Productivity::from_history(&HistorySummary::default());
        assert_eq!(empty, Productivity::default());

        let records: Vec<EventRecord> = ["2026-01-01T10:00:00Z", "2026-01-01T11:00:00Z", "2026-01-04T10:00:00Z"]
            .iter()
            .map(|ts| EventRecord {
                timestamp: ts.parse().unwrap(),
                session_id: None,
                project: None,
                display_text: None,
            })
            .collect();
        let summary = aggregate_history(&records, Timezone::Named(chrono_tz::UTC));
        let p = Productivity::from_history(&summary);
        assert_eq!(p.avg_prompts_per_day, 2);
        assert_eq!(p.avg_prompts_per_session, 0);
        assert_eq!(p.active_days, 2);
        assert_eq!(p.total_days_span, 4);
        assert_eq!(p.peak_hour, Some(10));
    }
}
