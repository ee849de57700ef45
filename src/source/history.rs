//! Prompt history parser
//!
//! Parses `~/.claude/history.jsonl`, one line per submitted prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

use crate::core::EventRecord;

use super::jsonl::read_jsonl;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryLine {
    timestamp: Option<RawTimestamp>,
    #[serde(default, deserialize_with = "lenient_text")]
    session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    project: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    display: Option<String>,
}

/// Only the timestamp decides whether a line is an event. Other fields keep
/// strings and numbers and drop anything else instead of failing the line.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Claude Code writes epoch milliseconds; older exports carry RFC 3339 strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Fractional(f64),
    Text(String),
}

impl RawTimestamp {
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            RawTimestamp::Millis(0) => None,
            RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            RawTimestamp::Fractional(ms) if ms.is_finite() && *ms != 0.0 => {
                DateTime::from_timestamp_millis(ms.trunc() as i64)
            }
            RawTimestamp::Fractional(_) => None,
            RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl HistoryLine {
    /// Shape check: a line without a usable timestamp is not an event.
    fn into_record(self) -> Option<EventRecord> {
        let timestamp = self.timestamp.as_ref()?.to_utc()?;
        Some(EventRecord {
            timestamp,
            session_id: non_empty(self.session_id),
            project: self.project,
            display_text: non_empty(self.display),
        })
    }
}

/// Load every valid event record from the history log, in file order.
pub(crate) fn read_history(path: &Path) -> Vec<EventRecord> {
    let lines: Vec<HistoryLine> = read_jsonl(path);
    let total = lines.len();
    let records: Vec<EventRecord> = lines
        .into_iter()
        .filter_map(HistoryLine::into_record)
        .collect();
    if records.len() < total {
        tracing::debug!(
            path = %path.display(),
            rejected = total - records.len(),
            "history lines without a usable timestamp"
        );
    }
    records
}
