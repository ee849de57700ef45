//! Line-tolerant JSONL reader shared by every log source.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every line of `path` that deserializes into `T`, in file order.
///
/// A missing or unreadable file yields an empty vector. Blank lines and lines
/// that fail to deserialize are dropped one at a time.
pub(crate) fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "source not readable, treating as empty");
            return Vec::new();
        }
    };
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (line_no, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(path = %path.display(), line = line_no + 1, %err, "unreadable line");
                dropped += 1;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::debug!(path = %path.display(), line = line_no + 1, %err, "dropping malformed line");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        tracing::info!(path = %path.display(), dropped, kept = records.len(), "skipped malformed lines");
    }
    records
}
