use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid subscription cost: {input} (expected a non-negative number)")]
    InvalidSubscriptionCost { input: String },

    #[error("Failed to read usage snapshot {}: {source}", path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse usage snapshot {}: {source}", path.display())]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_subscription_cost() {
        let e = AppError::InvalidSubscriptionCost {
            input: "-5".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid subscription cost: -5 (expected a non-negative number)"
        );
    }

    #[test]
    fn snapshot_read_names_the_file() {
        let e = AppError::SnapshotRead {
            path: PathBuf::from("/tmp/stats-cache.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/stats-cache.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn snapshot_parse_keeps_serde_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = AppError::SnapshotParse {
            path: PathBuf::from("stats-cache.json"),
            source,
        };
        assert!(e.to_string().starts_with("Failed to parse usage snapshot stats-cache.json: "));
    }
}
