use serde::Serialize;

/// Pretty JSON for a report; serialization failures become the error document.
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| error_json(&e.to_string()))
}

/// The uniform failure shape: `{"error": "<message>"}`.
pub(crate) fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
