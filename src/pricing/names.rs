//! Display names for model ids

const FAMILIES: [&str; 3] = ["opus", "sonnet", "haiku"];

/// Normalize model name by removing prefixes and date suffixes
pub(crate) fn normalize_model_name(model: &str) -> &str {
    let name = model.strip_prefix("anthropic.").unwrap_or(model);
    let name = name.strip_prefix("claude-").unwrap_or(name);

    // Remove date suffix like -20251101
    if let Some(pos) = name.rfind('-') {
        let suffix = &name[pos + 1..];
        if suffix.len() == 8 && suffix.chars().all(|c| c.is_ascii_digit()) {
            return &name[..pos];
        }
    }
    name
}

/// Family and version for display: `claude-opus-4-5-20251101` -> `Opus 4.5`.
///
/// Handles both `family-major-minor` and the older `major-minor-family` layout.
/// Ids without a known family fall back to the normalized id.
pub(crate) fn model_display_name(model: &str) -> String {
    let normalized = normalize_model_name(model);
    let parts: Vec<&str> = normalized.split('-').collect();

    let Some(family_pos) = parts.iter().position(|p| FAMILIES.contains(p)) else {
        return normalized.to_string();
    };

    let is_version = |p: &&str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    let after: Vec<&str> = parts[family_pos + 1..]
        .iter()
        .copied()
        .take_while(is_version)
        .collect();
    let version = if after.is_empty() {
        parts[..family_pos]
            .iter()
            .copied()
            .filter(is_version)
            .collect::<Vec<_>>()
    } else {
        after
    };

    let family = parts[family_pos];
    let mut label = String::with_capacity(family.len() + 4);
    let mut chars = family.chars();
    if let Some(first) = chars.next() {
        label.push(first.to_ascii_uppercase());
        label.push_str(chars.as_str());
    }
    if !version.is_empty() {
        label.push(' ');
        label.push_str(&version.join("."));
    }
    label
}
