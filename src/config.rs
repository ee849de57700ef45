use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::pricing::PricingEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) claude_dir: Option<PathBuf>,
    pub(crate) timezone: Option<String>,
    pub(crate) subscription_cost: Option<f64>,
    pub(crate) top: Option<usize>,
    pub(crate) color: Option<ConfigColorMode>,
    pub(crate) no_color: bool,
    pub(crate) debug: bool,
    /// Per-model price overrides; the `default` key replaces the fallback
    pub(crate) pricing: HashMap<String, PricingEntry>,
    /// File the values came from, if any
    #[serde(skip)]
    pub(crate) loaded_from: Option<PathBuf>,
    /// Unreadable or invalid files skipped while searching
    #[serde(skip)]
    pub(crate) problems: Vec<String>,
}

impl Config {
    /// First config file that exists and parses, else defaults.
    ///
    /// Runs before logging is set up, so skipped files are recorded in
    /// `problems` for the caller to report.
    pub(crate) fn load() -> Self {
        let mut problems = Vec::new();
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let parsed = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| Self::parse(&content).map_err(|e| e.to_string()));
            match parsed {
                Ok(mut config) => {
                    config.loaded_from = Some(path);
                    config.problems = problems;
                    return config;
                }
                Err(e) => problems.push(format!("{}: {e}", path.display())),
            }
        }

        Self {
            problems,
            ..Self::default()
        }
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/claude-metrics/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("claude-metrics")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("claude-metrics").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.claude-metrics.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".claude-metrics.toml"));
        }

        paths
    }
}
