//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_TOP_TOOLS;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum LogLevel {
    Error,
    /// Default
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser)]
#[command(name = "claude-metrics")]
#[command(about = "Usage, cost and habit metrics from local Claude Code data", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Claude data directory (default: ~/.claude)
    #[arg(long, global = true, value_name = "DIR", env = "CLAUDE_METRICS_DIR")]
    pub(crate) claude_dir: Option<PathBuf>,

    /// Timezone for hour and weekday buckets (e.g., "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Monthly subscription price in USD used as the savings baseline
    #[arg(long, global = true, value_name = "USD", allow_negative_numbers = true)]
    pub(crate) subscription_cost: Option<f64>,

    /// Rows shown in the tools table
    #[arg(long, global = true, value_name = "N")]
    pub(crate) top: Option<usize>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (shorthand for --log-level=debug)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Log verbosity on stderr; RUST_LOG takes precedence
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub(crate) log_level: LogLevel,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.claude_dir.is_none() {
            self.claude_dir = config.claude_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.subscription_cost.is_none() {
            self.subscription_cost = config.subscription_cost;
        }
        if self.top.is_none() {
            self.top = config.top;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn top(&self) -> usize {
        self.top.unwrap_or(DEFAULT_TOP_TOOLS)
    }

    pub(crate) fn effective_log_level(&self) -> LogLevel {
        if self.debug && !matches!(self.log_level, LogLevel::Trace) {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}
