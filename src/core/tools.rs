//! Tool-usage classification
//!
//! Tool names fall into one of two closed sets, or are left unclassified.

use serde::Serialize;

use crate::core::tally::Tally;

/// Tools that only inspect code or the web.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadTool {
    Read,
    Glob,
    Grep,
    WebFetch,
    WebSearch,
}

/// Tools that change files or run commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteTool {
    Write,
    Edit,
    Bash,
    NotebookEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToolClass {
    Read(ReadTool),
    Write(WriteTool),
    Unclassified,
}

impl ToolClass {
    pub(crate) fn of(name: &str) -> Self {
        match name {
            "Read" => ToolClass::Read(ReadTool::Read),
            "Glob" => ToolClass::Read(ReadTool::Glob),
            "Grep" => ToolClass::Read(ReadTool::Grep),
            "WebFetch" => ToolClass::Read(ReadTool::WebFetch),
            "WebSearch" => ToolClass::Read(ReadTool::WebSearch),
            "Write" => ToolClass::Write(WriteTool::Write),
            "Edit" => ToolClass::Write(WriteTool::Edit),
            "Bash" => ToolClass::Write(WriteTool::Bash),
            "NotebookEdit" => ToolClass::Write(WriteTool::NotebookEdit),
            _ => ToolClass::Unclassified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WorkStyle {
    Exploring,
    Building,
}

impl WorkStyle {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            WorkStyle::Exploring => "exploring",
            WorkStyle::Building => "building",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ReadWriteRatio {
    pub(crate) read: u64,
    pub(crate) write: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ToolCount {
    pub(crate) name: String,
    pub(crate) count: u64,
}

/// Invocation counts by tool name plus the read/write tally.
#[derive(Debug, Default, Clone)]
pub(crate) struct ToolUsage {
    counts: Tally,
    ratio: ReadWriteRatio,
}

impl ToolUsage {
    pub(crate) fn record(&mut self, name: &str) {
        self.counts.increment(name);
        match ToolClass::of(name) {
            ToolClass::Read(_) => self.ratio.read += 1,
            ToolClass::Write(_) => self.ratio.write += 1,
            ToolClass::Unclassified => {}
        }
    }

    pub(crate) fn merge(&mut self, other: ToolUsage) {
        self.counts.merge(other.counts);
        self.ratio.read += other.ratio.read;
        self.ratio.write += other.ratio.write;
    }

    pub(crate) fn total(&self) -> u64 {
        self.counts.total()
    }

    pub(crate) fn ratio(&self) -> ReadWriteRatio {
        self.ratio
    }

    /// Ties resolve to building.
    pub(crate) fn work_style(&self) -> WorkStyle {
        if self.ratio.read > self.ratio.write {
            WorkStyle::Exploring
        } else {
            WorkStyle::Building
        }
    }

    /// Descending by count; equal counts keep first-encounter order.
    pub(crate) fn ranked(&self) -> Vec<ToolCount> {
        self.counts
            .ranked()
            .into_iter()
            .map(|(name, count)| ToolCount {
                name: name.to_string(),
                count,
            })
            .collect()
    }
}
