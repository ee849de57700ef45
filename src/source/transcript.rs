//! Session transcript parser
//!
//! Parses JSONL transcripts from `~/.claude/projects/<project>/*.jsonl`. Only
//! assistant `tool_use` blocks matter here; everything else is skipped.

use serde::Deserialize;
use serde::de::IgnoredAny;
use std::path::{Path, PathBuf};

use crate::consts::UNKNOWN;

use super::jsonl::read_jsonl;

// ============================================================================
// Internal types for JSONL parsing
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptLine {
    message: Option<TranscriptMessage>,
}

#[derive(Debug, Deserialize)]
struct TranscriptMessage {
    content: Option<Content>,
}

/// User turns carry plain-string content; only block arrays are inspected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Content {
    Blocks(Vec<BlockSlot>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BlockSlot {
    Known(ContentBlock),
    Unknown(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    ToolUse { name: Option<String> },
    #[serde(other)]
    Other,
}

impl TranscriptLine {
    /// Names of the tools invoked by this message, `unknown` when a block has none.
    pub(crate) fn tool_uses(&self) -> impl Iterator<Item = &str> {
        let blocks: &[BlockSlot] = match self.message.as_ref().and_then(|m| m.content.as_ref()) {
            Some(Content::Blocks(blocks)) => blocks,
            _ => &[],
        };
        blocks.iter().filter_map(|slot| match slot {
            BlockSlot::Known(ContentBlock::ToolUse { name }) => {
                Some(name.as_deref().unwrap_or(UNKNOWN))
            }
            _ => None,
        })
    }
}

// ============================================================================
// File discovery
// ============================================================================

/// Every `*.jsonl` file one level below `projects_dir`, in sorted path order.
pub(crate) fn find_transcript_files(projects_dir: &Path) -> Vec<PathBuf> {
    if !projects_dir.is_dir() {
        return Vec::new();
    }
    let base = glob::Pattern::escape(&projects_dir.to_string_lossy());
    let pattern = format!("{base}/*/*.jsonl");

    let mut files = Vec::new();
    if let Ok(entries) = glob::glob(&pattern) {
        for entry in entries.flatten() {
            if entry.is_file() {
                files.push(entry);
            }
        }
    }
    files
}

pub(crate) fn read_transcript(path: &Path) -> Vec<TranscriptLine> {
    read_jsonl(path)
}
