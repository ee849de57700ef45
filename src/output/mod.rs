mod activity;
mod format;
mod habits;
mod json;
mod summary;

pub(crate) use activity::{print_daily, print_heatmap, print_projects};
pub(crate) use habits::{print_insights, print_tools};
pub(crate) use json::{error_json, to_json};
pub(crate) use summary::{print_cache, print_models, print_overview};

/// Presentation settings shared by every table view
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    /// Rows shown in ranked tables
    pub(crate) top: usize,
}
