//! Snapshot-backed views: overview, cache and models

use comfy_table::{Cell, Color, Table};

use crate::engine::{CacheReport, ModelReport, OverviewReport};
use crate::output::TableOptions;
use crate::output::format::{
    create_styled_table, format_compact, format_cost, format_number, format_percent,
    header_cell, key_value_table, right_cell, styled_cell,
};

fn overview_table(report: &OverviewReport, options: TableOptions) -> Table {
    let dash = || "-".to_string();
    let rows = [
        ("Sessions", format_number(report.total_sessions as u64)),
        (
            "Messages",
            report.total_messages.map(format_number).unwrap_or_else(dash),
        ),
        ("Prompts", format_number(report.total_prompts)),
        ("Active days", format_number(report.active_days as u64)),
        ("First session", report.first_session.clone().unwrap_or_else(dash)),
        ("Last session", report.last_session.clone().unwrap_or_else(dash)),
        ("Input tokens", format_compact(report.total_input)),
        ("Output tokens", format_compact(report.total_output)),
        ("Cache read", format_compact(report.total_cache_read)),
        ("Cache write", format_compact(report.total_cache_write)),
        ("API cost", format_cost(report.total_cost)),
        ("Subscription", format_cost(report.pro_subscription)),
        ("Savings", format_cost(report.savings)),
        ("ROI", format!("{}%", report.roi)),
    ];
    key_value_table(&rows, options.use_color)
}

pub(crate) fn print_overview(report: &OverviewReport, options: TableOptions) {
    println!("{}", overview_table(report, options));
    if !report.model_costs.is_empty() {
        let cost_color = options.use_color.then_some(Color::Green);
        let mut table = create_styled_table();
        table.set_header(vec![
            header_cell("Model", options.use_color),
            header_cell("Cost", options.use_color),
        ]);
        for (model, cost) in &report.model_costs {
            table.add_row(vec![
                Cell::new(model),
                right_cell(&format_cost(*cost), cost_color, false),
            ]);
        }
        println!("\n{table}");
    }
}

fn cache_table(report: &CacheReport, options: TableOptions) -> Table {
    let rows = [
        ("Cache read", format_number(report.cache_read)),
        ("Cache write", format_number(report.cache_write)),
        ("Hit rate", format_percent(report.hit_rate)),
        ("Savings", format_cost(report.savings)),
        ("Fresh input", format_number(report.efficiency.fresh_tokens)),
        (
            "Cached per fresh token",
            format!("{:.1}x", report.efficiency.ratio),
        ),
    ];
    key_value_table(&rows, options.use_color)
}

pub(crate) fn print_cache(report: &CacheReport, options: TableOptions) {
    println!("{}", cache_table(report, options));
}

fn models_table(models: &[ModelReport], options: TableOptions) -> Table {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", use_color),
        header_cell("Output", use_color),
        header_cell("Share", use_color),
        header_cell("Input", use_color),
        header_cell("Cache Read", use_color),
        header_cell("Cache Write", use_color),
        header_cell("Cost", use_color),
    ]);

    let name_color = use_color.then_some(Color::Yellow);
    let cost_color = use_color.then_some(Color::Green);
    for model in models {
        table.add_row(vec![
            styled_cell(&model.name, name_color, false),
            right_cell(&format_compact(model.output_tokens), None, false),
            right_cell(&format_percent(model.percentage), None, false),
            right_cell(&format_compact(model.input_tokens), None, false),
            right_cell(&format_compact(model.cache_read), None, false),
            right_cell(&format_compact(model.cache_write), None, false),
            right_cell(&format_cost(model.cost), cost_color, false),
        ]);
    }
    table
}

pub(crate) fn print_models(models: &[ModelReport], options: TableOptions) {
    if models.is_empty() {
        println!("No model usage recorded.");
        return;
    }
    println!("{}", models_table(models, options));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CacheEfficiency;
    use indexmap::IndexMap;

    fn options() -> TableOptions {
        TableOptions {
            use_color: false,
            top: 6,
        }
    }

    #[test]
    fn overview_rows() {
        let report = OverviewReport {
            total_sessions: 3,
            total_messages: None,
            total_prompts: 1_234,
            total_input: 2_000_000,
            total_output: 80_000,
            total_cache_read: 0,
            total_cache_write: 0,
            total_cost: 26.55,
            pro_subscription: 100.0,
            savings: 0.0,
            roi: 27,
            model_costs: IndexMap::new(),
            model_usage: IndexMap::new(),
            first_session: None,
            last_session: None,
            longest_session: None,
            active_days: 2,
        };
        let rendered = overview_table(&report, options()).to_string();
        assert!(rendered.contains("1,234"));
        assert!(rendered.contains("2.0M"));
        assert!(rendered.contains("$26.55"));
        assert!(rendered.contains("27%"));
    }

    #[test]
    fn cache_rows() {
        let report = CacheReport {
            cache_read: 4_000_000,
            cache_write: 1_000_000,
            hit_rate: 80,
            savings: 21.6,
            efficiency: CacheEfficiency {
                fresh_tokens: 2_000_000,
                cached_tokens: 4_000_000,
                ratio: 2.0,
            },
        };
        let rendered = cache_table(&report, options()).to_string();
        assert!(rendered.contains("80%"));
        assert!(rendered.contains("$21.60"));
        assert!(rendered.contains("2.0x"));
    }

    #[test]
    fn model_rows() {
        let models = vec![ModelReport {
            name: "Opus 4.5".to_string(),
            full_name: "claude-opus-4-5-20251101".to_string(),
            output_tokens: 20_000,
            percentage: 25,
            cost: 18.0,
            input_tokens: 1_000_000,
            cache_read: 0,
            cache_write: 0,
        }];
        let rendered = models_table(&models, options()).to_string();
        assert!(rendered.contains("Opus 4.5"));
        assert!(rendered.contains("25%"));
        assert!(rendered.contains("$18.00"));
    }
}
