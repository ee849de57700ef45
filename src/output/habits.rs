//! Insights and tool-usage views

use comfy_table::{Cell, Color, Table};

use crate::engine::{InsightsReport, ToolsReport};
use crate::output::TableOptions;
use crate::output::format::{
    create_styled_table, format_number, header_cell, key_value_table, right_cell, styled_cell,
};

fn insights_table(report: &InsightsReport, options: TableOptions) -> Table {
    let streaks = &report.streaks;
    let best_day = streaks.best_day.as_ref().map_or_else(
        || "-".to_string(),
        |day| format!("{} ({} prompts)", day.date, format_number(day.prompts)),
    );
    let productivity = &report.productivity;
    let fun = &report.fun_stats;

    let rows = [
        ("Current streak", format!("{} days", streaks.current)),
        ("Longest streak", format!("{} days", streaks.longest)),
        ("Best day", best_day),
        ("Active days", format_number(productivity.active_days as u64)),
        ("Days since first use", format_number(productivity.total_days_span)),
        (
            "Busiest hour",
            productivity
                .peak_hour
                .map_or_else(|| "-".to_string(), |hour| format!("{hour:02}:00")),
        ),
        ("Prompts per day", format_number(productivity.avg_prompts_per_day)),
        ("Prompts per session", format_number(productivity.avg_prompts_per_session)),
        ("Prompts", format_number(report.prompts.total)),
        ("Avg prompt length", format_number(report.prompts.avg_length)),
        ("Longest prompt", format_number(report.prompts.max_length as u64)),
        ("Words written", format_number(fun.words_written)),
        ("Pages written", format_number(fun.pages_written)),
        ("Books equivalent", format!("{:.1}", fun.books_equivalent)),
        ("Hours of typing saved", format!("{:.1}", fun.hours_saved)),
    ];
    key_value_table(&rows, options.use_color)
}

pub(crate) fn print_insights(report: &InsightsReport, options: TableOptions) {
    println!("{}", insights_table(report, options));
}

fn tools_table(report: &ToolsReport, options: TableOptions) -> Table {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Tool", use_color),
        header_cell("Calls", use_color),
    ]);
    for tool in report.tools.iter().take(options.top) {
        table.add_row(vec![
            Cell::new(&tool.name),
            right_cell(&format_number(tool.count), None, false),
        ]);
    }
    table
}

fn work_style_line(report: &ToolsReport, use_color: bool) -> Table {
    let ratio = report.read_write_ratio;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Read", use_color),
        header_cell("Write", use_color),
        header_cell("Style", use_color),
    ]);
    table.add_row(vec![
        right_cell(&format_number(ratio.read), None, false),
        right_cell(&format_number(ratio.write), None, false),
        styled_cell(
            report.exploring_vs_building.as_str(),
            use_color.then_some(Color::Magenta),
            true,
        ),
    ]);
    table
}

pub(crate) fn print_tools(report: &ToolsReport, options: TableOptions) {
    if report.tools.is_empty() {
        println!("No tool usage found.");
        return;
    }
    println!("{}", tools_table(report, options));
    println!("\n{}", work_style_line(report, options.use_color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ReadWriteRatio, ToolCount, WorkStyle};

    #[test]
    fn tools_table_honours_top() {
        let report = ToolsReport {
            tools: ["Read", "Bash", "Grep"]
                .iter()
                .map(|name| ToolCount {
                    name: (*name).to_string(),
                    count: 1,
                })
                .collect(),
            read_write_ratio: ReadWriteRatio { read: 2, write: 1 },
            exploring_vs_building: WorkStyle::Exploring,
        };
        let options = TableOptions {
            use_color: false,
            top: 2,
        };
        let rendered = tools_table(&report, options).to_string();
        assert!(rendered.contains("Read"));
        assert!(rendered.contains("Bash"));
        assert!(!rendered.contains("Grep"));

        let style = work_style_line(&report, false).to_string();
        assert!(style.contains("exploring"));
    }

    #[test]
    fn insights_without_activity() {
        let report = InsightsReport {
            streaks: Default::default(),
            productivity: Default::default(),
            prompts: Default::default(),
            fun_stats: Default::default(),
        };
        let options = TableOptions {
            use_color: false,
            top: 6,
        };
        let rendered = insights_table(&report, options).to_string();
        assert!(rendered.contains("Best day"));
        assert!(rendered.contains("0 days"));
    }
}
