//! History-backed views: daily activity, heatmap and projects

use comfy_table::{Cell, Color, Table};

use crate::core::DailyActivity;
use crate::engine::{HeatmapReport, ProjectCount};
use crate::output::TableOptions;
use crate::output::format::{
    create_styled_table, format_number, header_cell, right_cell, styled_cell,
};

fn daily_table(days: &[DailyActivity], options: TableOptions) -> Table {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Prompts", use_color),
        header_cell("Sessions", use_color),
    ]);

    let mut total_prompts = 0;
    for day in days {
        total_prompts += day.prompts;
        table.add_row(vec![
            Cell::new(day.date.to_string()),
            right_cell(&format_number(day.prompts), None, false),
            right_cell(&format_number(day.session_count as u64), None, false),
        ]);
    }

    let total_color = use_color.then_some(Color::Yellow);
    table.add_row(vec![
        styled_cell("Total", total_color, true),
        right_cell(&format_number(total_prompts), total_color, true),
        Cell::new(""),
    ]);
    table
}

pub(crate) fn print_daily(days: &[DailyActivity], options: TableOptions) {
    if days.is_empty() {
        println!("No prompt history found.");
        return;
    }
    println!("{}", daily_table(days, options));
}

/// Shade by quarter of the busiest cell.
fn heat_color(count: u64, max: u64) -> Option<Color> {
    if count == 0 {
        return None;
    }
    Some(match count * 4 / max.max(1) {
        0 => Color::DarkGreen,
        1 => Color::Green,
        2 => Color::Yellow,
        _ => Color::Red,
    })
}

fn heatmap_table(report: &HeatmapReport, options: TableOptions) -> Table {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    let mut header = vec![header_cell("Day", use_color)];
    header.extend((0..24).map(|hour| header_cell(&format!("{hour:02}"), use_color)));
    table.set_header(header);

    for row in &report.heatmap {
        let mut cells = vec![Cell::new(row.day)];
        cells.extend(row.hours.iter().map(|cell| {
            let text = if cell.count == 0 {
                "·".to_string()
            } else {
                cell.count.to_string()
            };
            let color = if use_color {
                heat_color(cell.count, report.max_count)
            } else {
                None
            };
            right_cell(&text, color, false)
        }));
        table.add_row(cells);
    }
    table
}

pub(crate) fn print_heatmap(report: &HeatmapReport, options: TableOptions) {
    println!("{}", heatmap_table(report, options));
}

fn projects_table(projects: &[ProjectCount], options: TableOptions) -> Table {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Project", use_color),
        header_cell("Prompts", use_color),
    ]);
    for project in projects {
        table.add_row(vec![
            Cell::new(&project.name),
            right_cell(&format_number(project.prompts), None, false),
        ]);
    }
    table
}

pub(crate) fn print_projects(projects: &[ProjectCount], options: TableOptions) {
    if projects.is_empty() {
        println!("No project activity found.");
        return;
    }
    println!("{}", projects_table(projects, options));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{HeatmapRow, HourCell};
    use chrono::NaiveDate;

    fn options() -> TableOptions {
        TableOptions {
            use_color: false,
            top: 6,
        }
    }

    #[test]
    fn daily_has_total_row() {
        let days = vec![
            DailyActivity {
                date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                prompts: 1_200,
                session_count: 2,
            },
            DailyActivity {
                date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
                prompts: 34,
                session_count: 1,
            },
        ];
        let rendered = daily_table(&days, options()).to_string();
        assert!(rendered.contains("2026-01-01"));
        assert!(rendered.contains("1,234"));
    }

    #[test]
    fn heatmap_marks_empty_cells() {
        let report = HeatmapReport {
            heatmap: vec![HeatmapRow {
                day: "Sun",
                day_index: 0,
                hours: (0..24).map(|hour| HourCell { hour, count: u64::from(hour == 9) * 7 }).collect(),
            }],
            max_count: 7,
        };
        let rendered = heatmap_table(&report, options()).to_string();
        assert!(rendered.contains("Sun"));
        assert!(rendered.contains('7'));
        assert!(rendered.contains('·'));
    }

    #[test]
    fn heat_levels() {
        assert_eq!(heat_color(0, 8), None);
        assert_eq!(heat_color(1, 8), Some(Color::DarkGreen));
        assert_eq!(heat_color(8, 8), Some(Color::Red));
    }

    #[test]
    fn project_rows() {
        let projects = vec![ProjectCount {
            name: "api".to_string(),
            prompts: 3,
        }];
        let rendered = projects_table(&projects, options()).to_string();
        assert!(rendered.contains("api"));
    }
}
