//! Calendar display formatting
//!
//! Renders a month page as a seven-column text grid. Each cell shows the day
//! number, up to the configured number of trip names, and a "+N more" marker
//! when the day holds more trips than fit.

use chrono::NaiveDate;

use crate::services::calendar::{DayCell, MonthView};

const CELL_WIDTH: usize = 16;
const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Render `view`, flagging `today` with an asterisk when it is on the page
pub fn format_month_view(view: &MonthView<'_>, today: Option<NaiveDate>) -> String {
    let mut output = String::new();

    let title = view.month.to_string();
    let total_width = CELL_WIDTH * 7;
    output.push_str(&format!("{:^width$}\n", title, width = total_width));
    output.push_str(&format!("{:^width$}\n\n", "< prev      next >", width = total_width));

    let header: String = (0..7)
        .map(|i| {
            let name = WEEKDAYS[(view.first_day_of_week as usize + i) % 7];
            format!("{:<width$}", name, width = CELL_WIDTH)
        })
        .collect();
    output.push_str(header.trim_end());
    output.push('\n');
    output.push_str(&"-".repeat(total_width));
    output.push('\n');

    for week in view.cells.chunks(7) {
        let trip_lines = week
            .iter()
            .map(|cell| cell.visible_trips(view.inline_cap).len())
            .max()
            .unwrap_or(0);
        let has_overflow = week.iter().any(|cell| cell.overflow_count(view.inline_cap) > 0);
        let line_count = 1 + trip_lines + usize::from(has_overflow);

        for line in 0..line_count {
            let row: String = week
                .iter()
                .map(|cell| {
                    let text = cell_line(cell, line, trip_lines, view.inline_cap, today);
                    format!("{:<width$}", truncate(&text, CELL_WIDTH - 1), width = CELL_WIDTH)
                })
                .collect();
            output.push_str(row.trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    if view.legend.is_empty() {
        output.push_str("No trips this month.\n");
    } else {
        output.push_str("Trips this month:\n");
        for trip in &view.legend {
            output.push_str(&format!(
                "  {} ({} - {})\n",
                trip.name, trip.start_date, trip.end_date
            ));
        }
    }

    output
}

fn cell_line(cell: &DayCell<'_>, line: usize, trip_lines: usize, cap: usize, today: Option<NaiveDate>) -> String {
    let DayCell::Day { day, date, .. } = cell else {
        return String::new();
    };

    if line == 0 {
        let marker = if today.is_some() && *date == today { "*" } else { "" };
        return format!("{}{}", day, marker);
    }

    let visible = cell.visible_trips(cap);
    if line <= trip_lines {
        return visible
            .get(line - 1)
            .map(|trip| trip.name.clone())
            .unwrap_or_default();
    }

    match cell.overflow_count(cap) {
        0 => String::new(),
        hidden => format!("+{} more", hidden),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('~');
    short
}
