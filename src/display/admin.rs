//! Admin dashboard formatting

use crate::services::admin::{AdminStats, RankedEntry};

const BAR_WIDTH: usize = 20;

pub fn format_admin_stats(stats: &AdminStats) -> String {
    let mut output = String::new();

    output.push_str("Admin Dashboard\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Total users:   {}\n", stats.total_users));
    output.push_str(&format!("Total trips:   {}\n", stats.total_trips));
    output.push_str(&format!("Active trips:  {}\n", stats.active_trips));

    output.push_str("\nPopular cities\n");
    output.push_str(&format_ranking(&stats.popular_cities));

    output.push_str("\nPopular activities\n");
    output.push_str(&format_ranking(&stats.popular_activities));

    output.push_str("\nNew users by month\n");
    if stats.user_trends.is_empty() {
        output.push_str("  (none)\n");
    }
    let peak = stats.user_trends.iter().map(|t| t.users).max().unwrap_or(0);
    for trend in &stats.user_trends {
        output.push_str(&format!(
            "  {}  {:<width$}  {}\n",
            trend.month,
            bar(trend.users, peak),
            trend.users,
            width = BAR_WIDTH
        ));
    }

    output
}

fn format_ranking(entries: &[RankedEntry]) -> String {
    if entries.is_empty() {
        return "  (none)\n".to_string();
    }

    let label_width = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "  {}. {:<width$}  {}\n",
                i + 1,
                entry.label,
                entry.count,
                width = label_width
            )
        })
        .collect()
}

fn bar(value: usize, peak: usize) -> String {
    if peak == 0 {
        return String::new();
    }
    "#".repeat((value * BAR_WIDTH).div_ceil(peak))
}
