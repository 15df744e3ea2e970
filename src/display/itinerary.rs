//! Itinerary display formatting

use crate::models::{DayPlan, Section, Trip};
use crate::services::itinerary::{summarize, trip_total};

/// Format a trip's day plans with per-day subtotals and the trip total
pub fn format_itinerary(trip: &Trip, days: &[DayPlan], currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Itinerary for {}\n", trip.name));
    output.push_str(&format!(
        "{} - {}    Total: {}\n",
        trip.start_date,
        trip.end_date,
        trip_total(days).format_with_symbol(currency)
    ));

    if let Some(budget) = trip.total_budget {
        output.push_str(&format!("Budget: {}\n", budget.format_with_symbol(currency)));
    }

    if days.is_empty() {
        output.push_str("\nNo days planned yet.\n");
        return output;
    }

    let activity_width = days
        .iter()
        .flat_map(|d| &d.items)
        .map(|i| i.activity.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    for (plan, summary) in days.iter().zip(summarize(days)) {
        output.push('\n');
        output.push_str(&format!(
            "Day {}  ({} activities, {})\n",
            summary.day,
            summary.activities,
            summary.total.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "  {:<width$}  {:>10}\n",
            "Activity",
            "Expense",
            width = activity_width
        ));
        output.push_str(&format!("  {:-<width$}  {:->10}\n", "", "", width = activity_width));
        for item in &plan.items {
            output.push_str(&format!(
                "  {:<width$}  {:>10}\n",
                item.activity,
                item.expense.format_with_symbol(currency),
                width = activity_width
            ));
        }
    }

    output
}

/// Format a draft's sections in order
pub fn format_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "No sections. Add one to start planning.\n".to_string();
    }

    let mut output = String::new();
    for section in sections {
        output.push_str(&format!("{}  [{}]\n", section.title, section.id));
        output.push_str(&format!("  {}\n", section.description));
        let dates = if section.date_range.is_empty() {
            "-"
        } else {
            section.date_range.as_str()
        };
        let budget = if section.budget.is_empty() {
            "-"
        } else {
            section.budget.as_str()
        };
        output.push_str(&format!("  Dates: {}    Budget: {}\n\n", dates, budget));
    }
    output
}
