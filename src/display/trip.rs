//! Trip display formatting

use crate::models::{Trip, TripStatus};

/// Format trips under one heading per status
pub fn format_trip_groups(groups: &[(TripStatus, Vec<&Trip>)], date_format: &str) -> String {
    if groups.is_empty() {
        return "No trips found.\n".to_string();
    }

    let name_width = groups
        .iter()
        .flat_map(|(_, trips)| trips.iter())
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    for (i, (status, trips)) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{} ({})\n", status, trips.len()));
        for trip in trips {
            output.push_str(&format!(
                "  {:<width$}  {} - {}  {}\n",
                trip.name,
                trip.start_date.format(date_format),
                trip.end_date.format(date_format),
                trip.id,
                width = name_width
            ));
        }
    }
    output
}

pub fn format_trip_details(trip: &Trip, currency: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Trip: {}\n", trip.name));
    output.push_str(&format!("  ID:           {}\n", trip.id));
    output.push_str(&format!("  Status:       {}\n", trip.status));
    output.push_str(&format!(
        "  Dates:        {} - {} ({} days)\n",
        trip.start_date.format(date_format),
        trip.end_date.format(date_format),
        trip.duration_days()
    ));
    if !trip.destinations.is_empty() {
        output.push_str(&format!("  Destinations: {}\n", trip.destinations.join(", ")));
    }
    if let Some(budget) = trip.total_budget {
        output.push_str(&format!("  Budget:       {}\n", budget.format_with_symbol(currency)));
    }
    output.push_str(&format!(
        "  Visibility:   {}\n",
        if trip.is_public { "Public" } else { "Private" }
    ));
    if !trip.description.is_empty() {
        output.push_str(&format!("\n  {}\n", trip.description));
    }
    output
}
