//! Profile page formatting

use crate::models::{Trip, User};

pub fn format_profile(user: &User, preplanned: &[&Trip], previous: &[&Trip], date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Profile: {}\n", user.full_name()));
    output.push_str(&format!("  E-mail:  {}\n", user.email));

    let details = [
        ("Phone:   ", &user.phone),
        ("City:    ", &user.city),
        ("Country: ", &user.country),
        ("About:   ", &user.additional_info),
    ];
    for (label, value) in details {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            output.push_str(&format!("  {}{}\n", label, value));
        }
    }

    for (heading, trips) in [("Preplanned trips", preplanned), ("Previous trips", previous)] {
        output.push_str(&format!("\n{}\n", heading));
        if trips.is_empty() {
            output.push_str("  None\n");
        }
        for trip in trips {
            output.push_str(&format!(
                "  {}  ({} - {})\n",
                trip.name,
                trip.start_date.format(date_format),
                trip.end_date.format(date_format)
            ));
        }
    }

    output
}
