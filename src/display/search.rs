//! City and activity search result formatting

use crate::models::{Activity, City};

pub fn format_city_results(cities: &[&City]) -> String {
    if cities.is_empty() {
        return "No cities match your search.\n".to_string();
    }

    let name_width = cities.iter().map(|c| c.name.chars().count()).max().unwrap_or(4).max(4);
    let country_width = cities
        .iter()
        .map(|c| c.country.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<nw$}  {:<cw$}  {:<5}  {:>10}\n",
        "City",
        "Country",
        "Cost",
        "Popularity",
        nw = name_width,
        cw = country_width
    ));
    output.push_str(&format!(
        "{}\n",
        "-".repeat(name_width + country_width + 5 + 10 + 6)
    ));

    for city in cities {
        output.push_str(&format!(
            "{:<nw$}  {:<cw$}  {:<5}  {:>10}\n",
            city.name,
            city.country,
            city.cost_label(),
            city.popularity,
            nw = name_width,
            cw = country_width
        ));
    }

    output.push_str(&format!("\n{} cities\n", cities.len()));
    output
}

pub fn format_activity_results(activities: &[&Activity], currency: &str) -> String {
    if activities.is_empty() {
        return "No activities match your search.\n".to_string();
    }

    let name_width = activities
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<nw$}  {:<12}  {:>6}  {:>8}  {:>6}\n",
        "Activity",
        "Type",
        "Hours",
        "Cost",
        "Rating",
        nw = name_width
    ));
    output.push_str(&format!("{}\n", "-".repeat(name_width + 12 + 6 + 8 + 6 + 8)));

    for activity in activities {
        let rating = activity
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".into());
        output.push_str(&format!(
            "{:<nw$}  {:<12}  {:>6.1}  {:>8}  {:>6}\n",
            activity.name,
            activity.activity_type.as_str(),
            activity.duration_hours,
            activity.cost.format_with_symbol(currency),
            rating,
            nw = name_width
        ));
    }

    output.push_str(&format!("\n{} activities\n", activities.len()));
    output
}
