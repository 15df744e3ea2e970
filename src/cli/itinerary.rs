//! Itinerary CLI commands
//!
//! `show` prints a trip's day plans with their totals. `edit` and `draft`
//! apply edits to an in-memory copy and print the result; the dataset on
//! disk is never touched.

use clap::Subcommand;
use tracing::debug;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::display::{format_itinerary, format_sections};
use crate::error::{GlobeError, GlobeResult};
use crate::models::{DayPlan, ItineraryItem, Money, SectionField, SectionId};
use crate::services::itinerary::{
    add_day, add_item, add_section, default_sections, find_section, remove_item, remove_section,
    sections_budget_total, update_section_field,
};
use crate::services::trips::find_trip;

/// Itinerary subcommands
#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Show a trip's itinerary with per-day and overall totals
    Show {
        /// Trip name or ID
        trip: String,
    },
    /// Try out changes to a trip's day plans
    Edit {
        /// Trip name or ID
        trip: String,
        /// Append this many empty days
        #[arg(long, default_value_t = 0)]
        add_day: u32,
        /// Add an activity, e.g. "2:Cooking class=60"
        #[arg(long = "add-item", value_name = "DAY:ACTIVITY=AMOUNT")]
        add_items: Vec<String>,
        /// Remove an activity by name or item ID
        #[arg(long = "remove-item", value_name = "ACTIVITY")]
        remove_items: Vec<String>,
    },
    /// Work on a sectioned itinerary draft, starting from three blank sections
    Draft {
        /// Append this many sections
        #[arg(long, default_value_t = 0)]
        add: u32,
        /// Remove the section with this title
        #[arg(long, value_name = "TITLE")]
        remove: Vec<String>,
        /// Set a section field, e.g. "Section 1:budget=300"
        #[arg(long, value_name = "TITLE:FIELD=VALUE")]
        set: Vec<String>,
    },
}

/// Handle an itinerary command
pub fn handle_itinerary_command(data: &Dataset, settings: &Settings, cmd: ItineraryCommands) -> GlobeResult<()> {
    match cmd {
        ItineraryCommands::Show { trip } => {
            let trip = find_trip(&data.trips, &trip)?;
            let days = data.itinerary_for(trip.id).map(|i| i.days.as_slice()).unwrap_or_default();
            print!("{}", format_itinerary(trip, days, &settings.currency_symbol));
        }
        ItineraryCommands::Edit {
            trip,
            add_day: extra_days,
            add_items,
            remove_items,
        } => {
            let trip = find_trip(&data.trips, &trip)?;
            let mut days: Vec<DayPlan> = data
                .itinerary_for(trip.id)
                .map(|i| i.days.clone())
                .unwrap_or_default();

            for _ in 0..extra_days {
                days = add_day(&days);
            }
            for entry in &add_items {
                let (day, item) = parse_item(entry)?;
                if !days.iter().any(|p| p.day == day) {
                    return Err(GlobeError::Validation(format!(
                        "Day {} is not part of the itinerary",
                        day
                    )));
                }
                days = add_item(&days, day, item);
            }
            for needle in &remove_items {
                let id = days
                    .iter()
                    .flat_map(|p| &p.items)
                    .find(|i| i.id.to_string() == *needle || i.activity.eq_ignore_ascii_case(needle.trim()))
                    .map(|i| i.id)
                    .ok_or_else(|| GlobeError::NotFound {
                        entity_type: "Activity",
                        identifier: needle.clone(),
                    })?;
                days = remove_item(&days, id);
            }

            print!("{}", format_itinerary(trip, &days, &settings.currency_symbol));
        }
        ItineraryCommands::Draft { add, remove, set } => {
            let mut sections = default_sections();

            for _ in 0..add {
                sections = add_section(&sections, SectionId::new());
            }
            for title in &remove {
                let id = find_section(&sections, title)
                    .map(|s| s.id)
                    .ok_or_else(|| GlobeError::section_not_found(title.as_str()))?;
                sections = remove_section(&sections, id);
            }
            for assignment in &set {
                let (title, field, value) = parse_assignment(assignment)?;
                let id = find_section(&sections, title)
                    .map(|s| s.id)
                    .ok_or_else(|| GlobeError::section_not_found(title))?;
                debug!(%id, %field, "setting section field");
                sections = update_section_field(&sections, id, field, value);
            }

            print!("{}", format_sections(&sections));
            let total = sections_budget_total(&sections)?;
            println!("Planned budget: {}", total.format_with_symbol(&settings.currency_symbol));
        }
    }

    Ok(())
}

/// Split "TITLE:FIELD=VALUE"; the value may itself contain ':' or '='
fn parse_assignment(input: &str) -> GlobeResult<(&str, SectionField, &str)> {
    let invalid = || {
        GlobeError::Validation(format!(
            "Expected TITLE:FIELD=VALUE, got '{}'",
            input
        ))
    };

    let (target, value) = input.split_once('=').ok_or_else(invalid)?;
    let (title, field) = target.rsplit_once(':').ok_or_else(invalid)?;
    if title.trim().is_empty() {
        return Err(invalid());
    }
    let field = field.parse::<SectionField>().map_err(GlobeError::Validation)?;
    Ok((title.trim(), field, value.trim()))
}

/// Split "DAY:ACTIVITY=AMOUNT" into a day ordinal and a new item
fn parse_item(input: &str) -> GlobeResult<(u32, ItineraryItem)> {
    let invalid = || {
        GlobeError::Validation(format!(
            "Expected DAY:ACTIVITY=AMOUNT, got '{}'",
            input
        ))
    };

    let (day, rest) = input.split_once(':').ok_or_else(invalid)?;
    let (activity, amount) = rest.rsplit_once('=').ok_or_else(invalid)?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    if activity.trim().is_empty() {
        return Err(invalid());
    }
    let expense = Money::parse(amount)
        .map_err(|e| GlobeError::Validation(format!("Invalid amount '{}': {}", amount.trim(), e)))?;

    Ok((day, ItineraryItem::new(activity.trim(), expense)))
}
