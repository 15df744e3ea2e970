//! Trip CLI commands
//!
//! `create` validates the new-trip form and adds the trip to an in-memory
//! copy of the dataset; nothing is written back.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::display::{format_city_results, format_trip_details, format_trip_groups};
use crate::error::GlobeResult;
use crate::models::UserId;
use crate::services::trips::{
    create_trip, filter_trips, find_trip, group_by_status, previous_trips, suggested_places, StatusFilter,
    TripDraft,
};

/// Trip subcommands
#[derive(Subcommand)]
pub enum TripCommands {
    /// List trips grouped by status
    List {
        /// Only trips whose name contains this text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Status filter (all, ongoing, upcoming, completed)
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show trip details
    Show {
        /// Trip name or ID
        trip: String,
    },
    /// List completed trips
    Previous {
        /// Number of trips to show
        #[arg(short, long, default_value = "4")]
        limit: usize,
    },
    /// Plan a new trip and list suggested places to visit
    Create {
        /// Trip name
        name: String,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// First place to visit
        #[arg(short, long)]
        place: Option<String>,
    },
}

/// Handle a trip command
pub fn handle_trip_command(data: &Dataset, settings: &Settings, cmd: TripCommands) -> GlobeResult<()> {
    match cmd {
        TripCommands::List { search, status } => {
            let visible = filter_trips(&data.trips, &search, status);
            if visible.is_empty() && (!search.is_empty() || status != StatusFilter::All) {
                println!("No trips match '{}' ({}).", search, status);
                return Ok(());
            }
            print!(
                "{}",
                format_trip_groups(&group_by_status(&visible), &settings.date_format)
            );
        }
        TripCommands::Show { trip } => {
            let trip = find_trip(&data.trips, &trip)?;
            print!(
                "{}",
                format_trip_details(trip, &settings.currency_symbol, &settings.date_format)
            );
        }
        TripCommands::Previous { limit } => {
            let previous = previous_trips(&data.trips, limit);
            if previous.is_empty() {
                println!("No previous trips.");
                return Ok(());
            }
            println!("Previous trips");
            for trip in previous {
                println!(
                    "  {}  ({} - {})",
                    trip.name,
                    trip.start_date.format(&settings.date_format),
                    trip.end_date.format(&settings.date_format)
                );
            }
        }
        TripCommands::Create {
            name,
            description,
            start,
            end,
            place,
        } => {
            let owner = data.users.first().map(|u| u.id).unwrap_or_else(UserId::new);
            let draft = TripDraft {
                name,
                description,
                start_date: start,
                end_date: end,
                place,
            };
            let trip = create_trip(owner, draft, Local::now().date_naive())?;
            let details = format_trip_details(&trip, &settings.currency_symbol, &settings.date_format);

            let mut trips = data.trips.clone();
            trips.push(trip);

            println!("Created trip ({} trips in total, not saved)", trips.len());
            println!();
            print!("{}", details);
            println!();
            println!("Suggested places");
            print!("{}", format_city_results(&suggested_places(&data.cities)));
        }
    }

    Ok(())
}
