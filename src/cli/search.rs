//! City and activity search commands

use clap::Subcommand;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::display::{format_activity_results, format_city_results};
use crate::error::GlobeResult;
use crate::services::search::{search_activities, search_cities, top_destinations};

/// Search subcommands
#[derive(Subcommand)]
pub enum SearchCommands {
    /// Search cities by name or country
    Cities {
        /// Search text; empty lists every city
        #[arg(default_value = "")]
        query: String,
    },
    /// Search activities by name or type
    Activities {
        /// Search text; empty lists every activity
        #[arg(default_value = "")]
        query: String,
    },
    /// Most popular destinations
    Top {
        /// Number of cities to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
}

/// Handle a search command
pub fn handle_search_command(data: &Dataset, settings: &Settings, cmd: SearchCommands) -> GlobeResult<()> {
    match cmd {
        SearchCommands::Cities { query } => {
            print!("{}", format_city_results(&search_cities(&data.cities, &query)));
        }
        SearchCommands::Activities { query } => {
            let results = search_activities(&data.activities, &query);
            print!("{}", format_activity_results(&results, &settings.currency_symbol));
        }
        SearchCommands::Top { limit } => {
            print!("{}", format_city_results(&top_destinations(&data.cities, limit)));
        }
    }

    Ok(())
}
