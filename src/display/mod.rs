//! Display formatting for terminal output
//!
//! Every formatter builds a `String` so the CLI layer decides where it goes
//! and tests can assert on the exact text.

pub mod admin;
pub mod calendar;
pub mod community;
pub mod itinerary;
pub mod profile;
pub mod search;
pub mod trip;

pub use admin::format_admin_stats;
pub use calendar::format_month_view;
pub use community::format_feed;
pub use itinerary::{format_itinerary, format_sections};
pub use profile::format_profile;
pub use search::{format_activity_results, format_city_results};
pub use trip::{format_trip_details, format_trip_groups};
