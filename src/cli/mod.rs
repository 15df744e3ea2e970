//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod calendar;
pub mod community;
pub mod itinerary;
pub mod search;
pub mod trips;

pub use auth::{
    handle_admin_command, handle_login_command, handle_profile_command, handle_register_command,
    AdminArgs, LoginArgs, ProfileArgs, RegisterArgs,
};
pub use calendar::{handle_calendar_command, CalendarArgs};
pub use community::{handle_community_command, CommunityArgs};
pub use itinerary::{handle_itinerary_command, ItineraryCommands};
pub use search::{handle_search_command, SearchCommands};
pub use trips::{handle_trip_command, TripCommands};
