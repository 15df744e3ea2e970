//! Service layer for Globetrotter
//!
//! Pure planning logic over the dataset: calendar bucketing, itinerary
//! aggregation and editing, trip/search/community queries, admin analytics,
//! and the authentication provider seam.

pub mod admin;
pub mod auth;
pub mod calendar;
pub mod community;
pub mod itinerary;
pub mod search;
pub mod trips;

pub use auth::{AuthProvider, MockAuthProvider, Session};
pub use calendar::{month_grid, next_month, previous_month, CalendarService, DayCell, MonthView};
pub use itinerary::{
    add_section, day_total, remove_section, trip_total, update_section_field,
};
pub use trips::StatusFilter;
