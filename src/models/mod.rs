//! Core data models for Globetrotter
//!
//! Trips and the static reference data they point at, the calendar month
//! used by the calendar view, and the itinerary structures (day plans and
//! draft sections) that the budgeting code aggregates.

pub mod community;
pub mod ids;
pub mod itinerary;
pub mod money;
pub mod month;
pub mod place;
pub mod section;
pub mod trip;
pub mod user;

pub use community::CommunityPost;
pub use ids::{ActivityId, CityId, ItemId, PostId, SectionId, TripId, UserId};
pub use itinerary::{DayPlan, Itinerary, ItineraryItem};
pub use money::{Money, MoneyParseError};
pub use month::{CalendarMonth, MonthParseError};
pub use place::{Activity, ActivityType, City};
pub use section::{Section, SectionField};
pub use trip::{Trip, TripStatus};
pub use user::{ProfileUpdate, Registration, User};
