//! Globetrotter - travel planning from the terminal
//!
//! This library provides the planning core behind the `globetrotter` binary:
//! a month calendar that places trips on the days they cover, itinerary
//! budgeting with per-day and trip totals, sectioned itinerary drafts, and
//! queries over a read-only mock travel dataset.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (trips, months, itineraries, sections, etc.)
//! - `dataset`: Built-in mock data and JSON dataset loading
//! - `services`: Planning logic and the authentication provider
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use globetrotter::config::Settings;
//! use globetrotter::dataset::Dataset;
//! use globetrotter::models::CalendarMonth;
//! use globetrotter::services::CalendarService;
//!
//! let settings = Settings::default();
//! let data = Dataset::builtin();
//! let view = CalendarService::new(&settings).month_view(CalendarMonth::new(2024, 1), &data.trips);
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{GlobeError, GlobeResult};
