//! Trip model
//!
//! Trips are read-only input to the planning core: they come from the dataset
//! and are never modified by the calendar or itinerary code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TripId, UserId};
use super::money::Money;

/// Lifecycle label of a trip, assigned by whoever created the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Ongoing,
    Upcoming,
    Completed,
}

impl TripStatus {
    pub fn all() -> &'static [Self] {
        &[Self::Ongoing, Self::Upcoming, Self::Completed]
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "Ongoing"),
            Self::Upcoming => write!(f, "Upcoming"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A user's travel plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,

    pub owner: UserId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub start_date: NaiveDate,

    /// Inclusive
    pub end_date: NaiveDate,

    pub status: TripStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<Money>,

    /// City names, in visiting order
    #[serde(default)]
    pub destinations: Vec<String>,

    #[serde(default)]
    pub is_public: bool,
}

impl Trip {
    pub fn new(
        name: impl Into<String>,
        owner: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: TripStatus,
    ) -> Self {
        Self {
            id: TripId::new(),
            owner,
            name: name.into(),
            description: String::new(),
            start_date,
            end_date,
            status,
            total_budget: None,
            destinations: Vec::new(),
            is_public: false,
        }
    }

    /// Whether `date` falls inside `[start_date, end_date]`
    ///
    /// A trip whose end precedes its start covers no dates at all.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether the date range overlaps `[from, to]` (both inclusive)
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= self.end_date && self.start_date <= to && from <= self.end_date
    }

    /// Length of the trip in days, counting both ends; zero for reversed ranges
    pub fn duration_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
