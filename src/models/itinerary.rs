//! Itinerary models: day plans and their line items

use serde::{Deserialize, Serialize};

use super::ids::{ItemId, TripId};
use super::money::Money;

/// One activity on a day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: ItemId,
    pub activity: String,
    pub expense: Money,
}

impl ItineraryItem {
    pub fn new(activity: impl Into<String>, expense: Money) -> Self {
        Self {
            id: ItemId::new(),
            activity: activity.into(),
            expense,
        }
    }
}

/// The ordered activities scheduled for one day of a trip
///
/// Items are owned by the plan; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based ordinal, unique within an itinerary
    pub day: u32,
    #[serde(default)]
    pub items: Vec<ItineraryItem>,
}

impl DayPlan {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            items: Vec::new(),
        }
    }

    pub fn with_items(day: u32, items: Vec<ItineraryItem>) -> Self {
        Self { day, items }
    }
}

/// The day-by-day plan attached to a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub trip_id: TripId,
    pub days: Vec<DayPlan>,
}
