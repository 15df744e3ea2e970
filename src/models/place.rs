//! Static reference data: cities and activities

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ActivityId, CityId};
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub region: String,
    #[serde(default)]
    pub description: String,
    /// 1 (cheap) to 5 (expensive)
    pub cost_index: u8,
    pub popularity: u32,
}

impl City {
    /// "$$$" style indicator for the cost index
    pub fn cost_label(&self) -> String {
        "$".repeat(self.cost_index.clamp(1, 5) as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sightseeing,
    Food,
    Adventure,
    Culture,
    Shopping,
    Relaxation,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sightseeing => "sightseeing",
            Self::Food => "food",
            Self::Adventure => "adventure",
            Self::Culture => "culture",
            Self::Shopping => "shopping",
            Self::Relaxation => "relaxation",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub city_id: CityId,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub description: String,
    /// Typical duration in hours
    pub duration_hours: f32,
    pub cost: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}
