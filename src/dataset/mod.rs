//! The read-only travel dataset
//!
//! Every command works on its own copy of the dataset, taken either from the
//! built-in mock data or from a JSON file with the same shape. Nothing is
//! ever written back.

mod builtin;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{GlobePaths, Settings};
use crate::error::{GlobeError, GlobeResult};
use crate::models::{Activity, City, CommunityPost, Itinerary, Trip, TripId, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub trips: Vec<Trip>,
    pub cities: Vec<City>,
    pub activities: Vec<Activity>,
    pub posts: Vec<CommunityPost>,
    pub itineraries: Vec<Itinerary>,
}

impl Dataset {
    /// The mock data shipped with the application
    pub fn builtin() -> Self {
        builtin::dataset()
    }

    /// Read a dataset from a JSON file; missing collections default to empty
    pub fn load(path: impl AsRef<Path>) -> GlobeResult<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .map_err(|e| GlobeError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

        let dataset: Dataset = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| GlobeError::Json(format!("Failed to parse {}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            trips = dataset.trips.len(),
            cities = dataset.cities.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Pick the dataset for a run: an explicit path wins over the configured
    /// one, then `dataset.json` in the config directory if present, and the
    /// built-in data last
    pub fn resolve(explicit: Option<&Path>, settings: &Settings, paths: &GlobePaths) -> GlobeResult<Self> {
        if let Some(path) = explicit.or(settings.dataset_path.as_deref()) {
            return Self::load(path);
        }

        let fallback = paths.dataset_file();
        if fallback.exists() {
            return Self::load(fallback);
        }

        debug!("using built-in dataset");
        Ok(Self::builtin())
    }

    pub fn itinerary_for(&self, trip_id: TripId) -> Option<&Itinerary> {
        self.itineraries.iter().find(|i| i.trip_id == trip_id)
    }
}
