//! Admin analytics over the dataset

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::error::{GlobeError, GlobeResult};
use crate::models::TripStatus;
use crate::services::auth::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    /// "YYYY-MM"
    pub month: String,
    pub users: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_trips: usize,
    pub active_trips: usize,
    pub popular_cities: Vec<RankedEntry>,
    pub popular_activities: Vec<RankedEntry>,
    pub user_trends: Vec<MonthlyCount>,
}

/// Fail unless the session belongs to the configured admin address
pub fn require_admin(session: &Session, settings: &Settings) -> GlobeResult<()> {
    if session.is_admin(&settings.admin_email) {
        Ok(())
    } else {
        Err(GlobeError::Forbidden(format!(
            "{} is not an administrator",
            session.user().email
        )))
    }
}

/// Compute the dashboard figures, keeping the top `limit` cities and activities
pub fn compute_stats(data: &Dataset, limit: usize) -> AdminStats {
    let mut cities: HashMap<&str, usize> = HashMap::new();
    for trip in &data.trips {
        let visited: HashSet<&str> = trip.destinations.iter().map(String::as_str).collect();
        for city in visited {
            *cities.entry(city).or_default() += 1;
        }
    }

    let mut activities: HashMap<&str, usize> = HashMap::new();
    for itinerary in &data.itineraries {
        for item in itinerary.days.iter().flat_map(|d| &d.items) {
            *activities.entry(item.activity.as_str()).or_default() += 1;
        }
    }

    let mut trends: BTreeMap<String, usize> = BTreeMap::new();
    for user in &data.users {
        *trends.entry(user.created_at.format("%Y-%m").to_string()).or_default() += 1;
    }

    AdminStats {
        total_users: data.users.len(),
        total_trips: data.trips.len(),
        active_trips: data
            .trips
            .iter()
            .filter(|t| t.status == TripStatus::Ongoing)
            .count(),
        popular_cities: rank(cities, limit),
        popular_activities: rank(activities, limit),
        user_trends: trends
            .into_iter()
            .map(|(month, users)| MonthlyCount { month, users })
            .collect(),
    }
}

fn rank(counts: HashMap<&str, usize>, limit: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = counts
        .into_iter()
        .map(|(label, count)| RankedEntry {
            label: label.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_stats_over_builtin_dataset() {
        let data = Dataset::builtin();
        let stats = compute_stats(&data, 5);

        assert_eq!(stats.total_users, data.users.len());
        assert_eq!(stats.total_trips, data.trips.len());
        assert_eq!(
            stats.active_trips,
            data.trips.iter().filter(|t| t.status == TripStatus::Ongoing).count()
        );
        assert!(stats.popular_cities.len() <= 5);
        assert!(stats.popular_cities.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(stats.user_trends.windows(2).all(|w| w[0].month < w[1].month));
        assert_eq!(stats.user_trends.iter().map(|t| t.users).sum::<usize>(), data.users.len());
    }

    #[test]
    fn test_city_counted_once_per_trip() {
        let mut data = Dataset::builtin();
        data.trips.truncate(1);
        data.trips[0].destinations = vec!["Paris".into(), "Lyon".into(), "Paris".into()];
        let stats = compute_stats(&data, 10);
        let paris = stats.popular_cities.iter().find(|c| c.label == "Paris").unwrap();
        assert_eq!(paris.count, 1);
    }

    #[test]
    fn test_require_admin() {
        let settings = Settings::default();
        let admin = Session::new(User::new("admin@globaltrotter.com", "Admin", "User"));
        let traveler = Session::new(User::new("jane@example.com", "Jane", "Doe"));

        assert!(require_admin(&admin, &settings).is_ok());
        assert!(matches!(
            require_admin(&traveler, &settings),
            Err(GlobeError::Forbidden(_))
        ));
    }
}
