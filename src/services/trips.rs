//! Trip listing, creation and lookup

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{GlobeError, GlobeResult};
use crate::models::{City, Trip, TripId, TripStatus, UserId};

/// Number of cities offered as places to visit when creating a trip
pub const SUGGESTED_PLACES: usize = 6;

/// Contents of the new-trip form
#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Optional first destination
    pub place: Option<String>,
}

/// Status filter tab of the trips page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TripStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TripStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "ongoing" => Ok(Self::Only(TripStatus::Ongoing)),
            "upcoming" => Ok(Self::Only(TripStatus::Upcoming)),
            "completed" => Ok(Self::Only(TripStatus::Completed)),
            other => Err(format!(
                "unknown status '{}' (expected all, ongoing, upcoming or completed)",
                other
            )),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Trips whose name contains `query` (case-insensitive) and whose status passes `filter`
pub fn filter_trips<'a>(trips: &'a [Trip], query: &str, filter: StatusFilter) -> Vec<&'a Trip> {
    let query = query.trim().to_lowercase();
    trips
        .iter()
        .filter(|trip| trip.name.to_lowercase().contains(&query))
        .filter(|trip| filter.matches(trip.status))
        .collect()
}

/// Trips split into the three status sections, empty sections omitted
pub fn group_by_status<'a>(trips: &[&'a Trip]) -> Vec<(TripStatus, Vec<&'a Trip>)> {
    TripStatus::all()
        .iter()
        .map(|status| {
            let group: Vec<&Trip> = trips.iter().copied().filter(|t| t.status == *status).collect();
            (*status, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// The first `limit` completed trips, shown on the dashboard
pub fn previous_trips(trips: &[Trip], limit: usize) -> Vec<&Trip> {
    trips
        .iter()
        .filter(|t| t.status == TripStatus::Completed)
        .take(limit)
        .collect()
}

/// The first `limit` upcoming trips, shown on the profile as preplanned
pub fn preplanned_trips(trips: &[Trip], limit: usize) -> Vec<&Trip> {
    trips
        .iter()
        .filter(|t| t.status == TripStatus::Upcoming)
        .take(limit)
        .collect()
}

/// Build a trip from the new-trip form.
///
/// The name must not be blank and the range must not end before it starts.
/// The status follows from where `today` falls relative to the range.
pub fn create_trip(owner: UserId, draft: TripDraft, today: NaiveDate) -> GlobeResult<Trip> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(GlobeError::Validation("Trip name is required".into()));
    }
    if draft.end_date < draft.start_date {
        return Err(GlobeError::Validation(format!(
            "Trip '{}' ends ({}) before it starts ({})",
            name, draft.end_date, draft.start_date
        )));
    }

    let status = if today < draft.start_date {
        TripStatus::Upcoming
    } else if today > draft.end_date {
        TripStatus::Completed
    } else {
        TripStatus::Ongoing
    };

    let mut trip = Trip::new(name, owner, draft.start_date, draft.end_date, status);
    trip.description = draft.description.trim().to_string();
    trip.destinations = draft
        .place
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .into_iter()
        .collect();

    debug!(id = %trip.id, %status, "created trip");
    Ok(trip)
}

/// Places offered on the new-trip form: the first few cities of the catalogue
pub fn suggested_places(cities: &[City]) -> Vec<&City> {
    cities.iter().take(SUGGESTED_PLACES).collect()
}

/// Look a trip up by ID (full UUID or "trip-" short form) or by name
pub fn find_trip<'a>(trips: &'a [Trip], identifier: &str) -> GlobeResult<&'a Trip> {
    let needle = identifier.trim();

    if let Ok(id) = needle.parse::<TripId>() {
        if let Some(trip) = trips.iter().find(|t| t.id == id) {
            return Ok(trip);
        }
    }

    trips
        .iter()
        .find(|t| t.id.to_string() == needle || t.name.eq_ignore_ascii_case(needle))
        .ok_or_else(|| GlobeError::trip_not_found(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn trips() -> Vec<Trip> {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        let mut paris = Trip::new("Paris Adventure", UserId::fixture(1), d(1, 10), d(1, 15), TripStatus::Ongoing);
        paris.id = TripId::fixture(1);
        let mut tokyo = Trip::new("Tokyo Explorer", UserId::fixture(1), d(3, 1), d(3, 9), TripStatus::Upcoming);
        tokyo.id = TripId::fixture(2);
        let mut rome = Trip::new("Rome Getaway", UserId::fixture(1), d(2, 1), d(2, 4), TripStatus::Completed);
        rome.id = TripId::fixture(3);
        vec![paris, tokyo, rome]
    }

    #[test]
    fn test_filter_by_name_and_status() {
        let trips = trips();
        assert_eq!(filter_trips(&trips, "", StatusFilter::All).len(), 3);
        assert_eq!(filter_trips(&trips, "TOKYO", StatusFilter::All)[0].name, "Tokyo Explorer");
        assert!(filter_trips(&trips, "tokyo", StatusFilter::Only(TripStatus::Completed)).is_empty());
        assert_eq!(filter_trips(&trips, "", StatusFilter::Only(TripStatus::Completed)).len(), 1);
    }

    #[test]
    fn test_group_by_status_skips_empty_groups() {
        let trips = trips();
        let visible = filter_trips(&trips, "o", StatusFilter::All);
        let groups = group_by_status(&visible);
        let statuses: Vec<TripStatus> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(statuses, vec![TripStatus::Upcoming, TripStatus::Completed]);
    }

    #[test]
    fn test_find_trip() {
        let trips = trips();
        assert_eq!(find_trip(&trips, "trip-00000002").unwrap().name, "Tokyo Explorer");
        assert_eq!(find_trip(&trips, "rome getaway").unwrap().id, TripId::fixture(3));
        let full = TripId::fixture(1).as_uuid().to_string();
        assert_eq!(find_trip(&trips, &full).unwrap().name, "Paris Adventure");
        assert!(find_trip(&trips, "Atlantis").unwrap_err().is_not_found());
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Upcoming".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(TripStatus::Upcoming))
        );
        assert!("cancelled".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_previous_trips() {
        let trips = trips();
        let previous = previous_trips(&trips, 4);
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].name, "Rome Getaway");
    }

    #[test]
    fn test_preplanned_trips() {
        let trips = trips();
        let preplanned = preplanned_trips(&trips, 3);
        assert_eq!(preplanned.len(), 1);
        assert_eq!(preplanned[0].name, "Tokyo Explorer");
        assert!(preplanned_trips(&trips, 0).is_empty());
    }

    fn lisbon() -> TripDraft {
        let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        TripDraft {
            name: "  Lisbon Weekend ".into(),
            description: "Trams and pasteis".into(),
            start_date: d(8),
            end_date: d(10),
            place: Some("Lisbon".into()),
        }
    }

    #[test]
    fn test_create_trip_derives_status() {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        let owner = UserId::fixture(1);

        let trip = create_trip(owner, lisbon(), d(1, 1)).unwrap();
        assert_eq!(trip.name, "Lisbon Weekend");
        assert_eq!(trip.owner, owner);
        assert_eq!(trip.status, TripStatus::Upcoming);
        assert_eq!(trip.destinations, vec!["Lisbon".to_string()]);
        assert_eq!(trip.total_budget, None);

        assert_eq!(create_trip(owner, lisbon(), d(3, 10)).unwrap().status, TripStatus::Ongoing);
        assert_eq!(create_trip(owner, lisbon(), d(3, 11)).unwrap().status, TripStatus::Completed);
    }

    #[test]
    fn test_create_trip_single_day_and_blank_place() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let draft = TripDraft {
            end_date: day,
            place: Some("   ".into()),
            ..lisbon()
        };
        let trip = create_trip(UserId::fixture(1), draft, day).unwrap();
        assert_eq!(trip.status, TripStatus::Ongoing);
        assert!(trip.destinations.is_empty());
    }

    #[test]
    fn test_create_trip_validates_form() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let blank = TripDraft { name: " ".into(), ..lisbon() };
        assert!(create_trip(UserId::fixture(1), blank, today).unwrap_err().is_validation());

        let reversed = TripDraft {
            start_date: lisbon().end_date,
            end_date: lisbon().start_date,
            ..lisbon()
        };
        let err = create_trip(UserId::fixture(1), reversed, today).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Lisbon Weekend"));
    }

    #[test]
    fn test_suggested_places_are_the_first_six_cities() {
        let data = Dataset::builtin();
        let names: Vec<&str> = suggested_places(&data.cities).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Paris", "Tokyo", "Kyoto", "Rome", "Bali", "New York"]);
        assert!(suggested_places(&data.cities[..2]).len() == 2);
    }
}
