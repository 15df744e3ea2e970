//! Calendar service
//!
//! Lays a month out as a grid of day cells and buckets trips into the days
//! their date range covers. Everything here is recomputed from its inputs on
//! every call; the caller owns the month being displayed.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::models::{CalendarMonth, Trip};

/// One position in the month grid
#[derive(Debug, Clone, PartialEq)]
pub enum DayCell<'a> {
    /// Blank cell before the 1st of the month
    Padding,
    Day {
        day: u32,
        /// `None` only for years chrono cannot represent
        date: Option<NaiveDate>,
        trips: Vec<&'a Trip>,
    },
}

impl<'a> DayCell<'a> {
    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding)
    }

    pub fn day_number(&self) -> Option<u32> {
        match self {
            Self::Padding => None,
            Self::Day { day, .. } => Some(*day),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Padding => None,
            Self::Day { date, .. } => *date,
        }
    }

    /// Every trip on this day, in dataset order
    pub fn trips(&self) -> &[&'a Trip] {
        match self {
            Self::Padding => &[],
            Self::Day { trips, .. } => trips,
        }
    }

    /// The trips shown inline when at most `cap` fit in the cell
    pub fn visible_trips(&self, cap: usize) -> &[&'a Trip] {
        let trips = self.trips();
        &trips[..trips.len().min(cap)]
    }

    /// How many trips are hidden behind a "+N more" marker
    pub fn overflow_count(&self, cap: usize) -> usize {
        self.trips().len().saturating_sub(cap)
    }
}

/// Build the grid for `month` with Sunday as the first column
///
/// The result holds `starting_weekday` padding cells followed by one cell per
/// day of the month.
pub fn month_grid(month: CalendarMonth, trips: &[Trip]) -> Vec<DayCell<'_>> {
    month_grid_from(month, trips, 0)
}

/// Build the grid for `month` with a custom first column (0 = Sunday, 1 = Monday, ...)
pub fn month_grid_from(month: CalendarMonth, trips: &[Trip], first_day_of_week: u32) -> Vec<DayCell<'_>> {
    let leading = leading_padding(month, first_day_of_week);
    let days_in_month = month.days_in_month();

    let mut cells = Vec::with_capacity((leading + days_in_month) as usize);
    cells.extend((0..leading).map(|_| DayCell::Padding));

    for day in 1..=days_in_month {
        let date = month.date(day);
        let trips: Vec<&Trip> = date
            .map(|date| trips.iter().filter(|trip| trip.covers(date)).collect())
            .unwrap_or_default();
        cells.push(DayCell::Day { day, date, trips });
    }

    debug!(
        month = %month,
        leading,
        days_in_month,
        trips = trips.len(),
        "built month grid"
    );

    cells
}

/// Number of blank cells before the 1st for the given first column
pub fn leading_padding(month: CalendarMonth, first_day_of_week: u32) -> u32 {
    (month.starting_weekday() + 7 - first_day_of_week % 7) % 7
}

/// Trips whose range includes `day` of `month`
pub fn trips_for_day(month: CalendarMonth, day: u32, trips: &[Trip]) -> Vec<&Trip> {
    match month.date(day) {
        Some(date) => trips.iter().filter(|trip| trip.covers(date)).collect(),
        None => Vec::new(),
    }
}

/// Trips that appear anywhere on the month's page
pub fn trips_in_month(month: CalendarMonth, trips: &[Trip]) -> Vec<&Trip> {
    let (Some(first), Some(last)) = (month.first_day(), month.last_day()) else {
        return Vec::new();
    };
    trips.iter().filter(|trip| trip.overlaps(first, last)).collect()
}

pub fn previous_month(month: CalendarMonth) -> CalendarMonth {
    month.prev()
}

pub fn next_month(month: CalendarMonth) -> CalendarMonth {
    month.next()
}

/// A month page ready for display
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    pub month: CalendarMonth,
    pub first_day_of_week: u32,
    pub inline_cap: usize,
    pub cells: Vec<DayCell<'a>>,
    pub legend: Vec<&'a Trip>,
}

/// Calendar operations that depend on user preferences
pub struct CalendarService<'a> {
    settings: &'a Settings,
}

impl<'a> CalendarService<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the page for `month` using the configured first weekday and cell cap
    pub fn month_view<'t>(&self, month: CalendarMonth, trips: &'t [Trip]) -> MonthView<'t> {
        let first_day_of_week = u32::from(self.settings.first_day_of_week);
        MonthView {
            month,
            first_day_of_week,
            inline_cap: self.settings.calendar_inline_trips,
            cells: month_grid_from(month, trips, first_day_of_week),
            legend: trips_in_month(month, trips),
        }
    }

    /// Resolve the page to show from an optional "YYYY-MM" and a relative offset
    pub fn resolve_month(&self, start: Option<CalendarMonth>, offset: i32) -> CalendarMonth {
        start.unwrap_or_else(CalendarMonth::current).offset(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TripStatus, UserId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(name: &str, start: NaiveDate, end: NaiveDate) -> Trip {
        Trip::new(name, UserId::fixture(1), start, end, TripStatus::Upcoming)
    }

    fn cell_for<'c, 'a>(cells: &'c [DayCell<'a>], day: u32) -> &'c DayCell<'a> {
        cells
            .iter()
            .find(|cell| cell.day_number() == Some(day))
            .unwrap()
    }

    #[test]
    fn test_grid_shape_for_many_months() {
        for year in [1999, 2023, 2024, 2025] {
            for m in 1..=12 {
                let month = CalendarMonth::new(year, m);
                let cells = month_grid(month, &[]);
                let leading = month.starting_weekday() as usize;
                assert_eq!(cells.len(), leading + month.days_in_month() as usize);
                assert!(cells[..leading].iter().all(DayCell::is_padding));
                let days: Vec<u32> = cells[leading..].iter().filter_map(DayCell::day_number).collect();
                assert_eq!(days, (1..=month.days_in_month()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_january_2024_layout() {
        let cells = month_grid(CalendarMonth::new(2024, 1), &[]);
        assert_eq!(cells.len(), 32);
        assert!(cells[0].is_padding());
        assert_eq!(cells[1].day_number(), Some(1));
    }

    #[test]
    fn test_day_membership_is_inclusive() {
        let trips = vec![trip("Tokyo", date(2024, 1, 10), date(2024, 1, 15))];
        let cells = month_grid(CalendarMonth::new(2024, 1), &trips);

        assert_eq!(cell_for(&cells, 12).trips().len(), 1);
        assert_eq!(cell_for(&cells, 10).trips().len(), 1);
        assert_eq!(cell_for(&cells, 15).trips().len(), 1);
        assert!(cell_for(&cells, 9).trips().is_empty());
        assert!(cell_for(&cells, 16).trips().is_empty());
    }

    #[test]
    fn test_multi_month_trip_appears_on_each_page() {
        let trips = vec![trip("Patagonia", date(2024, 1, 28), date(2024, 3, 2))];

        let jan = month_grid(CalendarMonth::new(2024, 1), &trips);
        let feb = month_grid(CalendarMonth::new(2024, 2), &trips);
        let mar = month_grid(CalendarMonth::new(2024, 3), &trips);

        assert_eq!(cell_for(&jan, 31).trips().len(), 1);
        assert!(feb.iter().filter(|c| !c.is_padding()).all(|c| c.trips().len() == 1));
        assert_eq!(cell_for(&mar, 2).trips().len(), 1);
        assert!(cell_for(&mar, 3).trips().is_empty());
        assert_eq!(trips_in_month(CalendarMonth::new(2024, 4), &trips).len(), 0);
    }

    #[test]
    fn test_reversed_trip_never_matches() {
        let trips = vec![trip("Broken", date(2024, 1, 15), date(2024, 1, 10))];
        let cells = month_grid(CalendarMonth::new(2024, 1), &trips);
        assert!(cells.iter().all(|c| c.trips().is_empty()));
        assert!(trips_in_month(CalendarMonth::new(2024, 1), &trips).is_empty());
    }

    #[test]
    fn test_overflow_keeps_full_set_queryable() {
        let trips: Vec<Trip> = (0..5)
            .map(|i| trip(&format!("Trip {}", i), date(2024, 6, 1), date(2024, 6, 3)))
            .collect();
        let cells = month_grid(CalendarMonth::new(2024, 6), &trips);
        let first = cell_for(&cells, 1);

        assert_eq!(first.visible_trips(2).len(), 2);
        assert_eq!(first.visible_trips(2)[0].name, "Trip 0");
        assert_eq!(first.overflow_count(2), 3);
        assert_eq!(first.trips().len(), 5);
        assert_eq!(cell_for(&cells, 4).overflow_count(2), 0);
        assert_eq!(DayCell::Padding.overflow_count(2), 0);
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        assert_eq!(next_month(CalendarMonth::new(2024, 12)), CalendarMonth::new(2025, 1));
        assert_eq!(previous_month(CalendarMonth::new(2024, 1)), CalendarMonth::new(2023, 12));
        assert_eq!(next_month(CalendarMonth::new(2024, 6)), CalendarMonth::new(2024, 7));
    }

    #[test]
    fn test_navigation_round_trip() {
        for year in [-5, 0, 1, 2023, 2024, 100_000] {
            for m in 1..=12 {
                let month = CalendarMonth::new(year, m);
                assert_eq!(next_month(previous_month(month)), month);
                assert_eq!(previous_month(next_month(month)), month);
            }
        }
    }

    #[test]
    fn test_navigation_stops_at_the_year_limits() {
        let last = CalendarMonth::new(i32::MAX, 12);
        assert_eq!(next_month(last), last);
        assert_eq!(previous_month(next_month(CalendarMonth::new(i32::MAX, 11))), CalendarMonth::new(i32::MAX, 11));

        let first = CalendarMonth::new(i32::MIN, 1);
        assert_eq!(previous_month(first), first);
        assert_eq!(next_month(previous_month(CalendarMonth::new(i32::MIN, 2))), CalendarMonth::new(i32::MIN, 2));
    }

    #[test]
    fn test_grid_beyond_chrono_range_has_no_trips() {
        let trips = vec![trip("Tokyo", date(2024, 1, 10), date(2024, 1, 15))];
        let month = CalendarMonth::new(500_000, 1);
        let cells = month_grid(month, &trips);
        assert_eq!(cells.len(), (month.starting_weekday() + 31) as usize);
        assert!(cells.iter().all(|c| c.trips().is_empty() && c.date().is_none()));
    }

    #[test]
    fn test_monday_first_grid() {
        // January 2024 starts on a Monday
        let month = CalendarMonth::new(2024, 1);
        assert_eq!(leading_padding(month, 1), 0);
        assert_eq!(leading_padding(month, 0), 1);
        // September 2024 starts on a Sunday
        assert_eq!(leading_padding(CalendarMonth::new(2024, 9), 1), 6);
    }

    #[test]
    fn test_trips_for_day() {
        let trips = vec![
            trip("A", date(2024, 1, 1), date(2024, 1, 5)),
            trip("B", date(2024, 1, 5), date(2024, 1, 9)),
        ];
        let month = CalendarMonth::new(2024, 1);
        let names: Vec<&str> = trips_for_day(month, 5, &trips).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(trips_for_day(month, 40, &trips).is_empty());
    }

    #[test]
    fn test_service_uses_settings() {
        let settings = Settings {
            first_day_of_week: 1,
            calendar_inline_trips: 3,
            ..Settings::default()
        };
        let service = CalendarService::new(&settings);
        let trips = vec![trip("A", date(2024, 1, 30), date(2024, 2, 2))];

        let view = service.month_view(CalendarMonth::new(2024, 1), &trips);
        assert_eq!(view.inline_cap, 3);
        assert_eq!(view.cells.len(), 31);
        assert_eq!(view.legend.len(), 1);

        let resolved = service.resolve_month(Some(CalendarMonth::new(2024, 11)), 2);
        assert_eq!(resolved, CalendarMonth::new(2025, 1));
    }
}
