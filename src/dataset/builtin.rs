//! Built-in mock travel data

use chrono::{DateTime, NaiveDate, Utc};

use super::Dataset;
use crate::models::{
    Activity, ActivityId, ActivityType, City, CityId, CommunityPost, DayPlan, ItemId, Itinerary,
    ItineraryItem, Money, PostId, Trip, TripId, TripStatus, User, UserId,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(9, 0, 0)
        .expect("fixture times are valid")
        .and_utc()
}

pub(super) fn dataset() -> Dataset {
    Dataset {
        users: users(),
        trips: trips(),
        cities: cities(),
        activities: activities(),
        posts: posts(),
        itineraries: itineraries(),
    }
}

fn user(seq: u32, email: &str, first: &str, last: &str, city: &str, country: &str, joined: DateTime<Utc>) -> User {
    User {
        id: UserId::fixture(seq),
        email: email.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: None,
        city: Some(city.to_string()),
        country: Some(country.to_string()),
        additional_info: None,
        created_at: joined,
    }
}

fn users() -> Vec<User> {
    vec![
        user(1, "john@example.com", "John", "Traveler", "San Francisco", "USA", at(2023, 8, 14)),
        user(2, "maya@example.com", "Maya", "Lopez", "Madrid", "Spain", at(2023, 9, 2)),
        user(3, "liam@example.com", "Liam", "Chen", "Vancouver", "Canada", at(2023, 9, 21)),
        user(4, "sofia@example.com", "Sofia", "Rossi", "Milan", "Italy", at(2023, 11, 5)),
        user(5, "ken@example.com", "Ken", "Sato", "Osaka", "Japan", at(2024, 1, 3)),
    ]
}

struct TripSeed {
    seq: u32,
    owner: u32,
    name: &'static str,
    description: &'static str,
    start: NaiveDate,
    end: NaiveDate,
    status: TripStatus,
    budget: i64,
    destinations: &'static [&'static str],
}

fn trips() -> Vec<Trip> {
    let seeds = [
        TripSeed {
            seq: 1,
            owner: 1,
            name: "Paris Adventure",
            description: "Museums, cafés and a river cruise in the City of Light",
            start: date(2024, 1, 10),
            end: date(2024, 1, 15),
            status: TripStatus::Ongoing,
            budget: 2500,
            destinations: &["Paris"],
        },
        TripSeed {
            seq: 2,
            owner: 1,
            name: "Tokyo Explorer",
            description: "Street food, temples and a day trip to Kyoto",
            start: date(2024, 1, 12),
            end: date(2024, 1, 20),
            status: TripStatus::Upcoming,
            budget: 4000,
            destinations: &["Tokyo", "Kyoto"],
        },
        TripSeed {
            seq: 3,
            owner: 2,
            name: "Bali Retreat",
            description: "Surf mornings and slow afternoons",
            start: date(2024, 1, 14),
            end: date(2024, 1, 28),
            status: TripStatus::Upcoming,
            budget: 1800,
            destinations: &["Bali"],
        },
        TripSeed {
            seq: 4,
            owner: 1,
            name: "New Year in New York",
            description: "Times Square countdown and Broadway",
            start: date(2023, 12, 28),
            end: date(2024, 1, 3),
            status: TripStatus::Completed,
            budget: 3200,
            destinations: &["New York"],
        },
        TripSeed {
            seq: 5,
            owner: 4,
            name: "Rome Getaway",
            description: "Ancient ruins and too much gelato",
            start: date(2023, 11, 2),
            end: date(2023, 11, 8),
            status: TripStatus::Completed,
            budget: 1500,
            destinations: &["Rome"],
        },
        TripSeed {
            seq: 6,
            owner: 3,
            name: "Iceland Road Trip",
            description: "Ring road, glaciers and hot springs",
            start: date(2023, 9, 5),
            end: date(2023, 9, 14),
            status: TripStatus::Completed,
            budget: 3600,
            destinations: &["Reykjavik"],
        },
        TripSeed {
            seq: 7,
            owner: 2,
            name: "Spanish Summer",
            description: "Tapas crawl from Barcelona to Paris",
            start: date(2024, 6, 20),
            end: date(2024, 7, 5),
            status: TripStatus::Upcoming,
            budget: 2200,
            destinations: &["Barcelona", "Paris"],
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Trip {
            id: TripId::fixture(seed.seq),
            owner: UserId::fixture(seed.owner),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            start_date: seed.start,
            end_date: seed.end,
            status: seed.status,
            total_budget: Some(Money::from_units(seed.budget)),
            destinations: seed.destinations.iter().map(|d| d.to_string()).collect(),
            is_public: seed.seq % 2 == 1,
        })
        .collect()
}

fn cities() -> Vec<City> {
    let rows: [(u32, &str, &str, &str, u8, u32, &str); 8] = [
        (1, "Paris", "France", "Europe", 4, 98, "Art, food and the Eiffel Tower"),
        (2, "Tokyo", "Japan", "Asia", 4, 95, "Neon nights and quiet shrines"),
        (3, "Kyoto", "Japan", "Asia", 3, 88, "Temples, gardens and tea houses"),
        (4, "Rome", "Italy", "Europe", 3, 92, "Two thousand years of history"),
        (5, "Bali", "Indonesia", "Asia", 2, 90, "Beaches, rice terraces and surf"),
        (6, "New York", "USA", "North America", 5, 94, "The city that never sleeps"),
        (7, "Reykjavik", "Iceland", "Europe", 5, 75, "Gateway to glaciers and geysers"),
        (8, "Barcelona", "Spain", "Europe", 3, 89, "Gaudí, beaches and late dinners"),
    ];

    rows.into_iter()
        .map(|(seq, name, country, region, cost_index, popularity, description)| City {
            id: CityId::fixture(seq),
            name: name.to_string(),
            country: country.to_string(),
            region: region.to_string(),
            description: description.to_string(),
            cost_index,
            popularity,
        })
        .collect()
}

fn activities() -> Vec<Activity> {
    use ActivityType::*;

    let rows: [(u32, u32, &str, ActivityType, f32, i64, f32); 12] = [
        (1, 1, "Eiffel Tower visit", Sightseeing, 2.0, 30, 4.7),
        (2, 1, "Louvre Museum tour", Culture, 3.0, 20, 4.8),
        (3, 1, "Seine River cruise", Sightseeing, 1.5, 45, 4.5),
        (4, 2, "Sushi making class", Food, 3.0, 80, 4.9),
        (5, 2, "Shibuya street food tour", Food, 2.5, 60, 4.6),
        (6, 3, "Fushimi Inari hike", Adventure, 3.0, 0, 4.8),
        (7, 4, "Colosseum guided tour", Culture, 2.5, 35, 4.7),
        (8, 5, "Surf lesson", Adventure, 2.0, 40, 4.4),
        (9, 5, "Balinese spa day", Relaxation, 4.0, 55, 4.6),
        (10, 6, "Broadway show", Culture, 3.0, 150, 4.8),
        (11, 6, "Fifth Avenue shopping", Shopping, 4.0, 0, 4.1),
        (12, 7, "Glacier hike", Adventure, 5.0, 120, 4.9),
    ];

    rows.into_iter()
        .map(|(seq, city, name, activity_type, hours, cost, rating)| Activity {
            id: ActivityId::fixture(seq),
            city_id: CityId::fixture(city),
            name: name.to_string(),
            activity_type,
            description: String::new(),
            duration_hours: hours,
            cost: Money::from_units(cost),
            rating: Some(rating),
        })
        .collect()
}

fn posts() -> Vec<CommunityPost> {
    let rows: [(u32, u32, &str, Option<(u32, &str)>, &str, u32, u32, DateTime<Utc>); 4] = [
        (
            1,
            1,
            "John Traveler",
            Some((1, "Paris Adventure")),
            "Sunset from the Eiffel Tower was worth every step. Book the evening slot!",
            42,
            7,
            at(2024, 1, 12),
        ),
        (
            2,
            4,
            "Sofia Rossi",
            Some((5, "Rome Getaway")),
            "Skip-the-line tickets for the Colosseum saved us two hours.",
            31,
            4,
            at(2023, 11, 9),
        ),
        (
            3,
            3,
            "Liam Chen",
            Some((6, "Iceland Road Trip")),
            "Rent a 4x4 if you plan to leave the ring road. Trust me.",
            58,
            12,
            at(2023, 9, 16),
        ),
        (
            4,
            2,
            "Maya Lopez",
            None,
            "Looking for a surf school recommendation in Canggu, anyone?",
            9,
            5,
            at(2024, 1, 8),
        ),
    ];

    rows.into_iter()
        .map(|(seq, author, author_name, trip, content, likes, comments, created_at)| CommunityPost {
            id: PostId::fixture(seq),
            author_id: UserId::fixture(author),
            author_name: author_name.to_string(),
            trip_id: trip.map(|(trip_seq, _)| TripId::fixture(trip_seq)),
            trip_name: trip.map(|(_, name)| name.to_string()),
            content: content.to_string(),
            likes,
            comments,
            created_at,
        })
        .collect()
}

fn day(day: u32, first_item: u32, items: &[(&str, i64)]) -> DayPlan {
    DayPlan::with_items(
        day,
        items
            .iter()
            .zip(first_item..)
            .map(|((activity, expense), seq)| ItineraryItem {
                id: ItemId::fixture(seq),
                activity: activity.to_string(),
                expense: Money::from_units(*expense),
            })
            .collect(),
    )
}

fn itineraries() -> Vec<Itinerary> {
    vec![
        Itinerary {
            trip_id: TripId::fixture(1),
            days: vec![
                day(
                    1,
                    1,
                    &[
                        ("Arrival and hotel check-in", 150),
                        ("Eiffel Tower visit", 30),
                        ("Dinner at local restaurant", 80),
                    ],
                ),
                day(
                    2,
                    4,
                    &[
                        ("Louvre Museum tour", 20),
                        ("Seine River cruise", 45),
                        ("Shopping at Champs-Élysées", 200),
                        ("Evening show at Moulin Rouge", 120),
                    ],
                ),
            ],
        },
        Itinerary {
            trip_id: TripId::fixture(2),
            days: vec![
                day(1, 8, &[("Arrival and hotel check-in", 180), ("Shibuya street food tour", 60)]),
                day(2, 10, &[("Sushi making class", 80), ("Tokyo Skytree", 25)]),
                day(3, 12, &[("Shinkansen to Kyoto", 130), ("Fushimi Inari hike", 0)]),
            ],
        },
    ]
}
