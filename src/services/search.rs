//! Search over the static city and activity catalogue

use crate::models::{Activity, City};

/// Cities whose name or country contains `query`, case-insensitive
pub fn search_cities<'a>(cities: &'a [City], query: &str) -> Vec<&'a City> {
    let query = query.trim().to_lowercase();
    cities
        .iter()
        .filter(|city| {
            city.name.to_lowercase().contains(&query) || city.country.to_lowercase().contains(&query)
        })
        .collect()
}

/// Activities whose name or type contains `query`, case-insensitive
pub fn search_activities<'a>(activities: &'a [Activity], query: &str) -> Vec<&'a Activity> {
    let query = query.trim().to_lowercase();
    activities
        .iter()
        .filter(|activity| {
            activity.name.to_lowercase().contains(&query)
                || activity.activity_type.as_str().contains(&query)
        })
        .collect()
}

/// The `limit` most popular cities, most popular first
pub fn top_destinations(cities: &[City], limit: usize) -> Vec<&City> {
    let mut ranked: Vec<&City> = cities.iter().collect();
    ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}
