//! Community feed

use crate::models::CommunityPost;

/// Posts matching `query` in their content, author or trip name, newest first
pub fn search_posts<'a>(posts: &'a [CommunityPost], query: &str) -> Vec<&'a CommunityPost> {
    let query = query.trim().to_lowercase();
    let mut matches: Vec<&CommunityPost> = posts
        .iter()
        .filter(|post| {
            post.content.to_lowercase().contains(&query)
                || post.author_name.to_lowercase().contains(&query)
                || post
                    .trip_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
        })
        .collect();
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_feed_is_newest_first() {
        let data = Dataset::builtin();
        let feed = search_posts(&data.posts, "");
        assert_eq!(feed.len(), data.posts.len());
        assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_search_matches_trip_name() {
        let data = Dataset::builtin();
        let hits = search_posts(&data.posts, "paris adventure");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.trip_name.as_deref() == Some("Paris Adventure")
            || p.content.to_lowercase().contains("paris adventure")));
        assert!(search_posts(&data.posts, "zzz-no-match").is_empty());
    }
}
