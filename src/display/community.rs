//! Community feed formatting

use crate::models::CommunityPost;

pub fn format_feed(posts: &[&CommunityPost]) -> String {
    if posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{}  {}",
            post.author_name,
            post.created_at.format("%Y-%m-%d")
        ));
        if let Some(trip) = &post.trip_name {
            output.push_str(&format!("  ({})", trip));
        }
        output.push('\n');
        output.push_str(&format!("  {}\n", post.content));
        output.push_str(&format!("  {} likes, {} comments\n\n", post.likes, post.comments));
    }
    output
}
