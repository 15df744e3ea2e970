//! Community feed command

use clap::Args;

use crate::dataset::Dataset;
use crate::display::format_feed;
use crate::error::GlobeResult;
use crate::services::community::search_posts;

#[derive(Args, Debug)]
pub struct CommunityArgs {
    /// Only posts whose content, author or trip contains this text
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Handle the community command
pub fn handle_community_command(data: &Dataset, args: CommunityArgs) -> GlobeResult<()> {
    print!("{}", format_feed(&search_posts(&data.posts, &args.search)));
    Ok(())
}
