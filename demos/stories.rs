//! This example shows:
//! - Creating a dothn client with a request timeout
//! - Fetching the second page of the top stories
//! - Printing each story's score and title

use std::time::Duration;

use dothn::item::Items;
use dothn::story::StoryCategory;
use dothn::Client;

/// Type alias for simplifying error handling
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const PAGE_SIZE: usize = 30;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

    // Category can be picked on the command line, e.g. `cargo run --example stories -- ask`
    let category = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => StoryCategory::Top,
    };

    let stories = Items::stories_page(&client, category, PAGE_SIZE, PAGE_SIZE).await?;

    for (rank, story) in stories.iter().enumerate() {
        println!(
            "{:>3}. [{:>4}] {}",
            rank + PAGE_SIZE + 1,
            story.score().unwrap_or_default(),
            story.title().unwrap_or("[no title]")
        );
    }

    Ok(())
}
