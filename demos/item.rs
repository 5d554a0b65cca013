//! Example demonstrating how to fetch single items using dothn
//!
//! This example shows:
//! - Creating a dothn client
//! - Fetching the newest item on the site
//! - Fetching the very first story and printing its fields

use dothn::item::Item;
use dothn::Client;
use simple_logger::SimpleLogger;

/// Type alias for simplifying error handling
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    // See the requests being made
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let client = Client::new();

    let max = Item::max_id(&client).await?;
    println!("Newest item: {max}");

    // Item 1 is the first story ever submitted
    let first = Item::new(&client, 1).await?;
    println!("Title: {}", first.title().unwrap_or("[none]"));
    println!("By:    {}", first.by().unwrap_or("[unknown]"));
    println!("Score: {}", first.score().unwrap_or_default());
    if let Some(time) = first.time() {
        println!("Time:  {time}");
    }
    println!("Link:  {}", first.hn_url());

    Ok(())
}
