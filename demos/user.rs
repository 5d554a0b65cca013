//! This example shows:
//! - Fetching a user by name
//! - Fetching the user's five most recent submissions at once

use dothn::item::Items;
use dothn::user::User;
use dothn::Client;

/// Type alias for simplifying error handling
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::new();

    let user = User::new(&client, "dang").await?;
    println!("{} has {} karma, joined {}", user.username(), user.karma(), user.created());

    let recent = user.submitted().unwrap_or_default();
    let recent = &recent[..recent.len().min(5)];
    for item in Items::new(&client, recent).await? {
        let kind = item.kind().map_or_else(|| "item".to_string(), |k| k.to_string());
        println!("{kind} {}: {}", item.id(), item.hn_url());
    }

    Ok(())
}
