#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # dothn
//!
//! dothn is a convenient wrapper library around the Hacker News read-only API.
//!
//! This library can fetch:
//! - [`Item`]s, one at a time or many at once
//! - [`StoryIds`] for every story category
//! - [`User`]s
//! - [`Updates`] and the current max item ID
//!
//! Fetching many items fans out one request per ID concurrently.
//! The whole fetch fails if any single item fails.
//!
//! ## Example: Printing the titles of the top stories.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use dothn::item::Items;
//! use dothn::story::StoryCategory;
//! use dothn::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new();
//!     let stories = Items::stories_page(&client, StoryCategory::Top, 10, 0).await?;
//!
//!     for story in stories.iter() {
//!         println!("{}: {}", story.id(), story.title().unwrap_or("[no title]"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Item`]:     crate::models::item::Item
//! [`StoryIds`]: crate::models::story::StoryIds
//! [`User`]:     crate::models::user::User
//! [`Updates`]:  crate::models::updates::Updates

/// Client module contains [`Client`] for requesting data.
pub mod client;

/// Contains [`Error`]s that can be thrown by the libary.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod result;

pub use client::{Client, ClientBuilder};
pub use models::*;
pub use result::Result;
