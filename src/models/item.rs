//! Items: stories, comments, jobs, polls and poll options.
//!
//! Everything on Hacker News is an item, identified by an increasing integer ID.
//!
//! # Example: Fetching a page of Ask HN stories
//! ```ignore
//! use dothn::{item::Items, story::StoryCategory, Client};
//!
//! let client = Client::new();
//!
//! // Stories 20 to 29 of the current Ask HN listing
//! let asks = Items::stories_page(&client, StoryCategory::Ask, 10, 20).await.unwrap();
//! for ask in asks.iter() {
//!     println!("{:?}", ask.title());
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::{
    client::HN_URL, error::Error, models::macros::str_opt_ref, result::Result, story::StoryCategory,
    story::StoryIds, Client,
};

/// The kinds of item the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A job posting.
    Job,
    /// A story: a link or a text post.
    Story,
    /// A comment on a story, poll or other comment.
    Comment,
    /// A poll.
    Poll,
    /// One option of a poll.
    #[serde(rename = "pollopt")]
    PollOpt,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemType::Job => "job",
            ItemType::Story => "story",
            ItemType::Comment => "comment",
            ItemType::Poll => "poll",
            ItemType::PollOpt => "pollopt",
        })
    }
}

/// A snapshot of a single item as the server held it when it was fetched.
///
/// Only `id` is guaranteed. Every other field is absent when the API leaves it out,
/// e.g. a deleted comment has no `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The item's unique ID.
    id: u64,

    /// Whether the item was deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,

    /// The kind of item.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<ItemType>,

    /// Username of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    by: Option<String>,

    /// Creation time, sent as UNIX seconds.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    time: Option<DateTime<Utc>>,

    /// Comment, story or poll text. HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    /// Whether the item is dead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dead: Option<bool>,

    /// The comment's parent: another comment or the story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<u64>,

    /// The poll a poll option belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    poll: Option<u64>,

    /// IDs of the item's comments, in ranked display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kids: Option<Vec<u64>>,

    /// The URL of the story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// The story's score, or the votes for a poll option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<i64>,

    /// Title of a story, poll or job. HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    /// IDs of a poll's options, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parts: Option<Vec<u64>>,

    /// Total comment count of a story or poll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    descendants: Option<u64>,
}

impl Item {
    /// Fetches the item with the given ID.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client fails to fetch the data,
    /// if the response does not decode as an item,
    /// or [`Error::NotFound`](crate::error::Error::NotFound) if no item has this ID.
    pub async fn new(client: &Client, id: u64) -> Result<Self> {
        client.fetch_json(&format!("item/{id}.json")).await
    }

    /// Fetches the ID of the most recent item.
    ///
    /// Walking backwards from here reaches every item on the site.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client fails to fetch the data
    /// or if the response is not an integer.
    pub async fn max_id(client: &Client) -> Result<u64> {
        client.fetch_json("maxitem.json").await
    }

    /// Returns the item's unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns whether the item was deleted (if set).
    pub fn deleted(&self) -> Option<bool> {
        self.deleted
    }

    /// Returns the kind of item (if present).
    pub fn kind(&self) -> Option<ItemType> {
        self.kind
    }

    /// Returns the author's username (if present).
    pub fn by(&self) -> Option<&str> {
        str_opt_ref!(self.by)
    }

    /// Returns when the item was created (if present).
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Returns the HTML text of the item (if present).
    pub fn text(&self) -> Option<&str> {
        str_opt_ref!(self.text)
    }

    /// Returns whether the item is dead (if set).
    pub fn dead(&self) -> Option<bool> {
        self.dead
    }

    /// Returns the parent item of a comment (if present).
    pub fn parent(&self) -> Option<u64> {
        self.parent
    }

    /// Returns the poll of a poll option (if present).
    pub fn poll(&self) -> Option<u64> {
        self.poll
    }

    /// Returns the IDs of the item's comments (if present).
    pub fn kids(&self) -> Option<&[u64]> {
        self.kids.as_deref()
    }

    /// Returns the URL of a story (if present).
    pub fn url(&self) -> Option<&str> {
        str_opt_ref!(self.url)
    }

    /// Returns the item's score (if present).
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Returns the HTML title (if present).
    pub fn title(&self) -> Option<&str> {
        str_opt_ref!(self.title)
    }

    /// Returns the IDs of a poll's options (if present).
    pub fn parts(&self) -> Option<&[u64]> {
        self.parts.as_deref()
    }

    /// Returns the total comment count (if present).
    pub fn descendants(&self) -> Option<u64> {
        self.descendants
    }

    /// Returns the item's page on the Hacker News website.
    pub fn hn_url(&self) -> String {
        format!("{HN_URL}/item?id={}", self.id)
    }
}

/// A batch of [`Item`]s fetched concurrently, in the order they were requested.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Items {
    items: Vec<Item>,
}

impl Items {
    /// Fetches every item in `ids` at once.
    ///
    /// One task is spawned per ID, without a cap on how many run together.
    /// The result keeps the order of `ids`. An empty `ids` makes no requests.
    ///
    /// # Errors
    ///
    /// Fails with the first error any single fetch returns.
    /// The remaining fetches are aborted and no partial batch is returned.
    pub async fn new(client: &Client, ids: &[u64]) -> Result<Self> {
        if ids.is_empty() {
            return Ok(Self::default());
        }

        log::debug!("fetching {} items", ids.len());

        let mut set = JoinSet::new();
        for (index, &id) in ids.iter().enumerate() {
            let client = client.clone();
            set.spawn(async move { Item::new(&client, id).await.map(|item| (index, item)) });
        }

        let mut slots: Vec<Option<Item>> = vec![None; ids.len()];
        while let Some(joined) = set.join_next().await {
            match joined.map_err(Error::from).and_then(|fetched| fetched) {
                Ok((index, item)) => slots[index] = Some(item),
                Err(e) => {
                    log::warn!("item fetch failed, aborting {} pending: {e}", set.len());
                    set.abort_all();
                    return Err(e);
                }
            }
        }

        let items = slots.into_iter().flatten().collect();
        Ok(Self { items })
    }

    /// Fetches every story currently listed in `category`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the ID list or any of the stories fails to fetch.
    pub async fn stories(client: &Client, category: StoryCategory) -> Result<Self> {
        let ids = StoryIds::new(client, category).await?;
        Self::new(client, &ids).await
    }

    /// Fetches `limit` stories of `category`, starting at position `offset` of its listing.
    ///
    /// The window is clamped to the listing, so it may yield fewer than `limit` stories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LimitExceeded`](crate::error::Error::LimitExceeded) without making
    /// any request if `limit` is above the category's cap.
    /// Otherwise fails if the ID list or any of the stories fails to fetch.
    pub async fn stories_page(
        client: &Client,
        category: StoryCategory,
        limit: usize,
        offset: usize,
    ) -> Result<Self> {
        category.check_limit(limit)?;
        let ids = StoryIds::new(client, category).await?;
        Self::new(client, ids.page(limit, offset)).await
    }

    /// Consumes the batch and returns the items.
    pub fn into_inner(self) -> Vec<Item> {
        self.items
    }
}

impl std::ops::Deref for Items {
    type Target = Vec<Item>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
