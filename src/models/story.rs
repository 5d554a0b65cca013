//! Story listings and their ID lists.

use std::{fmt, str::FromStr};

use crate::{error::Error, result::Result, Client};
use serde::{Deserialize, Serialize};

/// The story listings the API publishes.
///
/// Each category has its own `{category}stories.json` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    /// Front page ranking. Up to 500 stories.
    Top,
    /// Newest stories. Up to 500 stories.
    New,
    /// Best stories.
    Best,
    /// Latest Ask HN stories. Up to 200 stories.
    Ask,
    /// Latest Show HN stories. Up to 200 stories.
    Show,
    /// Latest job postings. Up to 200 stories.
    Job,
}

impl StoryCategory {
    /// Every category, in the order the site lists them.
    pub const ALL: [StoryCategory; 6] = [
        StoryCategory::Top,
        StoryCategory::New,
        StoryCategory::Best,
        StoryCategory::Ask,
        StoryCategory::Show,
        StoryCategory::Job,
    ];

    /// Returns the lowercase name used in the endpoint path.
    pub fn as_str(self) -> &'static str {
        match self {
            StoryCategory::Top => "top",
            StoryCategory::New => "new",
            StoryCategory::Best => "best",
            StoryCategory::Ask => "ask",
            StoryCategory::Show => "show",
            StoryCategory::Job => "job",
        }
    }

    /// Returns the most stories the category holds, if the API documents a cap.
    pub fn max_limit(self) -> Option<usize> {
        match self {
            StoryCategory::Top | StoryCategory::New => Some(500),
            StoryCategory::Ask | StoryCategory::Show | StoryCategory::Job => Some(200),
            StoryCategory::Best => None,
        }
    }

    /// Checks `limit` against [`max_limit`](Self::max_limit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LimitExceeded`] if `limit` is above the category's cap.
    pub fn check_limit(self, limit: usize) -> Result<()> {
        match self.max_limit() {
            Some(max) if limit > max => Err(Error::LimitExceeded {
                category: self,
                max,
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn path(self) -> String {
        format!("{}stories.json", self.as_str())
    }
}

impl fmt::Display for StoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoryCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StoryCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::ParseCategory(s.to_string()))
    }
}

/// The IDs of the stories in a [`StoryCategory`], in the order the server ranks them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryIds {
    category: StoryCategory,
    ids: Vec<u64>,
}

impl StoryIds {
    /// Constructs `StoryIds` by fetching the category's ID list.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client fails to fetch the data
    /// or if the response is not a list of IDs.
    pub async fn new(client: &Client, category: StoryCategory) -> Result<Self> {
        let ids: Vec<u64> = client.fetch_json(&category.path()).await?;
        log::debug!("{} {category} story ids", ids.len());
        Ok(Self { category, ids })
    }

    /// Returns the category these IDs were fetched for.
    pub fn category(&self) -> StoryCategory {
        self.category
    }

    /// Returns the IDs at positions `[offset, offset + limit)`.
    ///
    /// The window is clamped to the list, so an offset past the end gives an empty slice.
    pub fn page(&self, limit: usize, offset: usize) -> &[u64] {
        let start = offset.min(self.ids.len());
        let end = start.saturating_add(limit).min(self.ids.len());
        &self.ids[start..end]
    }

    /// Consumes the list and returns the IDs.
    pub fn into_inner(self) -> Vec<u64> {
        self.ids
    }
}

impl std::ops::Deref for StoryIds {
    type Target = Vec<u64>;

    fn deref(&self) -> &Self::Target {
        &self.ids
    }
}
