//! Recently changed items and profiles.

use serde::{Deserialize, Serialize};

use crate::{result::Result, Client};

/// The items and profiles that changed recently.
///
/// Neither list is ordered, and consecutive snapshots may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Updates {
    items: Vec<u64>,
    profiles: Vec<String>,
}

impl Updates {
    /// Fetches the current update snapshot.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client fails to fetch the data
    /// or if the response does not decode.
    pub async fn new(client: &Client) -> Result<Self> {
        client.fetch_json("updates.json").await
    }

    /// Returns the IDs of recently changed items.
    pub fn items(&self) -> &[u64] {
        &self.items
    }

    /// Returns the usernames of recently changed profiles.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }
}
