//! Users with public activity on the site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{client::HN_URL, models::macros::str_opt_ref, result::Result, Client};

/// A Hacker News user.
///
/// Only users with public activity are available through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The case-sensitive username.
    id: String,

    /// Account creation time, sent as UNIX seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    created: DateTime<Utc>,

    /// The user's karma.
    karma: i64,

    /// Self-description. HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    about: Option<String>,

    /// IDs of the user's stories, polls and comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    submitted: Option<Vec<u64>>,
}

impl User {
    /// Fetches the user named `username`.
    ///
    /// The name is sent exactly as given; usernames are case-sensitive.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client fails to fetch the data,
    /// if the response does not decode as a user,
    /// or [`Error::NotFound`](crate::error::Error::NotFound) if there is no such user.
    pub async fn new(client: &Client, username: &str) -> Result<Self> {
        client.fetch_json(&format!("user/{username}.json")).await
    }

    /// Returns the user's unique, case-sensitive name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Same as [`id`](Self::id).
    pub fn username(&self) -> &str {
        &self.id
    }

    /// Returns when the account was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the user's karma.
    pub fn karma(&self) -> i64 {
        self.karma
    }

    /// Returns the user's self-description (if present).
    pub fn about(&self) -> Option<&str> {
        str_opt_ref!(self.about)
    }

    /// Returns the IDs of the user's submissions (if present).
    pub fn submitted(&self) -> Option<&[u64]> {
        self.submitted.as_deref()
    }

    /// Returns the user's page on the Hacker News website.
    pub fn hn_url(&self) -> String {
        format!("{HN_URL}/user?id={}", self.id)
    }
}
