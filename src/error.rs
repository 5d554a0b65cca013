use thiserror::Error;

use crate::story::StoryCategory;

/// Everything that can go wrong while talking to the API.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected type.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with `null`: there is no such item or user.
    #[error("no resource found at {url}")]
    NotFound {
        /// The URL that was requested.
        url: String,
    },

    /// The API answered with a status other than `200 OK`.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// More stories were requested than the category holds.
    #[error("maximum limit for story category '{category}' is {max}")]
    LimitExceeded {
        /// The category the limit applies to.
        category: StoryCategory,
        /// The category's maximum.
        max: usize,
    },

    /// A fetch task panicked or was cancelled.
    #[error("{0}")]
    Join(#[from] tokio::task::JoinError),

    /// A string did not name a story category.
    #[error("unknown story category: {0}")]
    ParseCategory(String),
}
