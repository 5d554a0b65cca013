use std::time::Duration;

use crate::{error::Error, result::Result};
use reqwest::{header::USER_AGENT, Client as ReqwestClient};
use serde::de::DeserializeOwned;

/// Root of the Hacker News v0 API.
pub const API_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Root of the Hacker News website.
pub const HN_URL: &str = "https://news.ycombinator.com";

const DEFAULT_USER_AGENT: &str = "DothnClient/1.0";

/// Handle for all requests made by the library.
///
/// The underlying connection pool is shared between clones,
/// so build one `Client` and pass it (or clones of it) around.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    base_url: String,
    user_agent: String,
}

impl Client {
    /// Constructs a `Client` talking to the public API with default settings.
    pub fn new() -> Client {
        Client {
            http: ReqwestClient::new(),
            base_url: API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Returns a [`ClientBuilder`] for configuring a `Client`.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Returns the API root every request is made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetches `path` relative to the API root and decodes the body.
    ///
    /// The API answers unknown IDs with `200 OK` and a `null` body,
    /// which is reported as [`Error::NotFound`].
    pub(crate) async fn fetch_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        use reqwest::StatusCode;

        let url = self.url(path);
        let response = {
            let builder = self.http.get(&url).header(USER_AGENT, &self.user_agent);
            log::info!("request for {url} dispatched");
            builder.send().await?
        };

        log::debug!("response status for {url}: {}", response.status());

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;
                serde_json::from_slice::<Option<T>>(&body)?.ok_or(Error::NotFound { url })
            }
            code => Err(Error::UnexpectedStatus(code)),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures and builds a [`Client`].
///
/// ```no_run
/// # fn main() -> dothn::Result<()> {
/// use std::time::Duration;
///
/// let client = dothn::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .user_agent("my-reader/0.1")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Sets the API root. A trailing `/` is added if missing.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Sets a timeout for each whole request, from connecting until the body is read.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`Client`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the HTTP transport cannot be initialized.
    pub fn build(self) -> Result<Client> {
        let mut http = ReqwestClient::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            http: http.build()?,
            base_url: self.base_url,
            user_agent: self.user_agent,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        ClientBuilder {
            base_url: API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
