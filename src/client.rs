mod search_query_builder;

pub use self::search_query_builder::SearchQueryBuilder;
use crate::{
    Error,
    SearchResults,
};
use reqwest::header::{
    HeaderMap,
    HeaderValue,
};
use std::time::Duration;
use url::Url;

// Default Header values
static USER_AGENT_VALUE: HeaderValue = HeaderValue::from_static("derpibooru-rs");
static ACCEPT_VALUE: HeaderValue = HeaderValue::from_static("application/json");

/// A derpibooru client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client.
    ///
    /// This probably shouldn't be used by you.
    pub client: reqwest::Client,

    /// The search endpoint
    search_url: Url,
}

impl Client {
    /// Make a new [`Client`] for derpibooru.org.
    pub fn new() -> Self {
        // The constant is a valid url.
        let search_url = Url::parse(crate::URL_SEARCH).unwrap();
        Self::with_search_url(search_url)
    }

    /// Make a new [`Client`] that searches using the given endpoint.
    ///
    /// This is useful for mirrors, or for pointing the client at a local server.
    pub fn with_search_url(search_url: Url) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(reqwest::header::USER_AGENT, USER_AGENT_VALUE.clone());
        default_headers.insert(reqwest::header::ACCEPT, ACCEPT_VALUE.clone());

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build derpibooru client");

        Self::from_reqwest(client, search_url)
    }

    /// Make a new [`Client`] from an already configured [`reqwest::Client`] and search endpoint.
    pub fn from_reqwest(client: reqwest::Client, search_url: Url) -> Self {
        Self { client, search_url }
    }

    /// Get the search endpoint this client uses.
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Create a builder for a search query.
    pub fn search_builder(&self) -> SearchQueryBuilder {
        SearchQueryBuilder::new(self)
    }

    /// Search for images by tags.
    ///
    /// Tags are separated by commas, and spaces inside of them are sent as `+`.
    /// Pass an empty `api_key` to search anonymously.
    pub async fn search(&self, tags: &str, api_key: &str) -> Result<SearchResults, Error> {
        self.search_builder()
            .tags(Some(tags))
            .key(Some(api_key))
            .execute()
            .await
    }

    /// Send a GET web request to a `url` and get the full body.
    ///
    /// Every failure is logged before it is returned.
    /// The url is stripped from http errors, since it may contain the api key.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                let error = error.without_url();
                tracing::warn!(%error, "failed to send search request");
                return Err(Error::Network(error));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "search request returned an invalid status");

            // Drain the body so the connection can be reused.
            // A failure here does not change the outcome.
            let _ = response.bytes().await;

            return Err(Error::InvalidStatus(status));
        }

        match response.bytes().await {
            Ok(body) => Ok(body.to_vec()),
            Err(error) => {
                let error = error.without_url();
                tracing::warn!(%error, %status, "failed to read search response body");
                Err(Error::BodyRead(error))
            }
        }
    }

    /// Send a GET web request to a `url` and parse the body as json.
    async fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.get_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|error| {
            tracing::warn!(%error, "failed to parse search response");
            Error::Decode(error)
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
