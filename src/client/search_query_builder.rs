use crate::{
    Client,
    Error,
    SearchResults,
};
use url::Url;

/// A builder for search api queries
#[derive(Debug, Copy, Clone)]
pub struct SearchQueryBuilder<'a> {
    /// The tags.
    pub tags: Option<&'a str>,

    /// The api key.
    ///
    /// An empty key is treated the same as no key.
    pub key: Option<&'a str>,

    /// The client ref.
    client: &'a Client,
}

impl<'a> SearchQueryBuilder<'a> {
    /// Make a new [`SearchQueryBuilder`].
    pub fn new(client: &'a Client) -> Self {
        Self {
            tags: None,
            key: None,

            client,
        }
    }

    /// Set the tags to search for.
    ///
    /// Tags are seperated by commas.
    /// Spaces are sent as `+` and all other characters are url-encoded.
    pub fn tags(&mut self, tags: Option<&'a str>) -> &mut Self {
        self.tags = tags;
        self
    }

    /// Set the api key.
    pub fn key(&mut self, key: Option<&'a str>) -> &mut Self {
        self.key = key;
        self
    }

    /// Get the api url.
    pub fn get_url(&self) -> Url {
        let mut url = self.client.search_url().clone();

        {
            // Form encoding turns spaces into `+`.
            let mut query_pairs_mut = url.query_pairs_mut();
            query_pairs_mut.append_pair("q", self.tags.unwrap_or(""));

            if let Some(key) = self.key.filter(|key| !key.is_empty()) {
                query_pairs_mut.append_pair("key", key);
            }
        }

        url
    }

    /// Execute the api query and get the results.
    pub async fn execute(&self) -> Result<SearchResults, Error> {
        let url = self.get_url();
        tracing::debug!(
            q = self.tags.unwrap_or(""),
            authenticated = self.key.is_some_and(|key| !key.is_empty()),
            "searching derpibooru"
        );

        self.client.get_json(url.as_str()).await
    }
}
