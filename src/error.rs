/// Library Error Type
///
/// There is one variant per stage of a search,
/// so callers can tell where a request died.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent, or the connection failed.
    ///
    /// The url is removed from the inner error, so it never carries the api key.
    #[error("failed to send request")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("invalid status {0}")]
    InvalidStatus(reqwest::StatusCode),

    /// The response body could not be fully read
    #[error("failed to read response body")]
    BodyRead(#[source] reqwest::Error),

    /// The response body was not valid search results json
    #[error("failed to parse json")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Whether this error came from the network layer,
    /// either while sending the request or reading the body.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::BodyRead(_))
    }
}
