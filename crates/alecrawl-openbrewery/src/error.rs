use thiserror::Error;

/// Errors returned by the Open Brewery DB client.
#[derive(Debug, Error)]
pub enum OpenBreweryError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// non-2xx responses surfaced via `error_for_status`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client was configured with an unusable base URL.
    #[error("Open Brewery DB client error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
