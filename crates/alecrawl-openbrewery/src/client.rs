//! HTTP client for the Open Brewery DB REST API.
//!
//! Wraps `reqwest` with request timeouts, a stable user agent, transient
//! retry, and typed response deserialization. The API is anonymous; there
//! is no key to manage.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::OpenBreweryError;
use crate::retry::retry_with_backoff;
use crate::types::BreweryRecord;

const DEFAULT_BASE_URL: &str = "https://api.openbrewerydb.org/v1/";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Client for the Open Brewery DB REST API.
///
/// Manages the HTTP client and base URL. Use [`OpenBreweryClient::new`]
/// for production or [`OpenBreweryClient::with_base_url`] to point at a
/// mock server in tests.
pub struct OpenBreweryClient {
    client: Client,
    breweries_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl OpenBreweryClient {
    /// Creates a new client pointed at the production Open Brewery DB API.
    ///
    /// # Errors
    ///
    /// Returns [`OpenBreweryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, OpenBreweryError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OpenBreweryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OpenBreweryError::Api`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OpenBreweryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining the endpoint path appends a segment rather than replacing
        // the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| OpenBreweryError::Api(format!("invalid base URL '{base_url}': {e}")))?;
        let breweries_url = base_url
            .join("breweries")
            .map_err(|e| OpenBreweryError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            breweries_url,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Overrides the transient-error retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Lists breweries in a city, optionally narrowed to a state.
    ///
    /// Calls `GET /breweries?by_city={city}&per_page={per_page}`, adding
    /// `by_state` when given. Transient failures are retried per the
    /// configured policy.
    ///
    /// # Errors
    ///
    /// - [`OpenBreweryError::Http`] on network failure or non-2xx HTTP status.
    /// - [`OpenBreweryError::Deserialize`] if the response body is not the
    ///   expected JSON array of brewery records.
    pub async fn list_by_city(
        &self,
        city: &str,
        state: Option<&str>,
        per_page: u32,
    ) -> Result<Vec<BreweryRecord>, OpenBreweryError> {
        let url = self.build_list_url(city, state, per_page);
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.fetch_breweries(&url)
        })
        .await
    }

    /// Builds the full list URL with properly percent-encoded query parameters.
    fn build_list_url(&self, city: &str, state: Option<&str>, per_page: u32) -> Url {
        let mut url = self.breweries_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("by_city", city);
            if let Some(state) = state {
                pairs.append_pair("by_state", state);
            }
            pairs.append_pair("per_page", &per_page.to_string());
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as a brewery list.
    async fn fetch_breweries(&self, url: &Url) -> Result<Vec<BreweryRecord>, OpenBreweryError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| OpenBreweryError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
