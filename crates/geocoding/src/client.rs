//! Nominatim search client

use crate::config::ClientConfig;
use crate::error::GeocodeError;
use crate::provider::{GeocodingProvider, Place};
use ferias_core::rate_limit::RateLimiter;
use ferias_core::{Error, ErrorCode};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// HTTP client for a Nominatim-compatible `/search` endpoint
///
/// Adds on top of `reqwest`:
/// - A mandatory User-Agent and per-request timeout
/// - Rate limiting that queues requests instead of rejecting them
/// - Request correlation IDs for tracing
#[derive(Clone)]
pub struct NominatimClient {
    inner: Client,
    search_url: Url,
    rate_limit_key: String,
    rate_limiter: RateLimiter,
    config: Arc<ClientConfig>,
}

impl NominatimClient {
    /// Create a client with defaults plus environment overrides
    pub fn new() -> ferias_core::Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client with specific configuration
    pub fn with_config(config: ClientConfig) -> ferias_core::Result<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("es"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                Error::new(ErrorCode::ConfigError, "Failed to build HTTP client").with_source(e)
            })?;

        let search_url = config.search_url()?;
        let rate_limit_key = search_url.host_str().unwrap_or("default").to_string();
        let rate_limiter = RateLimiter::new(config.rate_limit.clone());

        Ok(Self {
            inner,
            search_url,
            rate_limit_key,
            rate_limiter,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of the search endpoint
    #[must_use]
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Wait until the rate limiter allows another request
    async fn throttle(&self, request_id: &str) {
        let wait = self.rate_limiter.reserve(&self.rate_limit_key);
        if !wait.is_zero() {
            debug!(
                request_id = %request_id,
                wait_ms = wait.as_millis(),
                "Waiting for geocoder rate limit"
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Run one search request; no retries
    #[instrument(skip(self), fields(request_id))]
    pub async fn search_places(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        self.throttle(&request_id).await;

        let start = Instant::now();
        let response = self
            .inner
            .get(self.search_url.clone())
            .header(X_REQUEST_ID, &request_id)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "Geocoder request failed");
                GeocodeError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                "Geocoder returned an error status"
            );
            return Err(GeocodeError::provider(format!("HTTP {status}")));
        }

        let places: Vec<Place> = response.json().await.map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Geocoder body was not a result list");
            GeocodeError::provider(format!("unreadable response body: {e}"))
        })?;

        debug!(
            request_id = %request_id,
            results = places.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Geocoder request succeeded"
        );

        Ok(places)
    }
}

impl GeocodingProvider for NominatimClient {
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        self.search_places(query).await
    }
}

impl std::fmt::Debug for NominatimClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimClient")
            .field("search_url", &self.search_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
