//! OSRM HTTP client.

use crate::domain::{Coordinates, RouteResult};
use crate::locator::RouteProvider;

use super::error::RouteError;
use super::types::OsrmResponse;

/// Default base URL for the routing provider.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Base URL for the OSRM server (defaults to the public demo server)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteConfig {
    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the OSRM route service.
///
/// No retry, no caching: each call is one fresh request. Callers iterating
/// many coordinate pairs are responsible for their own throttling.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new routing client.
    pub fn new(config: RouteConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Query a driving route between two coordinates, with full geometry.
    ///
    /// The returned polyline is already transposed to `(lat, lng)` order.
    pub async fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<RouteResult, RouteError> {
        // OSRM takes waypoints in (lng, lat) order in the URL path.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, from.lng, from.lat, to.lng, to.lat
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RouteError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: OsrmResponse = serde_json::from_str(&body).map_err(|e| RouteError::Json {
            message: e.to_string(),
        })?;

        if parsed.code != "Ok" {
            return Err(RouteError::NoRoute);
        }

        let route = parsed.routes.into_iter().next().ok_or(RouteError::NoRoute)?;

        Ok(route.into_route_result())
    }
}

impl RouteProvider for OsrmClient {
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<RouteResult, RouteError> {
        OsrmClient::route(self, from, to).await
    }
}
