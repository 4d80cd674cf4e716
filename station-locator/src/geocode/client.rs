//! Nominatim text-search HTTP client.

use serde::Deserialize;

use super::error::GeocodeError;
use super::resolver::SearchProvider;

/// Default base URL for the geocoding provider.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default country filter. The swap network operates in Vietnam only.
const DEFAULT_COUNTRY: &str = "vn";

/// Default number of candidates to request per query.
const DEFAULT_LIMIT: u8 = 5;

/// One candidate returned by the text-search endpoint.
///
/// Nominatim serializes coordinates as strings; parsing happens in the
/// [`Geocoder`](super::Geocoder), not here.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCandidate {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the provider (defaults to public Nominatim)
    pub base_url: String,
    /// ISO 3166-1 alpha-2 country filter
    pub country_code: String,
    /// Maximum candidates to request per query
    pub limit: u8,
    /// Identifying User-Agent, required by the Nominatim usage policy
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the country filter.
    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY.to_string(),
            limit: DEFAULT_LIMIT,
            user_agent: concat!("station-locator/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    country_code: String,
    limit: u8,
}

impl NominatimClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            country_code: config.country_code,
            limit: config.limit,
        })
    }

    /// Run one text-search query, returning the provider's ranked candidates.
    ///
    /// An empty vector means the provider found nothing; fallback policy
    /// lives in the [`Geocoder`](super::Geocoder), not here.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.to_string()),
                ("format", "jsonv2".to_string()),
                ("limit", self.limit.to_string()),
                ("countrycodes", self.country_code.clone()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Forbidden);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })
    }
}

impl SearchProvider for NominatimClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, GeocodeError> {
        NominatimClient::search(self, query).await
    }
}
