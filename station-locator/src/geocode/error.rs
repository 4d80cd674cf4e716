//! Geocoding provider error types.
//!
//! These never escape the [`Geocoder`](super::Geocoder): every variant is
//! logged and normalized to "no coordinates found". They exist so the logs
//! can tell a rate limit from a parse failure.

/// Errors from the geocoding HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the provider (HTTP 429)
    #[error("rate limited by geocoding provider")]
    RateLimited,

    /// Access denied (HTTP 403, usually a usage-policy violation)
    #[error("access denied by geocoding provider")]
    Forbidden,

    /// Provider returned an error status
    #[error("geocoding API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the provider response
    #[error("geocoding response parse error: {message}")]
    Json { message: String },
}
