//! Routing provider error types.

/// Errors from the routing HTTP client.
///
/// Propagated to the immediate caller; the nearest-station finder catches
/// these per station and excludes the station from comparison.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the provider (HTTP 429)
    #[error("rate limited by routing provider")]
    RateLimited,

    /// Provider found no route between the two coordinates
    #[error("no route found between the given coordinates")]
    NoRoute,

    /// Provider returned an error status
    #[error("routing API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the provider response
    #[error("routing response parse error: {message}")]
    Json { message: String },
}
