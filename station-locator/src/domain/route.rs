//! Routing query result.

use super::Coordinates;

/// The result of one road-network routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Driving distance in meters.
    pub distance: f64,
    /// Driving duration in seconds.
    pub duration: f64,
    /// Path polyline in traversal order, `(lat, lng)` convention.
    pub coordinates: Vec<Coordinates>,
}
