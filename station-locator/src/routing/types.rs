//! OSRM response DTOs and conversion to domain types.

use serde::Deserialize;

use crate::domain::{Coordinates, RouteResult};

/// Top-level OSRM route response.
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One route alternative.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Distance in meters.
    pub distance: f64,
    /// Duration in seconds.
    pub duration: f64,
    pub geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry, points in `(lng, lat)` order.
#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmRoute {
    /// Convert to the domain result, transposing every geometry point
    /// from OSRM's `(lng, lat)` to the crate-wide `(lat, lng)`.
    ///
    /// Getting this backwards silently corrupts every distance comparison
    /// and map render downstream, which is why it happens in exactly one
    /// place.
    pub fn into_route_result(self) -> RouteResult {
        let coordinates = self
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| Coordinates::new(lat, lng))
            .collect();

        RouteResult {
            distance: self.distance,
            duration: self.duration,
            coordinates,
        }
    }
}
