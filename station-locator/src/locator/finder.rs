//! Minimum-road-distance station scan.

use tracing::{debug, warn};

use crate::domain::{Coordinates, RouteResult, Station};
use crate::routing::RouteError;

/// Trait for obtaining road-network routes.
///
/// This abstraction allows the finder to be tested with mock data.
pub trait RouteProvider {
    /// Get the driving route between two coordinates.
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<RouteResult, RouteError>;
}

/// A station annotated with its road distance from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStation {
    pub station: Station,
    /// Driving distance in meters.
    pub distance: f64,
}

/// Finds the reachable station with the smallest driving distance.
#[derive(Debug, Clone)]
pub struct NearestStationFinder<'a, P: RouteProvider> {
    provider: &'a P,
}

impl<'a, P: RouteProvider> NearestStationFinder<'a, P> {
    /// Create a finder over the given route provider.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Scan `stations` in order and return the one with the minimal
    /// driving distance from `user_location`.
    ///
    /// Stations whose routing query fails are logged and skipped; one
    /// unreachable station never aborts the scan. Exact distance ties
    /// keep the earliest-seen station (strict `<` comparison, a frozen
    /// contract relied on by the console's station ordering). Returns
    /// `None` for the `(0, 0)` sentinel location, an empty list, or a
    /// list where every query failed.
    pub async fn find_nearest(
        &self,
        user_location: Coordinates,
        stations: &[Station],
    ) -> Option<NearestStation> {
        if user_location.is_unset() {
            debug!("no valid user location supplied, skipping station scan");
            return None;
        }

        let mut shortest = f64::INFINITY;
        let mut best: Option<&Station> = None;

        // Sequential by design: one awaited query at a time keeps us
        // polite toward rate-limited public routing servers.
        for station in stations {
            match self.provider.route(user_location, station.coordinates).await {
                Ok(route) => {
                    if route.distance < shortest {
                        shortest = route.distance;
                        best = Some(station);
                    }
                }
                Err(e) => {
                    warn!(
                        station = %station.name,
                        error = %e,
                        "route lookup failed, excluding station"
                    );
                }
            }
        }

        best.map(|station| NearestStation {
            station: station.clone(),
            distance: shortest,
        })
    }
}
