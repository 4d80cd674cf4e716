//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
///
/// The crate-wide convention is `(lat, lng)` order. The routing provider
/// speaks `(lng, lat)`; the routing client transposes at the boundary so
/// no other module ever sees provider order.
///
/// `(0.0, 0.0)` is a sentinel meaning "no location available" — stations
/// created without coordinates and drivers who denied location access both
/// surface as this value. See [`Coordinates::is_unset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this is the `(0, 0)` "no location" sentinel.
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_unset() {
        assert!(Coordinates::new(0.0, 0.0).is_unset());
    }

    #[test]
    fn real_coordinates_are_set() {
        assert!(!Coordinates::new(21.0278, 105.8342).is_unset());
        // A zero on only one axis is a legitimate location (equator/meridian).
        assert!(!Coordinates::new(0.0, 105.8342).is_unset());
        assert!(!Coordinates::new(21.0278, 0.0).is_unset());
    }

    #[test]
    fn display_is_lat_comma_lng() {
        let c = Coordinates::new(21.0278, 105.8342);
        assert_eq!(c.to_string(), "21.0278,105.8342");
    }

    #[test]
    fn deserializes_from_crud_json() {
        let c: Coordinates = serde_json::from_str(r#"{"lat":21.0,"lng":105.8}"#).unwrap();
        assert_eq!(c, Coordinates::new(21.0, 105.8));
    }
}
