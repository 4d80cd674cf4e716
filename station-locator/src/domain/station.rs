//! Battery-swap station record.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A battery-swap station, as supplied by the stations REST resource.
///
/// Stations are read-only inputs here: the management console owns their
/// lifecycle, this core only ranks them by road distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

impl Station {
    /// Create a station record.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            coordinates,
        }
    }
}
