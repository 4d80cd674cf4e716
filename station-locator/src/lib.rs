//! Station-locating core for an EV battery-swap network.
//!
//! Answers: "which swap station can this driver actually reach fastest?"
//! Free-text addresses are geocoded into coordinates, an OSRM server
//! provides road-network driving distances, and the locator scans the
//! candidate stations for the nearest reachable one.

pub mod domain;
pub mod geocode;
pub mod locator;
pub mod routing;
