//! Nearest-station selection.
//!
//! A sequential linear scan over candidate stations, one routing query
//! per station. Sequential on purpose: the public routing servers are
//! rate-limited, and a driver's candidate list is small.

mod finder;

pub use finder::{NearestStation, NearestStationFinder, RouteProvider};
