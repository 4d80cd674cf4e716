//! Road-network routing via an OSRM-compatible server.
//!
//! One query per call, no retry and no caching. The provider speaks
//! `(lng, lat)`; this module owns the transposition to the crate-wide
//! `(lat, lng)` convention so nothing downstream ever sees raw provider
//! order.

mod client;
mod error;
mod types;

pub use client::{OsrmClient, RouteConfig};
pub use error::RouteError;
pub use types::{OsrmGeometry, OsrmResponse, OsrmRoute};
