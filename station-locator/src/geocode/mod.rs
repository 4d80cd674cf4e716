//! Address geocoding via a Nominatim-style text-search provider.
//!
//! The provider's own relevance ranking is trusted completely: the first
//! candidate wins, no local re-ranking. When a lookup comes back empty the
//! address is simplified (street-level detail dropped) and retried once,
//! and the multi-source chain adds a city-level last resort on top.

mod address;
mod client;
mod error;
mod resolver;

pub use address::{city_fallback, simplify};
pub use client::{GeocodeConfig, NominatimClient, SearchCandidate};
pub use error::GeocodeError;
pub use resolver::{Geocoder, SearchProvider};
