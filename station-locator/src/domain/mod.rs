//! Value types shared across the locator core.

mod coords;
mod route;
mod station;

pub use coords::Coordinates;
pub use route::RouteResult;
pub use station::Station;
