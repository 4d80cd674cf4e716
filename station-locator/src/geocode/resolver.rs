//! Address-to-coordinates resolution with a degrading fallback chain.

use tracing::{debug, warn};

use crate::domain::Coordinates;

use super::address::{city_fallback, simplify};
use super::client::SearchCandidate;
use super::error::GeocodeError;

/// Maximum lookups per `geocode` call: the original query plus one
/// simplified retry. A bounded loop, so a change to the simplification
/// rules can never loop forever.
const MAX_ATTEMPTS: usize = 2;

/// Trait for running text-search queries.
///
/// This abstraction allows the fallback chain to be tested with mock data.
pub trait SearchProvider {
    /// Query the provider, returning its ranked candidates.
    ///
    /// An empty vector means "nothing found"; `Err` means the provider
    /// could not be asked at all.
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, GeocodeError>;
}

/// Resolves free-text addresses to coordinates.
///
/// Transport failures never escape: every provider error is logged and
/// normalized to `None`, so callers only ever see "found" or "not found".
#[derive(Debug, Clone)]
pub struct Geocoder<P: SearchProvider> {
    provider: P,
}

impl<P: SearchProvider> Geocoder<P> {
    /// Create a geocoder over the given search provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve an address to coordinates.
    ///
    /// The provider's first candidate wins. When the lookup comes back
    /// empty and the address still has street-level detail (3 or more
    /// comma-separated segments), it is retried once with only the last
    /// 3 segments. Empty input returns `None` without any network call.
    pub async fn geocode(&self, address: &str) -> Option<Coordinates> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut query = trimmed.to_string();
        for attempt in 1..=MAX_ATTEMPTS {
            if let Some(coords) = self.lookup(&query).await {
                return Some(coords);
            }

            if attempt == MAX_ATTEMPTS {
                break;
            }

            // An address with fewer than 3 segments has no street-level
            // detail left to drop, so a retry would just repeat the query.
            if query.split(',').count() < 3 {
                break;
            }

            query = simplify(&query);
            debug!(retry = %query, "geocode retrying with simplified address");
        }

        None
    }

    /// Resolve an address through the full three-tier fallback chain.
    ///
    /// Tries the address verbatim, then simplified, then a city-level
    /// query. Each tier runs only if the previous one found nothing.
    pub async fn geocode_multi_source(&self, address: &str) -> Option<Coordinates> {
        if let Some(coords) = self.geocode(address).await {
            return Some(coords);
        }

        let simplified = simplify(address);
        if simplified != address.trim() {
            if let Some(coords) = self.geocode(&simplified).await {
                return Some(coords);
            }
        }

        let city = city_fallback(address);
        if city.is_empty() {
            return None;
        }

        debug!(city = %city, "geocode falling back to city-level query");
        self.geocode(&city).await
    }

    /// One provider query. `None` covers empty result sets, transport
    /// failures, and unparseable candidates alike.
    async fn lookup(&self, query: &str) -> Option<Coordinates> {
        let candidates = match self.provider.search(query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(query, error = %e, "geocode lookup failed");
                return None;
            }
        };

        let first = candidates.into_iter().next()?;
        match (first.lat.parse::<f64>(), first.lon.parse::<f64>()) {
            (Ok(lat), Ok(lng)) => Some(Coordinates::new(lat, lng)),
            _ => {
                warn!(
                    query,
                    lat = %first.lat,
                    lon = %first.lon,
                    "geocode candidate has non-numeric coordinates"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn candidate(lat: &str, lon: &str) -> SearchCandidate {
        SearchCandidate {
            lat: lat.to_string(),
            lon: lon.to_string(),
            display_name: "somewhere".to_string(),
        }
    }

    /// Mock search provider recording every query it receives.
    struct MockProvider {
        responses: HashMap<String, Vec<SearchCandidate>>,
        failing: Vec<String>,
        queries: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                failing: Vec::new(),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn respond(mut self, query: &str, candidates: Vec<SearchCandidate>) -> Self {
            self.responses.insert(query.to_string(), candidates);
            self
        }

        fn fail_on(mut self, query: &str) -> Self {
            self.failing.push(query.to_string());
            self
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl SearchProvider for MockProvider {
        async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, GeocodeError> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.failing.iter().any(|q| q == query) {
                return Err(GeocodeError::RateLimited);
            }
            Ok(self.responses.get(query).cloned().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn empty_address_makes_no_network_call() {
        let geocoder = Geocoder::new(MockProvider::new());

        assert_eq!(geocoder.geocode("").await, None);
        assert_eq!(geocoder.geocode("   ").await, None);
        assert!(geocoder.provider.queries().is_empty());
    }

    #[tokio::test]
    async fn first_try_success_is_a_single_call() {
        let provider = MockProvider::new().respond(
            "709 Nguyen Xien, District, City",
            vec![candidate("20.9717", "105.8014")],
        );
        let geocoder = Geocoder::new(provider);

        let coords = geocoder.geocode("709 Nguyen Xien, District, City").await;

        assert_eq!(coords, Some(Coordinates::new(20.9717, 105.8014)));
        assert_eq!(
            geocoder.provider.queries(),
            vec!["709 Nguyen Xien, District, City"]
        );
    }

    #[tokio::test]
    async fn empty_result_retries_with_last_three_segments() {
        let provider = MockProvider::new().respond(
            "Y Ward, Z District, W City",
            vec![candidate("21.01", "105.82")],
        );
        let geocoder = Geocoder::new(provider);

        let coords = geocoder.geocode("123 X St, Y Ward, Z District, W City").await;

        assert_eq!(coords, Some(Coordinates::new(21.01, 105.82)));
        assert_eq!(
            geocoder.provider.queries(),
            vec![
                "123 X St, Y Ward, Z District, W City",
                "Y Ward, Z District, W City",
            ]
        );
    }

    #[tokio::test]
    async fn three_segment_failure_retries_exactly_once() {
        let geocoder = Geocoder::new(MockProvider::new());

        let coords = geocoder.geocode("a,b,c").await;

        assert_eq!(coords, None);
        assert_eq!(geocoder.provider.queries(), vec!["a,b,c", "a, b, c"]);
    }

    #[tokio::test]
    async fn short_address_failure_does_not_retry() {
        let geocoder = Geocoder::new(MockProvider::new());

        let coords = geocoder.geocode("Y Ward, Z District").await;

        assert_eq!(coords, None);
        assert_eq!(geocoder.provider.queries(), vec!["Y Ward, Z District"]);
    }

    #[tokio::test]
    async fn provider_failure_is_just_not_found() {
        let provider = MockProvider::new().fail_on("Hanoi");
        let geocoder = Geocoder::new(provider);

        assert_eq!(geocoder.geocode("Hanoi").await, None);
        assert_eq!(geocoder.provider.queries(), vec!["Hanoi"]);
    }

    #[tokio::test]
    async fn first_candidate_wins() {
        let provider = MockProvider::new().respond(
            "Hanoi",
            vec![candidate("21.02", "105.83"), candidate("10.76", "106.66")],
        );
        let geocoder = Geocoder::new(provider);

        assert_eq!(
            geocoder.geocode("Hanoi").await,
            Some(Coordinates::new(21.02, 105.83))
        );
    }

    #[tokio::test]
    async fn non_numeric_candidate_is_not_found() {
        let provider =
            MockProvider::new().respond("Hanoi", vec![candidate("not-a-number", "105.83")]);
        let geocoder = Geocoder::new(provider);

        assert_eq!(geocoder.geocode("Hanoi").await, None);
    }

    #[tokio::test]
    async fn multi_source_short_circuits_on_first_tier() {
        let provider = MockProvider::new().respond(
            "709 Nguyen Xien, Thanh Xuan, Ha Noi",
            vec![candidate("20.97", "105.80")],
        );
        let geocoder = Geocoder::new(provider);

        let coords = geocoder
            .geocode_multi_source("709 Nguyen Xien, Thanh Xuan, Ha Noi")
            .await;

        assert_eq!(coords, Some(Coordinates::new(20.97, 105.80)));
        assert_eq!(geocoder.provider.queries().len(), 1);
    }

    #[tokio::test]
    async fn multi_source_falls_back_to_canonical_city() {
        let provider =
            MockProvider::new().respond("Hà Nội", vec![candidate("21.0278", "105.8342")]);
        let geocoder = Geocoder::new(provider);

        let coords = geocoder
            .geocode_multi_source("709 Nguyen Xien, Thanh Xuan, Ha Noi")
            .await;

        assert_eq!(coords, Some(Coordinates::new(21.0278, 105.8342)));
        assert_eq!(
            geocoder.provider.queries().last().map(String::as_str),
            Some("Hà Nội")
        );
    }

    #[tokio::test]
    async fn multi_source_city_tier_uses_last_segment_when_unrecognized() {
        let provider = MockProvider::new().respond("Sai Gon", vec![candidate("10.76", "106.66")]);
        let geocoder = Geocoder::new(provider);

        let coords = geocoder
            .geocode_multi_source("12 Le Loi, District 1, Sai Gon")
            .await;

        assert_eq!(coords, Some(Coordinates::new(10.76, 106.66)));
        assert_eq!(
            geocoder.provider.queries().last().map(String::as_str),
            Some("Sai Gon")
        );
    }

    #[tokio::test]
    async fn multi_source_exhausted_is_not_found() {
        let geocoder = Geocoder::new(MockProvider::new());

        let coords = geocoder
            .geocode_multi_source("123 X St, Y Ward, Z District, W City")
            .await;

        assert_eq!(coords, None);
    }
}
