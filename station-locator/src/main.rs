use station_locator::domain::Station;
use station_locator::geocode::{GeocodeConfig, Geocoder, NominatimClient};
use station_locator::locator::NearestStationFinder;
use station_locator::routing::{OsrmClient, RouteConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(address) = args.next() else {
        eprintln!("Usage: station-locator <address> [stations.json]");
        std::process::exit(2);
    };
    let stations_path = args.next();

    // Base URLs overridable for self-hosted providers
    let mut geocode_config = GeocodeConfig::default();
    if let Ok(url) = std::env::var("GEOCODE_BASE_URL") {
        geocode_config = geocode_config.with_base_url(url);
    }

    let client = NominatimClient::new(geocode_config).expect("Failed to create geocoding client");
    let geocoder = Geocoder::new(client);

    let Some(coords) = geocoder.geocode_multi_source(&address).await else {
        println!("No coordinates found for \"{address}\"");
        std::process::exit(1);
    };
    println!("{address} -> {coords}");

    let Some(path) = stations_path else {
        return;
    };

    let json = std::fs::read_to_string(&path).expect("Failed to read stations file");
    let stations: Vec<Station> =
        serde_json::from_str(&json).expect("Failed to parse stations file");

    let mut route_config = RouteConfig::default();
    if let Ok(url) = std::env::var("OSRM_BASE_URL") {
        route_config = route_config.with_base_url(url);
    }

    let router = OsrmClient::new(route_config).expect("Failed to create routing client");
    let finder = NearestStationFinder::new(&router);

    match finder.find_nearest(coords, &stations).await {
        Some(nearest) => println!(
            "Nearest station: {} ({:.0} m) - {}",
            nearest.station.name, nearest.distance, nearest.station.address
        ),
        None => println!(
            "No reachable station among {} candidate(s)",
            stations.len()
        ),
    }
}
