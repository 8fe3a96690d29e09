use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use trip_planner::config::PlannerConfig;
use trip_planner::error::{AppError, Result};
use trip_planner::models::{Coordinates, Place, RadiusMeters, WeatherSnapshot};
use trip_planner::services::providers::{
    Geocoder, PlaceDetails, PlaceSource, RawPlace, RouteProvider, RoutedPath, WeatherProvider,
};
use trip_planner::services::trip_planner::TripPlanner;

/// Center used by the fake geocoder for every known destination
#[allow(dead_code)]
pub const DELHI: (f64, f64) = (28.6139, 77.2090);

/// Create a test candidate place
#[allow(dead_code)]
pub fn create_test_place(name: &str, lat: f64, lng: f64, rating: f32) -> Place {
    Place::new(name, Coordinates::new(lat, lng).unwrap()).with_rating(rating)
}

/// Create a raw search result as a place provider would return it
#[allow(dead_code)]
pub fn create_raw_place(name: &str, lat: f64, lng: f64, rate: f32) -> RawPlace {
    RawPlace {
        name: Some(name.to_string()),
        xid: Some(format!("xid-{}", name.to_lowercase().replace(' ', "-"))),
        coordinates: Some(Coordinates::new(lat, lng).unwrap()),
        kinds: "interesting_places".to_string(),
        rate,
    }
}

/// A handful of well-spread sights around central Delhi
#[allow(dead_code)]
pub fn delhi_places() -> Vec<RawPlace> {
    vec![
        create_raw_place("Red Fort", 28.6562, 77.2410, 7.0),
        create_raw_place("India Gate", 28.6129, 77.2295, 7.0),
        create_raw_place("Qutub Minar", 28.5245, 77.1855, 7.0),
        create_raw_place("Lotus Temple", 28.5535, 77.2588, 3.0),
        create_raw_place("Humayun's Tomb", 28.5933, 77.2507, 7.0),
        create_raw_place("The Red Fort", 28.6563, 77.2411, 2.0),
        create_raw_place("Jama Masjid", 28.6507, 77.2334, 3.0),
    ]
}

/// Geocoder that knows a fixed set of destinations
pub struct FakeGeocoder {
    known: HashMap<String, Coordinates>,
}

impl FakeGeocoder {
    #[allow(dead_code)]
    pub fn delhi() -> Self {
        let mut known = HashMap::new();
        known.insert(
            "delhi".to_string(),
            Coordinates::new(DELHI.0, DELHI.1).unwrap(),
        );
        FakeGeocoder { known }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates> {
        self.known
            .get(&query.to_lowercase())
            .copied()
            .ok_or_else(|| AppError::Geocoding(format!("Could not find coordinates for {}", query)))
    }
}

/// Place source serving canned results; fails searches when `fail` is set
pub struct FakePlaceSource {
    pub places: Vec<RawPlace>,
    pub descriptions: HashMap<String, PlaceDetails>,
    pub fail: bool,
    pub searches: AtomicUsize,
}

impl FakePlaceSource {
    #[allow(dead_code)]
    pub fn new(places: Vec<RawPlace>) -> Self {
        FakePlaceSource {
            places,
            descriptions: HashMap::new(),
            fail: false,
            searches: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        FakePlaceSource {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    #[allow(dead_code)]
    pub fn with_details(mut self, xid: &str, details: PlaceDetails) -> Self {
        self.descriptions.insert(xid.to_string(), details);
        self
    }
}

#[async_trait]
impl PlaceSource for FakePlaceSource {
    async fn search_radius(
        &self,
        _center: &Coordinates,
        _radius: RadiusMeters,
        limit: usize,
    ) -> Result<Vec<RawPlace>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::PlaceSearch("HTTP 503: unavailable".to_string()));
        }
        Ok(self.places.iter().take(limit).cloned().collect())
    }

    async fn details(&self, xid: &str) -> Result<PlaceDetails> {
        self.descriptions
            .get(xid)
            .cloned()
            .ok_or_else(|| AppError::PlaceSearch(format!("HTTP 404: unknown xid {}", xid)))
    }
}

/// Router that answers with a fixed 10 km / 20 min route, or always fails
pub struct FakeRouter {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeRouter {
    #[allow(dead_code)]
    pub fn working() -> Self {
        FakeRouter {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        FakeRouter {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RouteProvider for FakeRouter {
    async fn route(&self, from: &Coordinates, to: &Coordinates) -> Result<RoutedPath> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Routing("HTTP 500: upstream down".to_string()));
        }
        Ok(RoutedPath {
            distance_km: 10.04,
            duration_minutes: 20.6,
            geometry: vec![*from, *to],
            steps: Vec::new(),
        })
    }
}

/// Weather provider returning a fixed snapshot, or always failing
pub struct FakeWeather {
    pub snapshot: Option<WeatherSnapshot>,
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current(&self, _city: &str) -> Result<WeatherSnapshot> {
        self.snapshot
            .clone()
            .ok_or_else(|| AppError::Weather("HTTP 401".to_string()))
    }
}

#[allow(dead_code)]
pub fn rainy_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c: 24.0,
        condition: "Rain".to_string(),
        description: "moderate rain".to_string(),
        humidity_pct: 90.0,
        wind_speed_ms: 3.0,
    }
}

/// Planner wired to fakes
#[allow(dead_code)]
pub fn create_test_planner(
    places: Arc<FakePlaceSource>,
    router: Arc<FakeRouter>,
    weather: Option<WeatherSnapshot>,
) -> TripPlanner {
    let weather: Arc<dyn WeatherProvider> = Arc::new(FakeWeather { snapshot: weather });
    TripPlanner::new(
        Arc::new(FakeGeocoder::delhi()),
        places,
        router,
        Some(weather),
        PlannerConfig::default(),
    )
}

/// Check if we should skip tests that hit real provider APIs
#[allow(dead_code)]
pub fn should_skip_real_api_tests() -> bool {
    std::env::var("SKIP_REAL_API_TESTS").is_ok()
}

/// Read an API key for a live test, or None when the test should be skipped
#[allow(dead_code)]
pub fn live_api_key(var: &str) -> Option<String> {
    if should_skip_real_api_tests() {
        return None;
    }
    dotenv::dotenv().ok();
    std::env::var(var).ok()
}
