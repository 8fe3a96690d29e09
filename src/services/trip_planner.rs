use crate::config::{Config, PlannerConfig};
use crate::error::{AppError, Result};
use crate::models::{
    Coordinates, ExplorationInfo, ItineraryEntry, LegSource, PlanRequest, RouteLeg,
    TripConstraints, TripPlan, WeatherSnapshot,
};
use crate::services::distance::{self, round_to_tenth};
use crate::services::engine::ItineraryEngine;
use crate::services::openroute::OpenRouteClient;
use crate::services::opentripmap::OpenTripMapClient;
use crate::services::openweather::OpenWeatherClient;
use crate::services::place_discovery::PlaceDiscovery;
use crate::services::providers::{Geocoder, PlaceSource, RouteProvider, WeatherProvider};
use crate::services::{analyzer, partition};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// Turns a plan request into a full trip plan: geocode, weather, discover,
/// build, attach legs, then summarize
pub struct TripPlanner {
    geocoder: Arc<dyn Geocoder>,
    discovery: PlaceDiscovery,
    router: Arc<dyn RouteProvider>,
    weather: Option<Arc<dyn WeatherProvider>>,
    config: PlannerConfig,
}

impl TripPlanner {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        places: Arc<dyn PlaceSource>,
        router: Arc<dyn RouteProvider>,
        weather: Option<Arc<dyn WeatherProvider>>,
        config: PlannerConfig,
    ) -> Self {
        TripPlanner {
            geocoder,
            discovery: PlaceDiscovery::new(places),
            router,
            weather,
            config,
        }
    }

    /// Planner backed by the public OpenRouteService, OpenTripMap and
    /// OpenWeatherMap APIs
    pub fn from_config(config: &Config) -> Self {
        let openroute = Arc::new(OpenRouteClient::new(config.openroute_api_key.clone()));
        let places = Arc::new(OpenTripMapClient::new(config.opentripmap_api_key.clone()));
        let weather = config.openweather_api_key.clone().map(|key| {
            Arc::new(OpenWeatherClient::new(key)) as Arc<dyn WeatherProvider>
        });

        if weather.is_none() {
            tracing::info!("OPENWEATHER_API_KEY not set, plans will have no weather");
        }

        TripPlanner::new(
            openroute.clone(),
            places,
            openroute,
            weather,
            config.planner.clone(),
        )
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn has_weather_provider(&self) -> bool {
        self.weather.is_some()
    }

    pub async fn plan(&self, request: &PlanRequest) -> Result<TripPlan> {
        request
            .validate(self.config.max_duration_days)
            .map_err(AppError::InvalidRequest)?;

        let destination = request.destination.trim();
        let days = request.duration_days;
        let budget = request.budget.unwrap_or(self.config.default_budget);

        tracing::info!(destination, days, budget = %budget, "Planning trip");

        // Step 1: Locate the destination
        let center = self.geocoder.geocode(destination).await?;

        // Step 2: Current weather, informational only
        let weather = self.fetch_weather(destination).await;

        // Step 3: Discover candidates around the destination
        let discovery = self.discovery.discover(destination, &center, days).await;
        if discovery.places.is_empty() {
            return Err(AppError::NoPlacesFound(format!(
                "No places found for {}",
                destination
            )));
        }
        let places_explored = discovery.places.len();

        // Step 4: Select, sequence and allocate. Without a start point the
        // tour opens at the best-ranked candidate.
        let constraints = TripConstraints::new(days, budget, request.start_point);
        let draft = ItineraryEngine::build(discovery.places, &constraints)?;
        let mut itinerary = draft.entries;

        // Step 5: Legs between accepted stops only
        if self.config.include_routes {
            self.attach_routed_legs(&mut itinerary).await;
        } else {
            ItineraryEngine::attach_estimated_legs(&mut itinerary);
        }

        let radius_km = round_to_tenth(discovery.radius.to_km().as_km());
        let exploration = ExplorationInfo {
            radius_km,
            places_explored,
            places_selected: itinerary.len(),
            exploration_area: format!("{:.1}km radius around {}", radius_km, destination),
        };

        tracing::info!(
            destination,
            places = itinerary.len(),
            hours = draft.total_visit_hours,
            "Trip plan ready"
        );

        Ok(TripPlan {
            id: Uuid::new_v4(),
            destination: destination.to_string(),
            duration_days: days,
            budget,
            weather_considerations: weather
                .as_ref()
                .map(WeatherSnapshot::considerations)
                .unwrap_or_default(),
            weather,
            total_visit_hours: draft.total_visit_hours,
            daily_breakdown: partition::partition(&itinerary, days),
            summary: analyzer::summarize(&itinerary),
            route_analysis: analyzer::analyze(&itinerary),
            exploration,
            itinerary,
            generated_at: OffsetDateTime::now_utc(),
        })
    }

    async fn fetch_weather(&self, destination: &str) -> Option<WeatherSnapshot> {
        if !self.config.include_weather {
            return None;
        }
        let provider = self.weather.as_ref()?;

        match provider.current(destination).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(destination, error = %e, "Weather unavailable, continuing without it");
                None
            }
        }
    }

    /// Ask the routing provider for each consecutive pair, one at a time,
    /// falling back to an estimated leg on any failure
    async fn attach_routed_legs(&self, entries: &mut [ItineraryEntry]) {
        for i in 1..entries.len() {
            let leg = match (entries[i - 1].coordinates(), entries[i].coordinates()) {
                (Some(from), Some(to)) => {
                    match self.routed_leg(&from, &to, entries[i].name()).await {
                        Some(leg) => Some(leg),
                        None => ItineraryEngine::estimated_leg(&entries[i - 1], &entries[i]),
                    }
                }
                _ => None,
            };
            entries[i - 1].route_to_next = leg;
        }
    }

    async fn routed_leg(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        next_place: &str,
    ) -> Option<RouteLeg> {
        match self.router.route(from, to).await {
            Ok(path) => Some(RouteLeg {
                distance_km: path.distance_km,
                travel_time_minutes: path.duration_minutes,
                travel_time_formatted: distance::format_minutes(path.duration_minutes),
                geometry: path.geometry,
                steps: path.steps,
                next_place: next_place.to_string(),
                source: LegSource::Routed,
            }),
            Err(e) => {
                tracing::warn!(
                    next_place,
                    error = %e,
                    "Routing failed, using straight-line estimate"
                );
                None
            }
        }
    }
}
