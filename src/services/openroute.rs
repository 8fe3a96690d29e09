use crate::error::{AppError, Result};
use crate::models::{Coordinates, RouteStep};
use crate::services::providers::{Geocoder, RouteProvider, RoutedPath};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const OPENROUTE_BASE_URL: &str = "https://api.openrouteservice.org";
const DIRECTIONS_PROFILE: &str = "driving-car";

/// OpenRouteService client: forward geocoding and driving directions
#[derive(Clone)]
pub struct OpenRouteClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouteClient {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, OPENROUTE_BASE_URL.to_string())
    }

    pub fn with_config(api_key: String, base_url: String) -> Self {
        OpenRouteClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Coordinates of the best match for `text`
    pub async fn geocode_search(&self, text: &str) -> Result<Coordinates> {
        let url = format!("{}/geocode/search", self.base_url);

        tracing::debug!(query = %text, "OpenRouteService geocode request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("text", text), ("size", "1")])
            .send()
            .await
            .map_err(|e| AppError::Geocoding(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "Geocoding HTTP error {}: {}", status, error_text);
            return Err(AppError::Geocoding(format!("HTTP {}: {}", status, error_text)));
        }

        let body: GeocodeApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Geocoding(format!("Failed to parse response: {}", e)))?;

        let feature = body
            .features
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Geocoding(format!("Could not find coordinates for {}", text)))?;

        let coordinates = Coordinates::from_lng_lat(feature.geometry.coordinates)
            .map_err(AppError::Geocoding)?;

        tracing::debug!(
            query = %text,
            lat = coordinates.lat,
            lng = coordinates.lng,
            "Geocoded destination"
        );
        Ok(coordinates)
    }

    /// Driving route between two points, with turn-by-turn steps
    pub async fn directions(&self, from: &Coordinates, to: &Coordinates) -> Result<RoutedPath> {
        let url = format!(
            "{}/v2/directions/{}/geojson",
            self.base_url, DIRECTIONS_PROFILE
        );
        let payload = DirectionsRequest {
            coordinates: vec![from.to_lng_lat(), to.to_lng_lat()],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Routing(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "Directions HTTP error {}: {}", status, error_text);
            return Err(AppError::Routing(format!("HTTP {}: {}", status, error_text)));
        }

        let body: DirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Routing(format!("Failed to parse response: {}", e)))?;

        let path = body
            .into_routed_path()
            .ok_or_else(|| AppError::Routing("No routes found".to_string()))?;

        tracing::debug!(
            distance_km = %format!("{:.2}", path.distance_km),
            duration_min = %format!("{:.0}", path.duration_minutes),
            steps = path.steps.len(),
            "OpenRouteService route: {:.2}km, {:.0}min",
            path.distance_km, path.duration_minutes
        );
        Ok(path)
    }
}

#[async_trait]
impl Geocoder for OpenRouteClient {
    async fn geocode(&self, query: &str) -> Result<Coordinates> {
        self.geocode_search(query).await
    }
}

#[async_trait]
impl RouteProvider for OpenRouteClient {
    async fn route(&self, from: &Coordinates, to: &Coordinates) -> Result<RoutedPath> {
        self.directions(from, to).await
    }
}

// OpenRouteService API request/response types

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: [f64; 2], // [lng, lat]
}

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    #[serde(default)]
    features: Vec<DirectionsFeature>,
}

#[derive(Debug, Deserialize)]
struct DirectionsFeature {
    properties: DirectionsProperties,
    geometry: LineGeometry,
}

#[derive(Debug, Deserialize)]
struct DirectionsProperties {
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    distance: f64, // meters
    duration: f64, // seconds
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    distance: f64,
    duration: f64,
    #[serde(default)]
    instruction: String,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl DirectionsApiResponse {
    fn into_routed_path(self) -> Option<RoutedPath> {
        let feature = self.features.into_iter().next()?;
        let geometry = feature
            .geometry
            .coordinates
            .into_iter()
            .filter_map(|position| Coordinates::from_lng_lat(position).ok())
            .collect();
        let segment = feature.properties.segments.into_iter().next()?;

        Some(RoutedPath {
            distance_km: segment.distance / 1000.0,
            duration_minutes: segment.duration / 60.0,
            geometry,
            steps: segment
                .steps
                .into_iter()
                .map(|step| RouteStep {
                    instruction: step.instruction,
                    distance_m: step.distance,
                    duration_s: step.duration,
                })
                .collect(),
        })
    }
}
