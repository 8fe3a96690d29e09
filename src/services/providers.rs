//! Seams between the planner and the outside world.
//!
//! Each trait has one HTTP-backed implementation in this crate and
//! in-memory fakes in the integration tests.

use crate::error::Result;
use crate::models::{Coordinates, RadiusMeters, RouteStep, WeatherSnapshot};
use async_trait::async_trait;

/// Place record as returned by a radius search, before any heuristics
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlace {
    /// Providers return unnamed features; those are filtered out later
    pub name: Option<String>,
    pub xid: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub kinds: String,
    pub rate: f32,
}

/// Extra information fetched for a single place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub description: Option<String>,
    pub rate: f32,
}

/// A real route between two points
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub geometry: Vec<Coordinates>,
    pub steps: Vec<RouteStep>,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text destination to coordinates
    async fn geocode(&self, query: &str) -> Result<Coordinates>;
}

#[async_trait]
pub trait PlaceSource: Send + Sync {
    async fn search_radius(
        &self,
        center: &Coordinates,
        radius: RadiusMeters,
        limit: usize,
    ) -> Result<Vec<RawPlace>>;

    async fn details(&self, xid: &str) -> Result<PlaceDetails>;
}

#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, from: &Coordinates, to: &Coordinates) -> Result<RoutedPath>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a city name
    async fn current(&self, city: &str) -> Result<WeatherSnapshot>;
}
