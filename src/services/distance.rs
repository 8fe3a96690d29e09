//! Straight-line distance and travel-time estimates between two coordinates.
//!
//! Degree differences are treated as planar and scaled by
//! [`KM_PER_DEGREE`]. Good enough for ranking and ordering nearby places, not
//! for navigation; real routes from the routing provider always win.

use crate::constants::{KM_PER_DEGREE, MINUTES_PER_KM};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// Rounded to 0.1 km
    pub distance_km: f64,
    /// Rounded to whole minutes
    pub travel_time_minutes: f64,
    pub travel_time_formatted: String,
}

/// Estimate distance and travel time from `from` to `to`
pub fn estimate(from: &Coordinates, to: &Coordinates) -> TravelEstimate {
    let raw_km = planar_distance_km(from, to);
    let raw_minutes = raw_km * MINUTES_PER_KM;

    TravelEstimate {
        distance_km: round_to_tenth(raw_km),
        travel_time_minutes: raw_minutes.round(),
        travel_time_formatted: format_minutes(raw_minutes),
    }
}

/// Shorthand for the rounded distance part of [`estimate`]
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    estimate(from, to).distance_km
}

/// `"{n} min"` with the minutes truncated toward zero
pub fn format_minutes(minutes: f64) -> String {
    format!("{} min", minutes.trunc() as i64)
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn planar_distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = to.lat - from.lat;
    let d_lng = to.lng - from.lng;
    (d_lat * d_lat + d_lng * d_lng).sqrt() * KM_PER_DEGREE
}
