//! Search radius and candidate limits scaled by trip length.

use crate::constants::*;
use crate::models::RadiusMeters;

/// Search radius for discovering candidates on a trip of `duration_days`.
///
/// 20 km for a single day, 10 km more per extra day, saturating at 100 km.
pub fn radius_for(duration_days: u32) -> RadiusMeters {
    let extra_days = duration_days as f64 - 1.0;
    let extra = (extra_days * SEARCH_RADIUS_STEP_PER_DAY_M).min(MAX_EXTRA_SEARCH_RADIUS_M);
    let radius = (BASE_SEARCH_RADIUS_M + extra).clamp(MIN_SEARCH_RADIUS_M, MAX_SEARCH_RADIUS_M);

    RadiusMeters::from_raw(radius)
}

/// Number of candidates to request from place discovery
pub fn max_candidates_for(duration_days: u32) -> usize {
    (duration_days as usize * CANDIDATES_PER_DAY as usize).min(MAX_CANDIDATES)
}

/// Number of places the itinerary may hold, given how many candidates exist
pub fn optimal_place_count(available: usize, duration_days: u32) -> usize {
    available.min(duration_days as usize * PLACES_PER_DAY)
}
