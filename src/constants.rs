//! Stable application-wide constants.
//!
//! Values here are algorithm coefficients of the itinerary engine and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For knobs that benefit from runtime overrides, see
//! [`PlannerConfig`](crate::config::PlannerConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Trip duration limits ---

/// Shortest trip the planner accepts, in days.
pub const MIN_DURATION_DAYS: u32 = 1;
/// Default upper bound on trip length. Overridden by `PLANNER_MAX_DURATION_DAYS`.
pub const DEFAULT_MAX_DURATION_DAYS: u32 = 30;

// --- Dynamic search radius (meters) ---
// A one-day trip explores 20 km around the destination; every extra day adds
// 10 km until the radius saturates at 100 km.

/// Radius for a one-day trip.
pub const BASE_SEARCH_RADIUS_M: f64 = 20_000.0;
/// Radius added per additional day.
pub const SEARCH_RADIUS_STEP_PER_DAY_M: f64 = 10_000.0;
/// Cap on the radius added on top of the base.
pub const MAX_EXTRA_SEARCH_RADIUS_M: f64 = 80_000.0;
/// Lower clamp for the final radius.
pub const MIN_SEARCH_RADIUS_M: f64 = 15_000.0;
/// Upper clamp for the final radius.
pub const MAX_SEARCH_RADIUS_M: f64 = 100_000.0;

// --- Candidate discovery limits ---

/// Candidates requested per trip day.
pub const CANDIDATES_PER_DAY: u32 = 3;
/// Hard cap on candidates requested from place discovery.
pub const MAX_CANDIDATES: usize = 40;
/// Provider results fetched per wanted candidate, leaving room for dedup losses.
pub const RAW_RESULTS_MULTIPLIER: usize = 2;
/// Place descriptions longer than this are cut and suffixed with "...".
pub const MAX_DESCRIPTION_CHARS: usize = 200;
/// Provider rate above which a place counts as popular.
pub const POPULAR_RATING_THRESHOLD: f32 = 3.0;

// --- Deduplication ---

/// Minimum Ratcliff-Obershelp ratio for two normalized names to be the same place.
pub const NAME_SIMILARITY_THRESHOLD: f64 = 0.8;

// --- Distance estimator ---
// Planar approximation used whenever a real route is unavailable.

/// Kilometers per degree of latitude/longitude (equatorial approximation).
pub const KM_PER_DEGREE: f64 = 111.0;
/// Travel minutes per kilometer, i.e. an assumed average speed of 12 km/h.
pub const MINUTES_PER_KM: f64 = 5.0;

// --- Time budget ---

/// Sightseeing hours available per trip day.
pub const VISIT_HOURS_PER_DAY: f64 = 8.0;
/// Upper bound on places selected per trip day.
pub const PLACES_PER_DAY: usize = 2;
/// Visit length assumed for labels outside the known buckets.
pub const DEFAULT_VISIT_HOURS: f64 = 2.0;

// --- Route quality analysis ---

/// Average leg length (km) above which grouping attractions is suggested.
pub const SPREAD_OUT_AVERAGE_KM: f64 = 20.0;
/// Total route length (km) above which the trip counts as long-distance.
pub const LONG_TRIP_TOTAL_KM: f64 = 100.0;
/// Place count above which splitting across more days is suggested.
pub const MANY_PLACES_THRESHOLD: usize = 8;
/// Two places closer than this (km) are neighbours.
pub const NEARBY_THRESHOLD_KM: f64 = 2.0;
/// Neighbour count that makes a place part of a cluster.
pub const MIN_NEARBY_NEIGHBOURS: usize = 2;
/// Cluster members named in the grouping suggestion.
pub const MAX_NAMED_NEARBY_PLACES: usize = 3;
