//! Post-hoc statistics over a finished itinerary.
//!
//! Distances here always come from the straight-line estimator, even when the
//! legs themselves were routed, so the analysis is stable across providers.

use crate::constants::*;
use crate::models::{ItineraryEntry, RouteAnalysis, TripSummary};
use crate::services::distance::{self, round_to_tenth};

/// Sum of estimated distances between consecutive entries, rounded to 0.1 km.
/// Pairs where either side lacks coordinates contribute nothing.
pub fn total_distance_km(entries: &[ItineraryEntry]) -> f64 {
    let total: f64 = entries
        .windows(2)
        .filter_map(|pair| match (pair[0].coordinates(), pair[1].coordinates()) {
            (Some(from), Some(to)) => Some(distance::distance_km(&from, &to)),
            _ => None,
        })
        .sum();

    round_to_tenth(total)
}

/// Flag inefficiencies in the route and suggest improvements
pub fn analyze(entries: &[ItineraryEntry]) -> RouteAnalysis {
    if entries.len() < 2 {
        return RouteAnalysis {
            efficiency: "Single destination".to_string(),
            average_distance: "N/A".to_string(),
            suggestions: Vec::new(),
            nearby_groups: Vec::new(),
        };
    }

    let total_distance = total_distance_km(entries);
    let place_count = entries.len();
    let average_distance = total_distance / (place_count - 1) as f64;

    let mut suggestions = Vec::new();

    if average_distance > SPREAD_OUT_AVERAGE_KM {
        suggestions.push("Consider grouping nearby attractions together".to_string());
    }
    if total_distance > LONG_TRIP_TOTAL_KM {
        suggestions
            .push("This is a long-distance trip - consider transportation options".to_string());
    }
    if place_count > MANY_PLACES_THRESHOLD {
        suggestions.push("Many destinations - consider splitting into multiple days".to_string());
    }

    let nearby_groups = find_clustered_places(entries);
    if !nearby_groups.is_empty() {
        let named: Vec<&str> = nearby_groups
            .iter()
            .take(MAX_NAMED_NEARBY_PLACES)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider visiting these places together: {}",
            named.join(", ")
        ));
    }

    tracing::debug!(
        total_distance_km = total_distance,
        places = place_count,
        suggestions = suggestions.len(),
        "Route analysis complete"
    );

    RouteAnalysis {
        efficiency: format!(
            "Route covers {:.1}km across {} places",
            total_distance, place_count
        ),
        average_distance: format!("{:.1}km between places", average_distance),
        suggestions,
        nearby_groups,
    }
}

/// Names of places with at least two other places nearby, in itinerary order
fn find_clustered_places(entries: &[ItineraryEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let here = entry.coordinates()?;
            let neighbours = entries
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .filter_map(|(_, other)| other.coordinates())
                .filter(|there| distance::distance_km(&here, there) < NEARBY_THRESHOLD_KM)
                .count();

            (neighbours >= MIN_NEARBY_NEIGHBOURS).then(|| entry.name().to_string())
        })
        .collect()
}

/// Aggregate totals for display
pub fn summarize(entries: &[ItineraryEntry]) -> TripSummary {
    let total_places = entries.len();
    let total_distance = total_distance_km(entries);
    let total_travel_time: f64 = entries
        .iter()
        .filter_map(|entry| entry.route_to_next.as_ref())
        .map(|leg| leg.travel_time_minutes)
        .sum();
    let average = total_distance / total_places.saturating_sub(1).max(1) as f64;

    TripSummary {
        total_distance_km: total_distance,
        total_travel_time_minutes: total_travel_time,
        total_travel_time_formatted: distance::format_minutes(total_travel_time),
        total_places,
        start_location: entries
            .first()
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        end_location: entries
            .last()
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        average_distance_between_places: round_to_tenth(average),
        route_efficiency: if total_places > 1 {
            "Optimized".to_string()
        } else {
            "Single Destination".to_string()
        },
    }
}
