//! Itinerary construction: candidates and trip constraints in, ordered and
//! time-boxed entries out.
//!
//! Everything here is synchronous and free of I/O. Route legs are attached
//! afterwards by the planner, once it knows which entries survived.

use crate::error::{AppError, Result};
use crate::models::{ItineraryEntry, LegSource, Place, RouteLeg, TripConstraints};
use crate::services::{allocator, dedup, distance, radius, ranking, sequencer};

/// Engine output before legs, summary and day breakdown are added
#[derive(Debug, Clone)]
pub struct DraftItinerary {
    /// Accepted entries in visiting order, without `route_to_next`
    pub entries: Vec<ItineraryEntry>,
    pub total_visit_hours: f64,
    /// Candidates handed to the sequencer: deduplicated, ranked and capped
    /// at two per day
    pub candidates_considered: usize,
}

pub struct ItineraryEngine;

impl ItineraryEngine {
    /// Dedup, rank, cap, sequence and allocate.
    ///
    /// Fails with [`AppError::NoPlacesFound`] when nothing usable is left,
    /// which lets callers tell "nothing to plan" from a planned trip.
    pub fn build(candidates: Vec<Place>, constraints: &TripConstraints) -> Result<DraftItinerary> {
        let selected = Self::select(candidates, constraints.duration_days);
        let candidates_considered = selected.len();

        if !selected.iter().any(|p| p.coordinates.is_some()) {
            return Err(AppError::NoPlacesFound(
                "no candidate places with coordinates".to_string(),
            ));
        }

        let sequenced = sequencer::sequence(selected, constraints.start);
        let allocation = allocator::allocate(sequenced, constraints.duration_days);

        if allocation.entries.is_empty() {
            return Err(AppError::NoPlacesFound(
                "no place fits the available time".to_string(),
            ));
        }

        tracing::info!(
            accepted = allocation.entries.len(),
            considered = candidates_considered,
            hours = allocation.total_hours,
            "Built itinerary"
        );

        Ok(DraftItinerary {
            entries: allocation.entries,
            total_visit_hours: allocation.total_hours,
            candidates_considered,
        })
    }

    /// Unique candidates in rank order, capped at the number of places the
    /// trip can hold
    pub fn select(candidates: Vec<Place>, duration_days: u32) -> Vec<Place> {
        let mut ranked = ranking::rank(dedup::dedup_places(candidates));
        let optimal = radius::optimal_place_count(ranked.len(), duration_days);
        ranked.truncate(optimal);
        ranked
    }

    /// Leg from `from` to `to` built by the distance estimator
    pub fn estimated_leg(from: &ItineraryEntry, to: &ItineraryEntry) -> Option<RouteLeg> {
        let estimate = distance::estimate(&from.coordinates()?, &to.coordinates()?);
        Some(RouteLeg {
            distance_km: estimate.distance_km,
            travel_time_minutes: estimate.travel_time_minutes,
            travel_time_formatted: estimate.travel_time_formatted,
            geometry: Vec::new(),
            steps: Vec::new(),
            next_place: to.name().to_string(),
            source: LegSource::Estimated,
        })
    }

    /// Give every entry but the last an estimated leg to its successor
    pub fn attach_estimated_legs(entries: &mut [ItineraryEntry]) {
        for i in 1..entries.len() {
            let leg = Self::estimated_leg(&entries[i - 1], &entries[i]);
            entries[i - 1].route_to_next = leg;
        }
        if let Some(last) = entries.last_mut() {
            last.route_to_next = None;
        }
    }
}
