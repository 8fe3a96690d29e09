use crate::constants::*;
use crate::models::{Coordinates, Place, RadiusMeters, TimeOfDay, VisitDuration};
use crate::services::providers::{PlaceSource, RawPlace};
use crate::services::{dedup, distance, radius, ranking};
use std::sync::Arc;

/// Candidates found around a destination, with the radius that was searched
#[derive(Debug, Clone)]
pub struct Discovery {
    pub places: Vec<Place>,
    pub radius: RadiusMeters,
}

/// Finds candidate places around a destination with a radius scaled to the
/// trip length
pub struct PlaceDiscovery {
    source: Arc<dyn PlaceSource>,
}

impl PlaceDiscovery {
    pub fn new(source: Arc<dyn PlaceSource>) -> Self {
        PlaceDiscovery { source }
    }

    /// Search, dedup, annotate, enrich and rank candidates.
    ///
    /// A failed search is logged and yields no candidates; a failed detail
    /// lookup only costs that place its description.
    pub async fn discover(
        &self,
        destination: &str,
        center: &Coordinates,
        duration_days: u32,
    ) -> Discovery {
        let radius = radius::radius_for(duration_days);
        let max_candidates = radius::max_candidates_for(duration_days);
        let raw_limit = max_candidates * RAW_RESULTS_MULTIPLIER;

        tracing::info!(
            destination,
            radius = %radius,
            duration_days,
            "Exploring {} with {:.1}km radius",
            destination,
            radius.to_km().as_km()
        );

        let raw = match self.source.search_radius(center, radius, raw_limit).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(destination, error = %e, "Place search failed, no candidates");
                return Discovery {
                    places: Vec::new(),
                    radius,
                };
            }
        };

        let mut places = annotate(raw.into_iter().take(raw_limit), center);
        places.sort_by(|a, b| a.distance_from_center_km.total_cmp(&b.distance_from_center_km));
        places.truncate(max_candidates);

        tracing::info!(
            destination,
            unique = places.len(),
            "Found {} unique places within {:.1}km",
            places.len(),
            radius.to_km().as_km()
        );

        let mut enriched = Vec::with_capacity(places.len());
        for place in places {
            enriched.push(self.enrich(place, destination).await);
        }

        Discovery {
            places: ranking::rank(enriched),
            radius,
        }
    }

    async fn enrich(&self, mut place: Place, destination: &str) -> Place {
        let details = match place.xid.as_deref() {
            Some(xid) => match self.source.details(xid).await {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::debug!(name = %place.name, error = %e, "Place details unavailable");
                    None
                }
            },
            None => None,
        };

        match details {
            Some(details) => {
                place.description = Some(
                    details
                        .description
                        .map(|text| truncate_description(&text))
                        .unwrap_or_else(|| default_description(&place.name, destination)),
                );
                if details.rate > 0.0 {
                    place.rating = details.rate;
                }
                place.is_popular = details.rate > POPULAR_RATING_THRESHOLD;
            }
            None => {
                place.description = Some(default_description(&place.name, destination));
                place.is_popular = false;
            }
        }

        place
    }
}

/// Turn raw search results into unique, annotated candidates
fn annotate(raw: impl Iterator<Item = RawPlace>, center: &Coordinates) -> Vec<Place> {
    let mut places: Vec<Place> = Vec::new();

    for item in raw {
        let Some(name) = item.name else {
            continue;
        };
        if dedup::is_duplicate(&name, &places) {
            tracing::debug!(name = %name, "Dropping duplicate search result");
            continue;
        }

        places.push(Place {
            visit_duration: VisitDuration::estimate(&name, &item.kinds),
            best_time: TimeOfDay::suggest(&name),
            distance_from_center_km: item
                .coordinates
                .map(|c| distance::distance_km(center, &c))
                .unwrap_or(0.0),
            coordinates: item.coordinates,
            kinds: item.kinds,
            rating: item.rate.max(0.0),
            description: None,
            is_popular: false,
            xid: item.xid,
            name,
        });
    }

    places
}

fn truncate_description(text: &str) -> String {
    if text.chars().count() > MAX_DESCRIPTION_CHARS {
        let cut: String = text.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn default_description(name: &str, destination: &str) -> String {
    format!("Visit {} in {}", name, destination)
}
