use crate::models::{Coordinates, Place};
use crate::services::distance::{self, TravelEstimate};

/// A candidate placed in visiting order
#[derive(Debug, Clone)]
pub struct SequencedPlace {
    pub place: Place,
    /// Estimated hop from the previous stop (or the start point)
    pub from_previous: TravelEstimate,
}

impl SequencedPlace {
    pub fn distance_from_previous_km(&self) -> f64 {
        self.from_previous.distance_km
    }
}

/// Order candidates with the nearest-neighbor heuristic.
///
/// Starts at `start`, or at the first candidate with coordinates, and keeps
/// stepping to the closest unvisited candidate. Ties go to the candidate seen
/// first. Candidates without coordinates are left out entirely.
pub fn sequence(candidates: Vec<Place>, start: Option<Coordinates>) -> Vec<SequencedPlace> {
    let total = candidates.len();
    let mut unvisited: Vec<(Coordinates, Place)> = candidates
        .into_iter()
        .filter_map(|place| match place.coordinates {
            Some(coordinates) => Some((coordinates, place)),
            None => {
                tracing::debug!(name = %place.name, "Skipping place without coordinates");
                None
            }
        })
        .collect();

    if unvisited.len() < total {
        tracing::warn!(
            skipped = total - unvisited.len(),
            "Skipped {} place(s) without coordinates while sequencing",
            total - unvisited.len()
        );
    }

    let Some(mut current) = start.or_else(|| unvisited.first().map(|(c, _)| *c)) else {
        return Vec::new();
    };

    let mut ordered = Vec::with_capacity(unvisited.len());

    while !unvisited.is_empty() {
        let mut nearest_idx = 0;
        let mut min_distance = f64::INFINITY;

        for (idx, (coordinates, _)) in unvisited.iter().enumerate() {
            let distance = distance::distance_km(&current, coordinates);
            if distance < min_distance {
                min_distance = distance;
                nearest_idx = idx;
            }
        }

        let (coordinates, place) = unvisited.remove(nearest_idx);
        ordered.push(SequencedPlace {
            from_previous: distance::estimate(&current, &coordinates),
            place,
        });
        current = coordinates;
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, lat: f64, lng: f64) -> Place {
        Place::new(name, Coordinates::new(lat, lng).unwrap())
    }

    fn names(sequenced: &[SequencedPlace]) -> Vec<&str> {
        sequenced.iter().map(|s| s.place.name.as_str()).collect()
    }

    #[test]
    fn test_nearest_first_order() {
        let start = Coordinates::new(0.0, 0.0).unwrap();
        let ordered = sequence(
            vec![place("C", 0.0, 5.0), place("A", 0.0, 0.0), place("B", 0.0, 1.0)],
            Some(start),
        );

        assert_eq!(names(&ordered), vec!["A", "B", "C"]);
        assert_eq!(ordered[0].distance_from_previous_km(), 0.0);
        assert_eq!(ordered[1].distance_from_previous_km(), 111.0);
        assert_eq!(ordered[2].distance_from_previous_km(), 444.0);
    }

    #[test]
    fn test_defaults_to_first_candidate_as_start() {
        let ordered = sequence(
            vec![place("B", 0.0, 1.0), place("C", 0.0, 5.0), place("A", 0.0, 0.0)],
            None,
        );
        assert_eq!(names(&ordered), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_ties_go_to_first_seen() {
        let start = Coordinates::new(0.0, 0.0).unwrap();
        let ordered = sequence(
            vec![place("East", 0.0, 1.0), place("West", 0.0, -1.0)],
            Some(start),
        );
        assert_eq!(names(&ordered), vec!["East", "West"]);
    }

    #[test]
    fn test_skips_places_without_coordinates() {
        let mut lost = place("Lost", 0.0, 0.0);
        lost.coordinates = None;

        let ordered = sequence(
            vec![lost, place("A", 0.0, 0.0), place("B", 0.0, 1.0)],
            None,
        );
        assert_eq!(names(&ordered), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sequence(Vec::new(), None).is_empty());
    }
}
