use crate::models::Place;
use std::cmp::Ordering;

/// Order candidates best-first: highest rating, then closest to the center.
/// The sort is stable, so equal candidates keep their input order.
pub fn rank(mut candidates: Vec<Place>) -> Vec<Place> {
    candidates.sort_by(compare_candidates);
    candidates
}

fn compare_candidates(a: &Place, b: &Place) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.distance_from_center_km
                .partial_cmp(&b.distance_from_center_km)
                .unwrap_or(Ordering::Equal)
        })
}
