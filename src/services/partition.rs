use crate::models::{DayPlan, ItineraryEntry};

/// Split the itinerary into contiguous per-day chunks.
///
/// Each day gets `max(1, len / days)` entries. Days that would be empty are
/// omitted, and entries past `days * per_day` are not assigned to any day.
pub fn partition(entries: &[ItineraryEntry], duration_days: u32) -> Vec<DayPlan> {
    if entries.is_empty() || duration_days == 0 {
        return Vec::new();
    }

    let per_day = (entries.len() / duration_days as usize).max(1);

    let days: Vec<DayPlan> = entries
        .chunks(per_day)
        .take(duration_days as usize)
        .enumerate()
        .map(|(i, chunk)| DayPlan {
            day: i as u32 + 1,
            entries: chunk.to_vec(),
        })
        .collect();

    let assigned: usize = days.iter().map(|d| d.entries.len()).sum();
    if assigned < entries.len() {
        tracing::debug!(
            dropped = entries.len() - assigned,
            per_day,
            "Entries left out of the daily breakdown"
        );
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Place};

    fn entries(count: usize) -> Vec<ItineraryEntry> {
        (0..count)
            .map(|i| {
                let place = Place::new(format!("P{}", i), Coordinates::new(0.0, 0.0).unwrap());
                ItineraryEntry::new(place, i)
            })
            .collect()
    }

    fn names(day: &DayPlan) -> Vec<&str> {
        day.entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_five_entries_over_two_days_drops_the_last() {
        let days = partition(&entries(5), 2);

        assert_eq!(days.len(), 2);
        assert_eq!(names(&days[0]), vec!["P0", "P1"]);
        assert_eq!(names(&days[1]), vec!["P2", "P3"]);
        assert_eq!(days[1].label(), "Day 2");
    }

    #[test]
    fn test_fewer_entries_than_days_omits_empty_days() {
        let days = partition(&entries(2), 4);

        assert_eq!(days.len(), 2);
        assert_eq!(names(&days[0]), vec!["P0"]);
        assert_eq!(names(&days[1]), vec!["P1"]);
    }

    #[test]
    fn test_even_split() {
        let days = partition(&entries(6), 3);
        assert!(days.iter().all(|d| d.entries.len() == 2));
        assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_itinerary() {
        assert!(partition(&[], 3).is_empty());
    }
}
