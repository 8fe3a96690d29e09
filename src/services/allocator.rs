use crate::constants::VISIT_HOURS_PER_DAY;
use crate::models::ItineraryEntry;
use crate::services::sequencer::SequencedPlace;

/// Outcome of fitting sequenced places into the trip's time budget
#[derive(Debug, Clone)]
pub struct Allocation {
    pub entries: Vec<ItineraryEntry>,
    pub total_hours: f64,
}

/// Sightseeing hours available on a trip of `duration_days`
pub fn budget_hours(duration_days: u32) -> f64 {
    duration_days as f64 * VISIT_HOURS_PER_DAY
}

/// Greedy prefix fit: accept places in order while their visit hours fit the
/// remaining budget, and stop at the first one that does not.
///
/// Later places that would still fit are not considered. Each accepted place
/// gets a round-robin time slot by position and a cost bucket from its name.
pub fn allocate(sequenced: Vec<SequencedPlace>, duration_days: u32) -> Allocation {
    let budget = budget_hours(duration_days);
    let mut entries = Vec::new();
    let mut total_hours = 0.0;

    for (position, item) in sequenced.into_iter().enumerate() {
        let hours = item.place.visit_duration.hours();

        if total_hours + hours > budget {
            tracing::debug!(
                name = %item.place.name,
                hours,
                used = total_hours,
                budget,
                "Time budget exhausted, stopping allocation"
            );
            break;
        }

        total_hours += hours;
        entries.push(ItineraryEntry::new(item.place, position));
    }

    Allocation {
        entries,
        total_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Place, TimeOfDay, VisitDuration};
    use crate::services::sequencer;

    fn sequenced(places: Vec<(&str, VisitDuration)>) -> Vec<SequencedPlace> {
        let places = places
            .into_iter()
            .enumerate()
            .map(|(i, (name, duration))| {
                Place::new(name, Coordinates::new(0.0, i as f64 * 0.01).unwrap())
                    .with_visit_duration(duration)
            })
            .collect();
        sequencer::sequence(places, None)
    }

    #[test]
    fn test_one_day_fits_three_long_visits() {
        let input = sequenced(vec![
            ("A", VisitDuration::TwoToThreeHours),
            ("B", VisitDuration::TwoToThreeHours),
            ("C", VisitDuration::TwoToThreeHours),
            ("D", VisitDuration::TwoToThreeHours),
        ]);

        let allocation = allocate(input, 1);
        assert_eq!(allocation.entries.len(), 3);
        assert_eq!(allocation.total_hours, 7.5);
    }

    #[test]
    fn test_stops_at_first_overflow_without_backtracking() {
        let input = sequenced(vec![
            ("A", VisitDuration::ThreeToFourHours),
            ("B", VisitDuration::ThreeToFourHours),
            ("C", VisitDuration::ThreeToFourHours),
            ("D", VisitDuration::OneToTwoHours),
        ]);

        // 3.5 + 3.5 = 7, C would make 10.5 > 8; D (1.5) would fit but is never tried
        let allocation = allocate(input, 1);
        let names: Vec<_> = allocation.entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(allocation.total_hours, 7.0);
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        let input = sequenced(vec![
            ("A", VisitDuration::Other("flexible".into())),
            ("B", VisitDuration::Other("flexible".into())),
            ("C", VisitDuration::Other("flexible".into())),
            ("D", VisitDuration::Other("flexible".into())),
            ("E", VisitDuration::Other("flexible".into())),
        ]);

        let allocation = allocate(input, 1);
        assert_eq!(allocation.entries.len(), 4);
        assert_eq!(allocation.total_hours, 8.0);
    }

    #[test]
    fn test_time_slots_rotate_by_position() {
        let input = sequenced(vec![
            ("A", VisitDuration::OneToTwoHours),
            ("B", VisitDuration::OneToTwoHours),
            ("C", VisitDuration::OneToTwoHours),
            ("D", VisitDuration::OneToTwoHours),
        ]);

        let slots: Vec<_> = allocate(input, 2)
            .entries
            .iter()
            .map(|e| e.best_time())
            .collect();
        assert_eq!(
            slots,
            vec![
                TimeOfDay::Morning,
                TimeOfDay::Afternoon,
                TimeOfDay::Evening,
                TimeOfDay::Morning
            ]
        );
    }

    #[test]
    fn test_never_exceeds_budget() {
        let durations = [
            VisitDuration::OneToTwoHours,
            VisitDuration::ThreeToFourHours,
            VisitDuration::TwoToThreeHours,
        ];
        for days in 1..=4 {
            let input: Vec<_> = (0..20)
                .map(|i| {
                    Place::new(format!("P{}", i), Coordinates::new(0.0, i as f64).unwrap())
                        .with_visit_duration(durations[i % 3].clone())
                })
                .collect();
            let allocation = allocate(sequencer::sequence(input, None), days);
            assert!(allocation.total_hours <= budget_hours(days));
        }
    }
}
