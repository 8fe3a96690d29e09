use crate::constants::DEFAULT_VISIT_HOURS;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of the day a place is best visited in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Slots handed out round-robin by the allocator
    pub const ROTATION: [TimeOfDay; 3] =
        [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    /// Slot for the place at `position` in the visiting order
    pub fn for_position(position: usize) -> Self {
        Self::ROTATION[position % Self::ROTATION.len()]
    }

    /// Preferred visiting time guessed from the place name
    pub fn suggest(name: &str) -> Self {
        let name = name.to_lowercase();
        let name_has = |words: &[&str]| words.iter().any(|word| name.contains(word));

        // Outdoor words win over indoor ones ("Palace Gardens" is a garden)
        if name_has(&["beach", "park", "garden"]) {
            TimeOfDay::Morning
        } else if name_has(&["museum", "gallery", "palace"]) {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Morning
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Morning => write!(f, "morning"),
            TimeOfDay::Afternoon => write!(f, "afternoon"),
            TimeOfDay::Evening => write!(f, "evening"),
        }
    }
}

/// Bucketed visit length, serialized as its label ("1-2 hours", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum VisitDuration {
    OneToTwoHours,
    #[default]
    TwoToThreeHours,
    ThreeToFourHours,
    /// Any label outside the known buckets
    Other(String),
}

impl VisitDuration {
    /// Hours charged against the trip's time budget
    pub fn hours(&self) -> f64 {
        match self {
            VisitDuration::OneToTwoHours => 1.5,
            VisitDuration::TwoToThreeHours => 2.5,
            VisitDuration::ThreeToFourHours => 3.5,
            VisitDuration::Other(_) => DEFAULT_VISIT_HOURS,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            VisitDuration::OneToTwoHours => "1-2 hours",
            VisitDuration::TwoToThreeHours => "2-3 hours",
            VisitDuration::ThreeToFourHours => "3-4 hours",
            VisitDuration::Other(label) => label,
        }
    }

    /// Visit length guessed from the place name, falling back to its kinds
    pub fn estimate(name: &str, kinds: &str) -> Self {
        let name = name.to_lowercase();
        let kinds = kinds.to_lowercase();
        let name_has = |words: &[&str]| words.iter().any(|word| name.contains(word));

        if name_has(&["museum", "gallery", "palace", "castle"]) {
            VisitDuration::ThreeToFourHours
        } else if name_has(&["park", "garden", "beach"]) {
            VisitDuration::TwoToThreeHours
        } else if name_has(&["temple", "church", "mosque"]) {
            VisitDuration::OneToTwoHours
        } else if ["historic", "cultural"].iter().any(|word| kinds.contains(word)) {
            VisitDuration::TwoToThreeHours
        } else {
            VisitDuration::OneToTwoHours
        }
    }
}

impl From<String> for VisitDuration {
    fn from(label: String) -> Self {
        if label.contains("2-3") {
            VisitDuration::TwoToThreeHours
        } else if label.contains("1-2") {
            VisitDuration::OneToTwoHours
        } else if label.contains("3-4") {
            VisitDuration::ThreeToFourHours
        } else {
            VisitDuration::Other(label)
        }
    }
}

impl From<VisitDuration> for String {
    fn from(duration: VisitDuration) -> Self {
        match duration {
            VisitDuration::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for VisitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A discovered candidate place, before selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Places without coordinates are skipped by the sequencer
    pub coordinates: Option<Coordinates>,
    /// Comma-separated category tags from the place provider
    #[serde(default)]
    pub kinds: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub distance_from_center_km: f64,
    #[serde(default)]
    pub visit_duration: VisitDuration,
    #[serde(default)]
    pub best_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_popular: bool,
    /// Provider identifier used for detail lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xid: Option<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        let name = name.into();
        Place {
            visit_duration: VisitDuration::estimate(&name, ""),
            best_time: TimeOfDay::suggest(&name),
            name,
            coordinates: Some(coordinates),
            kinds: String::new(),
            rating: 0.0,
            distance_from_center_km: 0.0,
            description: None,
            is_popular: false,
            xid: None,
        }
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating.max(0.0);
        self
    }

    pub fn with_visit_duration(mut self, visit_duration: VisitDuration) -> Self {
        self.visit_duration = visit_duration;
        self
    }

    pub fn with_kinds(mut self, kinds: impl Into<String>) -> Self {
        self.kinds = kinds.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_duration_hours() {
        assert_eq!(VisitDuration::TwoToThreeHours.hours(), 2.5);
        assert_eq!(VisitDuration::OneToTwoHours.hours(), 1.5);
        assert_eq!(VisitDuration::ThreeToFourHours.hours(), 3.5);
        assert_eq!(VisitDuration::Other("half a day".into()).hours(), 2.0);
    }

    #[test]
    fn test_visit_duration_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&VisitDuration::OneToTwoHours).unwrap();
        assert_eq!(json, "\"1-2 hours\"");

        let parsed: VisitDuration = serde_json::from_str("\"about 2-3 hours\"").unwrap();
        assert_eq!(parsed, VisitDuration::TwoToThreeHours);

        let other: VisitDuration = serde_json::from_str("\"all day\"").unwrap();
        assert_eq!(other, VisitDuration::Other("all day".into()));
        assert_eq!(other.label(), "all day");
    }

    #[test]
    fn test_visit_duration_estimate() {
        assert_eq!(
            VisitDuration::estimate("National Museum", ""),
            VisitDuration::ThreeToFourHours
        );
        assert_eq!(
            VisitDuration::estimate("Lodhi Garden", ""),
            VisitDuration::TwoToThreeHours
        );
        assert_eq!(
            VisitDuration::estimate("Lotus Temple", ""),
            VisitDuration::OneToTwoHours
        );
        assert_eq!(
            VisitDuration::estimate("Qutub Minar", "historic,architecture"),
            VisitDuration::TwoToThreeHours
        );
        assert_eq!(
            VisitDuration::estimate("India Gate", "monuments"),
            VisitDuration::OneToTwoHours
        );
    }

    #[test]
    fn test_time_of_day_rotation() {
        assert_eq!(TimeOfDay::for_position(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::for_position(1), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::for_position(2), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::for_position(3), TimeOfDay::Morning);
    }

    #[test]
    fn test_time_of_day_suggest() {
        assert_eq!(TimeOfDay::suggest("City Palace"), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::suggest("National Gallery"), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::suggest("Juhu Beach"), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::suggest("Palace Gardens"), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::suggest("Museum Park"), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::suggest("Lotus Temple"), TimeOfDay::Morning);
    }

    #[test]
    fn test_place_defaults_from_json() {
        let place: Place = serde_json::from_str(
            r#"{"name": "Red Fort", "coordinates": {"lat": 28.6562, "lng": 77.241}}"#,
        )
        .unwrap();

        assert_eq!(place.rating, 0.0);
        assert_eq!(place.distance_from_center_km, 0.0);
        assert_eq!(place.visit_duration, VisitDuration::TwoToThreeHours);
        assert_eq!(place.best_time, TimeOfDay::Morning);
        assert!(place.kinds.is_empty());
    }
}
