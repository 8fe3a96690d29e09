use crate::models::{Coordinates, Place, TimeOfDay, WeatherSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetLevel::Low => write!(f, "Low"),
            BudgetLevel::Medium => write!(f, "Medium"),
            BudgetLevel::High => write!(f, "High"),
        }
    }
}

impl FromStr for BudgetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(BudgetLevel::Low),
            "medium" => Ok(BudgetLevel::Medium),
            "high" => Ok(BudgetLevel::High),
            _ => Err(format!(
                "Invalid budget level: '{}'. Use 'Low', 'Medium' or 'High'",
                s
            )),
        }
    }
}

/// What the engine needs to know about the trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripConstraints {
    pub duration_days: u32,
    #[serde(default)]
    pub budget: BudgetLevel,
    /// Where sequencing starts; the first candidate when absent
    #[serde(default)]
    pub start: Option<Coordinates>,
}

impl TripConstraints {
    pub fn new(duration_days: u32, budget: BudgetLevel, start: Option<Coordinates>) -> Self {
        TripConstraints {
            duration_days,
            budget,
            start,
        }
    }
}

/// Entry-fee bucket derived from keywords in the place name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostEstimate {
    #[serde(rename = "Free")]
    Free,
    #[serde(rename = "$10-20")]
    Ticketed,
}

impl CostEstimate {
    const TICKETED_KEYWORDS: [&'static str; 4] = ["museum", "gallery", "palace", "castle"];

    pub fn for_place_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if Self::TICKETED_KEYWORDS
            .iter()
            .any(|word| name.contains(word))
        {
            CostEstimate::Ticketed
        } else {
            CostEstimate::Free
        }
    }

    pub fn special_requirements(&self) -> &'static str {
        match self {
            CostEstimate::Ticketed => "May require tickets",
            CostEstimate::Free => "None",
        }
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostEstimate::Free => write!(f, "Free"),
            CostEstimate::Ticketed => write!(f, "$10-20"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LegSource {
    /// Returned by the routing provider
    Routed,
    /// Straight-line fallback from the distance estimator
    Estimated,
}

/// One turn-by-turn instruction of a routed leg
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_m: f64,
    pub duration_s: f64,
}

/// Route from an itinerary entry to the next one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance_km: f64,
    pub travel_time_minutes: f64,
    pub travel_time_formatted: String,
    /// Path geometry, empty for estimated legs
    #[serde(default)]
    pub geometry: Vec<Coordinates>,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
    pub next_place: String,
    pub source: LegSource,
}

/// A place that made the final cut.
///
/// `place.best_time` holds the slot assigned by the allocator, not the
/// name-based suggestion it carried as a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryEntry {
    #[serde(flatten)]
    pub place: Place,
    pub estimated_cost: CostEstimate,
    pub special_requirements: String,
    /// Present on every entry except the last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_to_next: Option<RouteLeg>,
}

impl ItineraryEntry {
    pub fn new(mut place: Place, position: usize) -> Self {
        let estimated_cost = CostEstimate::for_place_name(&place.name);
        place.best_time = TimeOfDay::for_position(position);
        ItineraryEntry {
            place,
            estimated_cost,
            special_requirements: estimated_cost.special_requirements().to_string(),
            route_to_next: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.place.name
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.place.coordinates
    }

    pub fn best_time(&self) -> TimeOfDay {
        self.place.best_time
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u32,
    pub entries: Vec<ItineraryEntry>,
}

impl DayPlan {
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    pub total_distance_km: f64,
    pub total_travel_time_minutes: f64,
    pub total_travel_time_formatted: String,
    pub total_places: usize,
    pub start_location: String,
    pub end_location: String,
    pub average_distance_between_places: f64,
    pub route_efficiency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RouteAnalysis {
    pub efficiency: String,
    pub average_distance: String,
    pub suggestions: Vec<String>,
    pub nearby_groups: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationInfo {
    pub radius_km: f64,
    pub places_explored: usize,
    pub places_selected: usize,
    pub exploration_area: String,
}

/// A finished plan, ready for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: Uuid,
    pub destination: String,
    pub duration_days: u32,
    pub budget: BudgetLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub weather_considerations: Vec<String>,
    pub itinerary: Vec<ItineraryEntry>,
    pub total_visit_hours: f64,
    pub daily_breakdown: Vec<DayPlan>,
    pub summary: TripSummary,
    pub route_analysis: RouteAnalysis,
    pub exploration: ExplorationInfo,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

// Request types for API endpoints

#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub destination: String,
    pub duration_days: u32,
    #[serde(default)]
    pub budget: Option<BudgetLevel>,
    /// Overrides the geocoded destination as the sequencing start
    #[serde(default)]
    pub start_point: Option<Coordinates>,
}

impl PlanRequest {
    pub fn validate(&self, max_duration_days: u32) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".to_string());
        }
        if !(crate::constants::MIN_DURATION_DAYS..=max_duration_days)
            .contains(&self.duration_days)
        {
            return Err(format!(
                "duration_days must be between {} and {}",
                crate::constants::MIN_DURATION_DAYS,
                max_duration_days
            ));
        }
        if let Some(start) = self.start_point {
            Coordinates::new(start.lat, start.lng)?;
        }
        Ok(())
    }
}
