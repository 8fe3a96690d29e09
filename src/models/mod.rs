pub mod coordinates;
pub mod distance;
pub mod itinerary;
pub mod place;
pub mod weather;

pub use coordinates::Coordinates;
pub use distance::{DistanceKm, DistanceMeters, RadiusMeters};
pub use itinerary::{
    BudgetLevel, CostEstimate, DayPlan, ExplorationInfo, ItineraryEntry, LegSource, PlanRequest,
    RouteAnalysis, RouteLeg, RouteStep, TripConstraints, TripPlan, TripSummary,
};
pub use place::{Place, TimeOfDay, VisitDuration};
pub use weather::WeatherSnapshot;
