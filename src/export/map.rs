use crate::models::ItineraryEntry;
use crate::services::analyzer;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

const GOOGLE_MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Google Maps search link for a place in the destination
pub fn google_maps_link(place_name: &str, destination: &str) -> String {
    let query = format!("{}, {}", place_name, destination);
    format!("{}{}", GOOGLE_MAPS_SEARCH_URL, urlencoding::encode(&query))
}

/// One point per stop in visiting order plus the line joining them.
/// Stops without coordinates are left out of both.
pub fn route_feature_collection(entries: &[ItineraryEntry]) -> FeatureCollection {
    let mut features = Vec::with_capacity(entries.len() + 1);
    let mut line = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let Some(coordinates) = entry.coordinates() else {
            continue;
        };
        let position = coordinates.to_lng_lat().to_vec();
        line.push(position.clone());

        let mut properties = JsonObject::new();
        properties.insert("order".to_string(), json!(i + 1));
        properties.insert("name".to_string(), json!(entry.name()));
        properties.insert(
            "visit_duration".to_string(),
            json!(entry.place.visit_duration.label()),
        );
        properties.insert("best_time".to_string(), json!(entry.best_time()));

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(position))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    if line.len() > 1 {
        let mut properties = JsonObject::new();
        properties.insert("kind".to_string(), json!("route"));
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(line))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    let mut summary = JsonObject::new();
    summary.insert(
        "total_distance_km".to_string(),
        json!(analyzer::total_distance_km(entries)),
    );
    summary.insert(
        "start_location".to_string(),
        json!(entries.first().map(|e| e.name()).unwrap_or("Unknown")),
    );
    summary.insert(
        "end_location".to_string(),
        json!(entries.last().map(|e| e.name()).unwrap_or("Unknown")),
    );

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(summary),
    }
}
