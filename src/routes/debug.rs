use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Report how the planner is configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let config = state.planner.config();

    let weather = match (config.include_weather, state.planner.has_weather_provider()) {
        (false, _) => json!("disabled"),
        (true, true) => json!("ok"),
        (true, false) => json!({"error": "OPENWEATHER_API_KEY not set"}),
    };

    let routing = if config.include_routes {
        "ok"
    } else {
        "estimated only"
    };

    Json(json!({
        "status": "ok",
        "checks": {
            "place_search": "ok",
            "routing": routing,
            "weather": weather,
            "max_duration_days": config.max_duration_days,
            "default_budget": config.default_budget,
        }
    }))
}
