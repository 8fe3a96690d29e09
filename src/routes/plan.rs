use crate::error::Result;
use crate::export::{self, ExportFormat};
use crate::models::{PlanRequest, TripPlan};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: Option<String>,
}

/// POST /trips/plan
/// Build a complete itinerary for a destination
pub async fn create_trip_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<TripPlan>> {
    tracing::info!(
        destination = %request.destination,
        duration_days = request.duration_days,
        "Trip plan request: {} for {} days",
        request.destination, request.duration_days
    );

    let plan = state.planner.plan(&request).await?;
    Ok(Json(plan))
}

/// POST /trips/export?format=mobile|html|json
/// Plan a trip and return it as a downloadable document
pub async fn export_trip_plan(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
    Json(request): Json<PlanRequest>,
) -> Result<Response> {
    let format = query
        .format
        .as_deref()
        .map(ExportFormat::from_name)
        .unwrap_or_default();

    let plan = state.planner.plan(&request).await?;
    let exported = export::export_trip_plan(&plan, format)?;

    tracing::info!(
        filename = %exported.filename,
        format = %exported.format,
        bytes = exported.content.len(),
        "Exported trip plan"
    );

    Ok((
        [
            (header::CONTENT_TYPE, exported.mime_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", exported.filename),
            ),
        ],
        exported.content,
    )
        .into_response())
}
