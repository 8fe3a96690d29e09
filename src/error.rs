use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    #[error("Place search error: {0}")]
    PlaceSearch(String),

    #[error("Routing API error: {0}")]
    Routing(String),

    #[error("Weather API error: {0}")]
    Weather(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No places found: {0}")]
    NoPlacesFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Geocoding(ref e) => {
                tracing::info!("Geocoding failed: {}", e);
                (StatusCode::NOT_FOUND, e.as_str())
            }
            AppError::PlaceSearch(ref e) => {
                tracing::error!("Place search error: {}", e);
                (StatusCode::BAD_GATEWAY, "Place search service error")
            }
            AppError::Routing(ref e) => {
                tracing::error!("Routing API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Routing service error")
            }
            AppError::Weather(ref e) => {
                tracing::warn!("Weather API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Weather service error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::NoPlacesFound(ref e) => {
                tracing::info!("No places found: {}", e);
                (StatusCode::NOT_FOUND, e.as_str())
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NoPlacesFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Geocoding("x".into()), StatusCode::NOT_FOUND),
            (AppError::Routing("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
