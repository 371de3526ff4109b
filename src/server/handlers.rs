//! Resolve server HTTP handlers.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use super::types::{
    EchoedCoordinates, HealthResponse, ResolveFailure, ResolveRequest, ResolveResponse,
};
use super::AppState;
use crate::config::SERVICE_NAME;
use crate::error_handling::ResolveError;
use crate::geocode::Coordinates;

const INVALID_COORDINATES_ERROR: &str =
    "Invalid coordinates: lat and lng must be finite numbers";
const RESOLUTION_FAILED_ERROR: &str = "Could not resolve an address from any provider";

/// `POST /resolve`: turns coordinates into a structured address.
pub async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::debug!("malformed resolve body: {}", rejection);
            return invalid_coordinates_response();
        }
    };

    // Presence and finiteness are the only validity requirements; zero and
    // out-of-range values are legitimate inputs
    let (lat, lng) = match (request.lat, request.lng) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => (lat, lng),
        _ => return invalid_coordinates_response(),
    };

    let language = request
        .language
        .filter(|language| !language.trim().is_empty())
        .unwrap_or_else(|| state.default_language.clone());

    match state.chain.resolve(Coordinates::new(lat, lng), &language).await {
        Ok(address) => {
            let response = ResolveResponse {
                success: true,
                source: address.source,
                address,
                cacheable: true,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(ResolveError::InvalidCoordinates) => invalid_coordinates_response(),
        Err(ResolveError::ResolutionFailed { .. }) => {
            let failure = ResolveFailure {
                success: false,
                error: RESOLUTION_FAILED_ERROR.to_string(),
                manual_entry: Some(true),
                // Echo what the client sent, not the clamped pair
                coordinates: Some(EchoedCoordinates { lat, lng }),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response()
        }
    }
}

/// `GET /health`: service identity and liveness.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let response = HealthResponse {
        success: true,
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs(),
        environment: state.environment.clone(),
        endpoints: vec!["POST /resolve", "GET /health"],
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn invalid_coordinates_response() -> Response {
    let failure = ResolveFailure {
        success: false,
        error: INVALID_COORDINATES_ERROR.to_string(),
        manual_entry: None,
        coordinates: None,
    };
    (StatusCode::BAD_REQUEST, Json(failure)).into_response()
}
