//! The two catalog routes and their domain-to-wire mapping.
//!
//! Every failure surfaces as an empty-bodied 500: clients cannot distinguish
//! a malformed id, a missing row, and a store failure. Existing consumers
//! depend on that uniform mapping, including 500 (not 400) for a
//! non-integer id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::state::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/spaceships", get(list_spaceships))
        .route("/spaceships/{id}", get(get_spaceship))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle `GET /spaceships`.
async fn list_spaceships(State(state): State<AppState>) -> Response {
    match state.service().get_all() {
        Ok(spaceships) => (StatusCode::OK, Json(spaceships)).into_response(),
        Err(err) => {
            error!(error = %err, "listing spaceships failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Handle `GET /spaceships/{id}`.
///
/// The id is extracted as a raw string and parsed here so that a non-integer
/// value flows through the same 500 mapping as every other failure.
async fn get_spaceship(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            warn!(id = %id, "spaceship id is not an integer");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.service().get_by_id(id) {
        Ok(spaceship) => (StatusCode::OK, Json(spaceship)).into_response(),
        Err(err) => {
            error!(id, error = %err, "fetching spaceship failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
