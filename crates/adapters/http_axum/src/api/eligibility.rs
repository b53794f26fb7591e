//! JSON handler for address eligibility checks.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use detailzone_domain::eligibility::ValidationResult;
use detailzone_domain::geo::Coordinate;

use crate::state::AppState;

/// Request body for an eligibility check.
///
/// Both fields are optional: the geocoder may fail to resolve a coordinate,
/// and a missing address is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub address: Option<String>,
    /// `[longitude, latitude]` from the geocoder.
    pub coordinate: Option<Coordinate>,
}

/// Possible responses from the check endpoint.
pub enum CheckResponse {
    Ok(Json<ValidationResult>),
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/eligibility`
///
/// Always answers with a [`ValidationResult`]; a coordinate outside valid
/// degree ranges lands outside the region bounds and is rejected as such.
pub async fn check(State(state): State<AppState>, Json(req): Json<CheckRequest>) -> CheckResponse {
    let outcome = state
        .eligibility_service
        .check(req.address.as_deref(), req.coordinate);
    CheckResponse::Ok(Json(outcome.into()))
}
