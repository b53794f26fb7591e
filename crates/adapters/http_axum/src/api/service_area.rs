//! JSON handlers for the configured service area.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use detailzone_domain::city::ServiceCity;
use detailzone_domain::geo::Coordinate;
use detailzone_domain::service_area::{NearestCity, ServiceArea};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the nearest-city endpoint.
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    pub longitude: f64,
    pub latitude: f64,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ServiceArea>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the cities endpoint.
pub enum ListCitiesResponse {
    Ok(Json<Vec<ServiceCity>>),
}

impl IntoResponse for ListCitiesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the nearest endpoint.
pub enum NearestResponse {
    Ok(Json<NearestCity>),
}

impl IntoResponse for NearestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/service-area`
pub async fn get(State(state): State<AppState>) -> GetResponse {
    GetResponse::Ok(Json(state.eligibility_service.service_area().clone()))
}

/// `GET /api/service-area/cities`
pub async fn list_cities(State(state): State<AppState>) -> ListCitiesResponse {
    let cities = state.eligibility_service.service_area().cities.clone();
    ListCitiesResponse::Ok(Json(cities))
}

/// `GET /api/service-area/nearest?longitude=..&latitude=..`
pub async fn nearest(
    State(state): State<AppState>,
    Query(query): Query<NearestQuery>,
) -> Result<NearestResponse, ApiError> {
    let point = Coordinate::new(query.longitude, query.latitude);
    let nearest = state.eligibility_service.nearest_city(point)?;
    Ok(NearestResponse::Ok(Json(nearest)))
}
