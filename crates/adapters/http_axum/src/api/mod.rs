//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod eligibility;
#[allow(clippy::missing_errors_doc)]
pub mod service_area;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/eligibility", post(eligibility::check))
        .route("/service-area", get(service_area::get))
        .route("/service-area/cities", get(service_area::list_cities))
        .route("/service-area/nearest", get(service_area::nearest))
}
