//! Shared application state for axum handlers.

use std::sync::Arc;

use detailzone_app::services::eligibility_service::EligibilityService;

/// Application state shared across all axum handlers.
///
/// Cloned per request; only the `Arc` is cloned.
#[derive(Clone)]
pub struct AppState {
    /// Service-area eligibility checks and catalog queries.
    pub eligibility_service: Arc<EligibilityService>,
}

impl AppState {
    /// Create a new application state from a service instance.
    pub fn new(eligibility_service: EligibilityService) -> Self {
        Self::from_arc(Arc::new(eligibility_service))
    }

    /// Create a new application state from a pre-wrapped service.
    pub fn from_arc(eligibility_service: Arc<EligibilityService>) -> Self {
        Self {
            eligibility_service,
        }
    }
}
