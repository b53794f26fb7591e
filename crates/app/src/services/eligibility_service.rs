//! Eligibility service — use-cases for checking addresses against the service area.

use detailzone_domain::eligibility::Eligibility;
use detailzone_domain::error::{DetailZoneError, NotFoundError};
use detailzone_domain::geo::Coordinate;
use detailzone_domain::service_area::{NearestCity, ServiceArea};
use detailzone_domain::validator::ServiceAreaValidator;

/// Application service wrapping the [`ServiceAreaValidator`].
pub struct EligibilityService {
    validator: ServiceAreaValidator,
}

impl EligibilityService {
    /// Create a new service validating against `area`.
    pub fn new(area: ServiceArea) -> Self {
        Self {
            validator: ServiceAreaValidator::new(area),
        }
    }

    /// Classify an address and log the outcome.
    ///
    /// Only the address length and whether a coordinate was given are
    /// recorded; the address text and location stay out of logs.
    #[tracing::instrument(
        skip(self, address, coordinate),
        fields(address_len = address.map_or(0, str::len), has_coordinate = coordinate.is_some())
    )]
    pub fn check(&self, address: Option<&str>, coordinate: Option<Coordinate>) -> Eligibility {
        let outcome = self.validator.validate(address, coordinate);
        match outcome {
            Eligibility::Eligible => tracing::debug!(status = %outcome.status(), "address eligible"),
            Eligibility::Provisional { reason } => {
                tracing::info!(status = %outcome.status(), %reason, "needs manual confirmation");
            }
            Eligibility::Ineligible { reason } => {
                tracing::info!(status = %outcome.status(), %reason, "address rejected");
            }
        }
        outcome
    }

    /// The configured service area.
    pub fn service_area(&self) -> &ServiceArea {
        self.validator.service_area()
    }

    /// Closest configured city to `point`.
    ///
    /// # Errors
    ///
    /// Returns [`DetailZoneError::Validation`] if `point` is out of range,
    /// or [`DetailZoneError::NotFound`] when no city has a known center.
    #[tracing::instrument(skip(self, point))]
    pub fn nearest_city(&self, point: Coordinate) -> Result<NearestCity, DetailZoneError> {
        point.validate()?;
        self.service_area().nearest_city(point).ok_or_else(|| {
            NotFoundError {
                entity: "ServiceCity",
                detail: "no configured city has a center".to_string(),
            }
            .into()
        })
    }
}
