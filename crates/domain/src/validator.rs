//! Service-area validator — decides whether an address qualifies for service.
//!
//! Two tiers: an exact city/state match short-circuits, otherwise the
//! coordinate (if any) is tested against the region bounds. Anything inside
//! the bounds is provisionally accepted so leads are not lost.

use crate::eligibility::{Eligibility, Reason};
use crate::geo::{Coordinate, is_within_bounds};
use crate::service_area::ServiceArea;

/// Pure classifier over an injected [`ServiceArea`].
#[derive(Debug, Clone)]
pub struct ServiceAreaValidator {
    area: ServiceArea,
}

impl ServiceAreaValidator {
    #[must_use]
    pub fn new(area: ServiceArea) -> Self {
        Self { area }
    }

    #[must_use]
    pub fn service_area(&self) -> &ServiceArea {
        &self.area
    }

    /// Whether any configured city appears with its paired state code.
    ///
    /// Matching is case-insensitive substring search on the whole address;
    /// empty or absent input never matches. Accepts `&str` or `Option<&str>`.
    #[must_use]
    pub fn is_known_service_city<'a>(&self, address: impl Into<Option<&'a str>>) -> bool {
        let address: Option<&str> = address.into();
        let Some(address) = address.filter(|a| !a.is_empty()) else {
            return false;
        };
        let normalized = address.to_lowercase();
        self.area.cities.iter().any(|c| c.appears_in(&normalized))
    }

    /// Classify an address, falling back to the coordinate when the text
    /// does not name a listed city.
    ///
    /// Never fails: a coordinate outside valid degree ranges is simply
    /// outside the region bounds.
    #[must_use]
    pub fn validate<'a>(
        &self,
        address: impl Into<Option<&'a str>>,
        coordinate: Option<Coordinate>,
    ) -> Eligibility {
        if self.is_known_service_city(address) {
            return Eligibility::Eligible;
        }
        match coordinate {
            Some(point) if is_within_bounds(point, &self.area.bounds) => {
                Eligibility::Provisional {
                    reason: Reason::LimitedAvailability,
                }
            }
            Some(_) => Eligibility::Ineligible {
                reason: Reason::OutsideServiceArea,
            },
            None => Eligibility::Ineligible {
                reason: Reason::LocationUnverified,
            },
        }
    }
}
