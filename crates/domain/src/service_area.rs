//! Service area — the immutable city list and region bounds a validator is built from.

use serde::{Deserialize, Serialize};

use crate::city::ServiceCity;
use crate::error::ValidationError;
use crate::geo::{Coordinate, GeoBounds, distance_km};

/// Configured operating region of the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub cities: Vec<ServiceCity>,
    pub bounds: GeoBounds,
}

/// Result of a nearest-city lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestCity {
    pub city: ServiceCity,
    pub distance_km: f64,
}

impl ServiceArea {
    /// Build a validated service area.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in the bounds or any city.
    pub fn new(cities: Vec<ServiceCity>, bounds: GeoBounds) -> Result<Self, ValidationError> {
        let area = Self { cities, bounds };
        area.validate()?;
        Ok(area)
    }

    /// Check domain invariants of the bounds and every city.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bounds.validate()?;
        for city in &self.cities {
            city.validate()?;
            if let Some(center) = city.center {
                center.validate()?;
            }
        }
        Ok(())
    }

    /// Configured city whose center is closest to `point`.
    ///
    /// Cities without a center are skipped; on a tie the earliest-listed
    /// city wins. Returns `None` when no city has a center.
    #[must_use]
    pub fn nearest_city(&self, point: Coordinate) -> Option<NearestCity> {
        let mut best: Option<(&ServiceCity, f64)> = None;
        for city in &self.cities {
            let Some(center) = city.center else {
                continue;
            };
            let distance = distance_km(point, center);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((city, distance));
            }
        }
        best.map(|(city, distance_km)| NearestCity {
            city: city.clone(),
            distance_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, center: Option<Coordinate>) -> ServiceCity {
        let mut builder = ServiceCity::builder().city_name(name).state_code("CA");
        if let Some(center) = center {
            builder = builder.center(center);
        }
        builder.build().unwrap()
    }

    fn bounds() -> GeoBounds {
        GeoBounds::new(38.95, 38.20, -122.10, -121.00).unwrap()
    }

    #[test]
    fn should_build_valid_service_area() {
        let area = ServiceArea::new(vec![city("Davis", None)], bounds()).unwrap();
        assert_eq!(area.cities.len(), 1);
    }

    #[test]
    fn should_reject_city_with_empty_state_code() {
        let mut bad = city("Davis", None);
        bad.state_code = String::new();
        let result = ServiceArea::new(vec![bad], bounds());
        assert_eq!(result, Err(ValidationError::EmptyStateCode));
    }

    #[test]
    fn should_reject_invalid_bounds() {
        let bounds = GeoBounds {
            north: 38.0,
            south: 39.0,
            west: -122.0,
            east: -121.0,
        };
        let result = ServiceArea::new(vec![], bounds);
        assert!(matches!(result, Err(ValidationError::InvalidBounds(_))));
    }

    #[test]
    fn should_find_nearest_city_by_center() {
        let area = ServiceArea::new(
            vec![
                city("Davis", Some(Coordinate::new(-121.7405, 38.5449))),
                city("Sacramento", Some(Coordinate::new(-121.4944, 38.5816))),
                city("Dixon", None),
            ],
            bounds(),
        )
        .unwrap();

        let nearest = area.nearest_city(Coordinate::new(-121.37, 38.41)).unwrap();
        assert_eq!(nearest.city.city_name, "Sacramento");
        assert!(nearest.distance_km > 0.0);
    }

    #[test]
    fn should_prefer_first_listed_city_on_tie() {
        let center = Coordinate::new(-121.7, 38.5);
        let area = ServiceArea::new(
            vec![city("Davis", Some(center)), city("Twin", Some(center))],
            bounds(),
        )
        .unwrap();

        let nearest = area.nearest_city(center).unwrap();
        assert_eq!(nearest.city.city_name, "Davis");
    }

    #[test]
    fn should_return_none_when_no_city_has_center() {
        let area = ServiceArea::new(vec![city("Davis", None)], bounds()).unwrap();
        assert!(area.nearest_city(Coordinate::new(-121.7, 38.5)).is_none());
    }
}
