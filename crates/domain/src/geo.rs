//! Geographic primitives — coordinates, bounding boxes, great-circle distance.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on Earth in degrees.
///
/// Serialized as `[longitude, latitude]`, the ordering used by the mapping
/// provider that geocodes addresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that both components are finite and inside their degree ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CoordinateOutOfRange`] otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        if lon_ok && lat_ok {
            Ok(())
        } else {
            Err(ValidationError::CoordinateOutOfRange {
                longitude: self.longitude,
                latitude: self.latitude,
            })
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.longitude, value.latitude]
    }
}

/// Axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Build validated bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBounds`] when the rectangle is
    /// degenerate, inverted, or outside valid degree ranges.
    pub fn new(north: f64, south: f64, west: f64, east: f64) -> Result<Self, ValidationError> {
        let bounds = Self {
            north,
            south,
            west,
            east,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBounds`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = [self.north, self.south, self.west, self.east];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ValidationError::InvalidBounds("bounds must be finite"));
        }
        if self.south < -90.0 || self.north > 90.0 {
            return Err(ValidationError::InvalidBounds(
                "latitudes must be within [-90, 90]",
            ));
        }
        if self.west < -180.0 || self.east > 180.0 {
            return Err(ValidationError::InvalidBounds(
                "longitudes must be within [-180, 180]",
            ));
        }
        if self.south >= self.north {
            return Err(ValidationError::InvalidBounds("south must be below north"));
        }
        if self.west >= self.east {
            return Err(ValidationError::InvalidBounds("west must be below east"));
        }
        Ok(())
    }

    /// Whether `point` lies inside these bounds, edges included.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        is_within_bounds(point, self)
    }
}

/// Inclusive bounding-box test.
#[must_use]
pub fn is_within_bounds(point: Coordinate, bounds: &GeoBounds) -> bool {
    (bounds.south..=bounds.north).contains(&point.latitude)
        && (bounds.west..=bounds.east).contains(&point.longitude)
}

/// Great-circle distance in kilometres using the haversine formula.
///
/// The haversine term is clamped to `[0, 1]` so rounding on antipodal or
/// coincident points cannot push `sqrt(1 - h)` into NaN territory.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn davis() -> Coordinate {
        Coordinate::new(-121.7405, 38.5449)
    }

    fn sacramento() -> Coordinate {
        Coordinate::new(-121.4944, 38.5816)
    }

    fn bounds() -> GeoBounds {
        GeoBounds::new(38.95, 38.20, -122.10, -121.00).unwrap()
    }

    #[test]
    fn should_return_zero_distance_for_identical_points() {
        assert!(distance_km(davis(), davis()).abs() < EPSILON);
        let origin = Coordinate::new(0.0, 0.0);
        assert!(distance_km(origin, origin).abs() < EPSILON);
    }

    #[test]
    fn should_be_symmetric() {
        let pairs = [
            (davis(), sacramento()),
            (Coordinate::new(-119.8, 39.5), Coordinate::new(151.2, -33.9)),
            (Coordinate::new(0.0, 89.9), Coordinate::new(179.9, -89.9)),
        ];
        for (a, b) in pairs {
            assert!((distance_km(a, b) - distance_km(b, a)).abs() < EPSILON);
        }
    }

    #[test]
    fn should_measure_one_degree_of_latitude_as_about_111_km() {
        let a = Coordinate::new(-121.0, 38.0);
        let b = Coordinate::new(-121.0, 39.0);
        let d = distance_km(a, b);
        assert!((d - 111.2).abs() < 111.2 * 0.01, "got {d}");
    }

    #[test]
    fn should_measure_davis_to_sacramento_around_22_km() {
        let d = distance_km(davis(), sacramento());
        assert!((20.0..24.0).contains(&d), "got {d}");
    }

    #[test]
    fn should_stay_finite_for_antipodal_points() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(180.0, 0.0));
        assert!(d.is_finite());
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn should_stay_finite_for_nearly_identical_points() {
        let a = Coordinate::new(-121.7405, 38.5449);
        let b = Coordinate::new(-121.740_500_000_1, 38.544_900_000_1);
        let d = distance_km(a, b);
        assert!(d.is_finite());
        assert!(d < 1e-6);
    }

    #[test]
    fn should_contain_point_inside_bounds() {
        assert!(is_within_bounds(davis(), &bounds()));
        assert!(bounds().contains(sacramento()));
    }

    #[test]
    fn should_include_every_edge_of_bounds() {
        let b = bounds();
        assert!(is_within_bounds(Coordinate::new(-121.5, b.north), &b));
        assert!(is_within_bounds(Coordinate::new(-121.5, b.south), &b));
        assert!(is_within_bounds(Coordinate::new(b.west, 38.5), &b));
        assert!(is_within_bounds(Coordinate::new(b.east, 38.5), &b));
        assert!(is_within_bounds(Coordinate::new(b.west, b.north), &b));
    }

    #[test]
    fn should_exclude_points_just_outside_bounds() {
        let b = bounds();
        assert!(!is_within_bounds(Coordinate::new(-121.5, b.north + 0.001), &b));
        assert!(!is_within_bounds(Coordinate::new(-121.5, b.south - 0.001), &b));
        assert!(!is_within_bounds(Coordinate::new(b.west - 0.001, 38.5), &b));
        assert!(!is_within_bounds(Coordinate::new(b.east + 0.001, 38.5), &b));
    }

    #[test]
    fn should_reject_inverted_bounds() {
        let result = GeoBounds::new(38.0, 39.0, -122.0, -121.0);
        assert!(matches!(result, Err(ValidationError::InvalidBounds(_))));

        let result = GeoBounds::new(39.0, 38.0, -121.0, -122.0);
        assert!(matches!(result, Err(ValidationError::InvalidBounds(_))));
    }

    #[test]
    fn should_reject_non_finite_bounds() {
        let result = GeoBounds::new(f64::NAN, 38.0, -122.0, -121.0);
        assert!(matches!(result, Err(ValidationError::InvalidBounds(_))));
    }

    #[test]
    fn should_reject_coordinate_out_of_range() {
        assert!(Coordinate::new(-181.0, 38.0).validate().is_err());
        assert!(Coordinate::new(-121.0, 91.0).validate().is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).validate().is_err());
        assert!(Coordinate::new(180.0, -90.0).validate().is_ok());
    }

    #[test]
    fn should_serialize_coordinate_as_longitude_latitude_pair() {
        let json = serde_json::to_string(&Coordinate::new(-121.37, 38.41)).unwrap();
        assert_eq!(json, "[-121.37,38.41]");

        let parsed: Coordinate = serde_json::from_str("[-119.8, 39.5]").unwrap();
        assert_eq!(parsed, Coordinate::new(-119.8, 39.5));
    }
}
