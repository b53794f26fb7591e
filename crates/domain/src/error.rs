//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DetailZoneError`] via `#[from]`.

/// Top-level error for everything built on the domain.
#[derive(Debug, thiserror::Error)]
pub enum DetailZoneError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated while constructing a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A service city was configured without a city name.
    #[error("city name must not be empty")]
    EmptyCityName,

    /// A service city was configured without a state code.
    #[error("state code must not be empty")]
    EmptyStateCode,

    /// Region bounds are not a well-formed rectangle.
    #[error("invalid bounds: {0}")]
    InvalidBounds(&'static str),

    /// A coordinate is non-finite or outside the valid degree ranges.
    #[error("coordinate out of range: longitude {longitude}, latitude {latitude}")]
    CoordinateOutOfRange { longitude: f64, latitude: f64 },
}

/// A lookup found nothing to return.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {detail}")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (e.g. `"ServiceCity"`).
    pub entity: &'static str,
    /// What was searched for.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_error_message() {
        assert_eq!(
            ValidationError::EmptyCityName.to_string(),
            "city name must not be empty"
        );
        assert_eq!(
            ValidationError::InvalidBounds("south must be below north").to_string(),
            "invalid bounds: south must be below north"
        );
    }

    #[test]
    fn should_display_not_found_error_message() {
        let err = NotFoundError {
            entity: "ServiceCity",
            detail: "no city has a center".to_string(),
        };
        assert_eq!(err.to_string(), "ServiceCity not found: no city has a center");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: DetailZoneError = ValidationError::EmptyStateCode.into();
        assert!(matches!(
            err,
            DetailZoneError::Validation(ValidationError::EmptyStateCode)
        ));
    }
}
