//! Service city — a municipality the business explicitly advertises covering.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geo::Coordinate;

/// A named entry of the service-city list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCity {
    pub display_name: String,
    pub city_name: String,
    pub state_code: String,
    /// City center, only needed for nearest-city lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinate>,
}

impl ServiceCity {
    /// Create a builder for constructing a [`ServiceCity`].
    #[must_use]
    pub fn builder() -> ServiceCityBuilder {
        ServiceCityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCityName`] or
    /// [`ValidationError::EmptyStateCode`] when either is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.city_name.trim().is_empty() {
            return Err(ValidationError::EmptyCityName);
        }
        if self.state_code.trim().is_empty() {
            return Err(ValidationError::EmptyStateCode);
        }
        Ok(())
    }

    /// Whether both the city name and its state code occur in `normalized`.
    ///
    /// `normalized` must already be lowercase. This is a plain substring
    /// heuristic: "ca" matches inside any word, and abbreviations or typos
    /// of the city name never match. Surrounding whitespace in the
    /// configured name or code is ignored.
    #[must_use]
    pub fn appears_in(&self, normalized: &str) -> bool {
        normalized.contains(&self.city_name.trim().to_lowercase())
            && normalized.contains(&self.state_code.trim().to_lowercase())
    }
}

/// Step-by-step builder for [`ServiceCity`].
#[derive(Debug, Default)]
pub struct ServiceCityBuilder {
    display_name: Option<String>,
    city_name: Option<String>,
    state_code: Option<String>,
    center: Option<Coordinate>,
}

impl ServiceCityBuilder {
    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn city_name(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = Some(city_name.into());
        self
    }

    #[must_use]
    pub fn state_code(mut self, state_code: impl Into<String>) -> Self {
        self.state_code = Some(state_code.into());
        self
    }

    #[must_use]
    pub fn center(mut self, center: Coordinate) -> Self {
        self.center = Some(center);
        self
    }

    /// Consume the builder, validate, and return a [`ServiceCity`].
    ///
    /// Surrounding whitespace is stripped from the city name and state code.
    /// When no display name is given it becomes `"{city}, {state}"`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the city name or state code is
    /// missing or blank.
    pub fn build(self) -> Result<ServiceCity, ValidationError> {
        let city_name = self.city_name.unwrap_or_default().trim().to_string();
        let state_code = self.state_code.unwrap_or_default().trim().to_string();
        let display_name = self
            .display_name
            .unwrap_or_else(|| format!("{city_name}, {state_code}"));
        let city = ServiceCity {
            display_name,
            city_name,
            state_code,
            center: self.center,
        };
        city.validate()?;
        Ok(city)
    }
}
