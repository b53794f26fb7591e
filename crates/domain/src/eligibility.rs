//! Eligibility — the three-way outcome of a service-area check.

use serde::{Deserialize, Serialize};

/// Why an address was accepted with a caveat or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The coordinate falls outside the region bounds.
    OutsideServiceArea,
    /// Inside the region bounds but not a listed city.
    LimitedAvailability,
    /// No city match and no coordinate to fall back on.
    LocationUnverified,
}

impl Reason {
    /// Message shown to the end user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::OutsideServiceArea => "outside service area",
            Self::LimitedAvailability => "limited availability; we will confirm by contacting you",
            Self::LocationUnverified => {
                "could not verify location; please choose a listed service area"
            }
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Decision of the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Exact match against a listed service city.
    Eligible,
    /// Accepted, pending manual confirmation.
    Provisional { reason: Reason },
    /// Rejected.
    Ineligible { reason: Reason },
}

impl Eligibility {
    /// Whether the booking flow may continue.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !matches!(self, Self::Ineligible { .. })
    }

    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::Eligible => None,
            Self::Provisional { reason } | Self::Ineligible { reason } => Some(*reason),
        }
    }

    /// Short lowercase label, also used as the `status` field on the wire.
    #[must_use]
    pub fn status(&self) -> EligibilityStatus {
        match self {
            Self::Eligible => EligibilityStatus::Eligible,
            Self::Provisional { .. } => EligibilityStatus::Provisional,
            Self::Ineligible { .. } => EligibilityStatus::Ineligible,
        }
    }
}

/// Variant tag of [`Eligibility`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityStatus {
    Eligible,
    Provisional,
    Ineligible,
}

impl std::fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eligible => f.write_str("eligible"),
            Self::Provisional => f.write_str("provisional"),
            Self::Ineligible => f.write_str("ineligible"),
        }
    }
}

/// Flattened view of an [`Eligibility`] for callers that drive UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: EligibilityStatus,
    pub is_eligible: bool,
    pub reason_message: Option<String>,
}

impl From<Eligibility> for ValidationResult {
    fn from(value: Eligibility) -> Self {
        Self {
            status: value.status(),
            is_eligible: value.is_eligible(),
            reason_message: value.reason().map(|r| r.message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flatten_eligible_without_message() {
        let result = ValidationResult::from(Eligibility::Eligible);
        assert!(result.is_eligible);
        assert!(result.reason_message.is_none());
        assert_eq!(result.status, EligibilityStatus::Eligible);
    }

    #[test]
    fn should_flatten_provisional_as_eligible_with_caveat() {
        let result = ValidationResult::from(Eligibility::Provisional {
            reason: Reason::LimitedAvailability,
        });
        assert!(result.is_eligible);
        assert_eq!(
            result.reason_message.as_deref(),
            Some("limited availability; we will confirm by contacting you")
        );
    }

    #[test]
    fn should_flatten_ineligible_with_reason() {
        let result = ValidationResult::from(Eligibility::Ineligible {
            reason: Reason::OutsideServiceArea,
        });
        assert!(!result.is_eligible);
        assert_eq!(result.reason_message.as_deref(), Some("outside service area"));
        assert_eq!(result.status, EligibilityStatus::Ineligible);
    }

    #[test]
    fn should_serialize_status_in_lowercase() {
        let result = ValidationResult::from(Eligibility::Ineligible {
            reason: Reason::LocationUnverified,
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "ineligible");
        assert_eq!(json["is_eligible"], false);
        assert_eq!(
            json["reason_message"],
            "could not verify location; please choose a listed service area"
        );
    }

    #[test]
    fn should_display_status_and_reason() {
        assert_eq!(EligibilityStatus::Provisional.to_string(), "provisional");
        assert_eq!(Reason::OutsideServiceArea.to_string(), "outside service area");
    }
}
