//! # detailzone-domain
//!
//! Pure domain model for the service-area check of the detailing booking funnel.
//!
//! ## Responsibilities
//! - Geographic primitives: [`geo::Coordinate`], [`geo::GeoBounds`], haversine distance
//! - Define **service cities** (municipalities the business advertises covering)
//! - Define the **service area** (city list + region bounds), injected as configuration
//! - Define the **eligibility** outcome (eligible / provisional / ineligible)
//! - Implement the **validator** that classifies an address
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Adapters reach it through `detailzone-app`.

pub mod error;
pub mod geo;

pub mod city;
pub mod eligibility;
pub mod service_area;
pub mod validator;
