//! # detailzone-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** consumed by the booking funnel's address
//!   form (`/api/eligibility`, `/api/service-area`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and domain errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `detailzone-app` (for services) and `detailzone-domain`
//! (for types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
