//! # detailzone-app
//!
//! Application layer — use-cases over the service-area domain.
//!
//! ## Responsibilities
//! - `EligibilityService` — check an address, expose the service-city
//!   catalog, look up the nearest service city
//! - Emit structured `tracing` events for outcomes that need follow-up
//!
//! ## Dependency rule
//! Depends on `detailzone-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod services;
