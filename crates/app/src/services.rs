//! Application services — use-case implementations.
//!
//! Services own the domain objects they drive and add the cross-cutting
//! concerns (logging, error mapping) that the pure domain stays free of.

pub mod eligibility_service;
