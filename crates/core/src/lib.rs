//! Nutrifolio Core - Domain entities, services, and traits.
//!
//! This crate contains the reconciliation and normalization layer that sits
//! between the UI and the remote nutrition services: typed parsing of the
//! backend's loosely-typed enum strings, the multi-step onboarding
//! sequence, consumed-vs-target progress aggregation, and meal plan /
//! tracking consistency. It is transport-agnostic and defines API traits
//! that are implemented by the `nutrifolio-api` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod keys;
pub mod meal_plans;
pub mod onboarding;
pub mod session;
pub mod tracking;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
