//! Nutrifolio API Client
//!
//! reqwest-based implementation of the core's remote API traits against the
//! nutrition backend REST service.
//!
//! # Overview
//!
//! One [`NutritionApiClient`] instance implements all four resource traits:
//!
//! - `ProfileApiTrait` - profile creation and goal derivation
//! - `GoalApiTrait` - goal reads/writes for the two form sections
//! - `TrackingApiTrait` - tracking initialization, tracking and progress reads
//! - `MealPlanApiTrait` - meal plan reads and the cascading delete
//!
//! The client stays dumb on purpose: payloads are returned as the raw wire
//! structs defined in `nutrifolio-core` and all enum-string normalization
//! happens in the core services. Status mapping is uniform: 404 becomes
//! `RemoteError::NotFound` (absence, recoverable), any other non-2xx becomes
//! `RemoteError::Http`, and transport failures become `RemoteError::Network`.

mod client;
mod goals;
mod meal_plans;
mod profiles;
mod tracking;

pub use client::{NutritionApiClient, DEFAULT_BASE_URL};
