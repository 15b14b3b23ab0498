//! Onboarding module - domain models, services, and traits.

mod onboarding_model;
mod onboarding_service;
mod onboarding_traits;

#[cfg(test)]
mod onboarding_service_tests;

pub use onboarding_model::{OnboardingError, OnboardingState, OnboardingStep, ProfileRequest};
pub use onboarding_service::OnboardingService;
pub use onboarding_traits::{OnboardingServiceTrait, ProfileApiTrait, SetupFlagStoreTrait};
