use async_trait::async_trait;

use crate::errors::Result;
use crate::onboarding::onboarding_model::{OnboardingState, ProfileRequest};

/// Trait for the remote profile resource.
#[async_trait]
pub trait ProfileApiTrait: Send + Sync {
    /// Creates the profile and returns its server-issued id.
    async fn create_profile(&self, request: &ProfileRequest) -> Result<String>;
    /// Derives a tracking goal from the profile, returning the goal id.
    async fn create_goal_from_profile(&self, profile_id: &str) -> Result<String>;
    /// Re-derives the tracking goal after a profile change.
    async fn update_goal_from_profile(&self, profile_id: &str) -> Result<()>;
}

/// Trait for the local completion-flag store (the platform shell provides
/// the backing storage).
pub trait SetupFlagStoreTrait: Send + Sync {
    fn set_profile_setup_complete(&self, complete: bool) -> Result<()>;
    fn set_health_profile_complete(&self, complete: bool) -> Result<()>;
    fn profile_setup_complete(&self) -> Result<bool>;
    fn health_profile_complete(&self) -> Result<bool>;

    /// Onboarding counts as complete only when both flags are set.
    fn is_onboarding_complete(&self) -> Result<bool> {
        Ok(self.profile_setup_complete()? && self.health_profile_complete()?)
    }
}

/// Trait for onboarding orchestration.
#[async_trait]
pub trait OnboardingServiceTrait: Send + Sync {
    /// Runs profile creation, goal derivation, and tracking initialization
    /// in sequence. Not safe to re-run after a partial success; use
    /// `resume` with the profile id carried by the error instead.
    async fn run(&self, request: ProfileRequest) -> Result<String>;

    /// Resumes a partially onboarded user from the goal step.
    async fn resume(&self, profile_id: &str, user_id: &str) -> Result<()>;

    fn state(&self) -> OnboardingState;
}
