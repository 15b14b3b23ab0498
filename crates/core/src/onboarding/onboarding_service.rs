use log::{debug, error};
use std::sync::{Arc, RwLock};

use super::onboarding_model::{OnboardingError, OnboardingState, OnboardingStep, ProfileRequest};
use super::onboarding_traits::{OnboardingServiceTrait, ProfileApiTrait, SetupFlagStoreTrait};
use crate::errors::{Error, Result};
use crate::tracking::TrackingApiTrait;

/// Sequences profile creation, goal derivation, and tracking initialization.
///
/// First failure wins: a failed step stops the sequence and nothing already
/// committed is rolled back. The failure carries the committed profile id so
/// callers can resume from the goal step rather than create a duplicate
/// profile. Concurrent runs are not deduplicated; the caller serializes.
pub struct OnboardingService {
    profile_api: Arc<dyn ProfileApiTrait>,
    tracking_api: Arc<dyn TrackingApiTrait>,
    flags: Arc<dyn SetupFlagStoreTrait>,
    state: RwLock<OnboardingState>,
}

impl OnboardingService {
    pub fn new(
        profile_api: Arc<dyn ProfileApiTrait>,
        tracking_api: Arc<dyn TrackingApiTrait>,
        flags: Arc<dyn SetupFlagStoreTrait>,
    ) -> Self {
        Self {
            profile_api,
            tracking_api,
            flags,
            state: RwLock::new(OnboardingState::Idle),
        }
    }

    fn set_state(&self, state: OnboardingState) {
        *self.state.write().unwrap() = state;
    }

    fn fail(&self, step: OnboardingStep, profile_id: Option<String>, source: Error) -> Error {
        error!("Onboarding step '{}' failed: {}", step, source);
        self.set_state(OnboardingState::Failed {
            step,
            profile_id: profile_id.clone(),
        });
        OnboardingError {
            step,
            profile_id,
            source: Box::new(source),
        }
        .into()
    }

    /// Both flags are set together; a reader observing only one treats
    /// onboarding as incomplete.
    fn mark_complete(&self) -> Result<()> {
        self.flags.set_profile_setup_complete(true)?;
        self.flags.set_health_profile_complete(true)?;
        Ok(())
    }

    /// Steps 2 and 3: goal derivation and tracking initialization for an
    /// already committed profile.
    async fn derive_and_track(&self, profile_id: &str, user_id: &str) -> Result<()> {
        if let Err(e) = self.profile_api.create_goal_from_profile(profile_id).await {
            return Err(self.fail(OnboardingStep::Goal, Some(profile_id.to_string()), e));
        }
        self.set_state(OnboardingState::GoalDerived {
            profile_id: profile_id.to_string(),
        });

        if let Err(e) = self.tracking_api.create_tracking(user_id).await {
            return Err(self.fail(OnboardingStep::Tracking, Some(profile_id.to_string()), e));
        }
        self.set_state(OnboardingState::TrackingReady {
            profile_id: profile_id.to_string(),
        });

        self.mark_complete()?;
        self.set_state(OnboardingState::Complete {
            profile_id: profile_id.to_string(),
        });
        Ok(())
    }
}

#[async_trait::async_trait]
impl OnboardingServiceTrait for OnboardingService {
    async fn run(&self, request: ProfileRequest) -> Result<String> {
        request.validate()?;
        self.set_state(OnboardingState::Idle);

        debug!("Creating profile for user {}", request.user_id);
        let profile_id = match self.profile_api.create_profile(&request).await {
            Ok(id) => id,
            Err(e) => return Err(self.fail(OnboardingStep::Profile, None, e)),
        };
        self.set_state(OnboardingState::ProfileCreated {
            profile_id: profile_id.clone(),
        });

        self.derive_and_track(&profile_id, &request.user_id).await?;
        Ok(profile_id)
    }

    async fn resume(&self, profile_id: &str, user_id: &str) -> Result<()> {
        debug!(
            "Resuming onboarding for profile {} (user {})",
            profile_id, user_id
        );
        self.set_state(OnboardingState::ProfileCreated {
            profile_id: profile_id.to_string(),
        });
        self.derive_and_track(profile_id, user_id).await
    }

    fn state(&self) -> OnboardingState {
        self.state.read().unwrap().clone()
    }
}
